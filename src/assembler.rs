//! Groups phonemes into pronounceable segments.
//!
//! A segment closes after a vowel unless all that still sounds before the end
//! of the word is a single consonant, which then joins the vowel. The `NG`
//! closing a nasal vowel belongs to the vowel, so the segment closes after it
//! instead. Graphemes are never split between segments, and silent graphemes
//! stay with the segment before them without adding display text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::phoneme::{Phoneme, Symbol, Viseme};

pub const DEFAULT_SEPARATOR: &str = "·";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub phonemes: Vec<Phoneme>,
    pub display: String,
}

impl Segment {
    pub fn new(phonemes: Vec<Phoneme>, display: String) -> Self {
        Self { phonemes, display }
    }

    /// The gap between two words.
    pub fn pause() -> Self {
        Self::new(vec![Phoneme::rest()], " ".to_string())
    }

    pub fn is_pause(&self) -> bool {
        matches!(self.phonemes.as_slice(), [p] if p.is_rest())
    }

    /// Sounding symbols, in order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.phonemes.iter().filter_map(|p| p.symbol)
    }
}

/// The breakdown of one input text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakdownResult {
    /// Normalized text the breakdown was made from.
    pub text: String,
    pub segments: Vec<Segment>,
}

impl BreakdownResult {
    pub fn new(text: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            text: text.into(),
            segments,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flattened display form: segments joined by `separator`, words by a
    /// single space. A word with nothing to show (`h`, `-`) leaves no gap.
    pub fn render(&self, separator: &str) -> String {
        self.segments
            .split(Segment::is_pause)
            .map(|word| {
                word.iter()
                    .map(|segment| segment.display.as_str())
                    .filter(|display| !display.is_empty())
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.segments.iter().flat_map(Segment::symbols).collect()
    }

    pub fn visemes(&self) -> Vec<Viseme> {
        self.symbols().iter().map(Symbol::viseme).collect()
    }
}

impl fmt::Display for BreakdownResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}

/// Splits one word's phonemes into segments. `text` is the string the
/// phoneme origins point into.
pub fn assemble(text: &str, phonemes: &[Phoneme]) -> Vec<Segment> {
    let groups = group_by_origin(phonemes);

    let mut segments: Vec<Segment> = Vec::new();
    let mut current = Segment::new(Vec::new(), String::new());
    let mut after_vowel = false;

    for (k, group) in groups.iter().enumerate() {
        let sounding = group.iter().any(|p| !p.is_silent());
        if !sounding && current.phonemes.is_empty() {
            if let Some(last) = segments.last_mut() {
                last.phonemes.extend_from_slice(group);
                continue;
            }
        }

        current.phonemes.extend_from_slice(group);
        if sounding {
            if let Some(span) = group[0].origin {
                current.display.push_str(span.slice(text));
            }
        }

        let vowel = group.iter().any(Phoneme::is_vowel);
        let nucleus = vowel || (after_vowel && is_nasal_coda(group));
        let coda_follows = groups.get(k + 1).is_some_and(|next| is_nasal_coda(next));
        if nucleus && !coda_follows && closes_after(&groups[k + 1..]) {
            segments.push(std::mem::replace(
                &mut current,
                Segment::new(Vec::new(), String::new()),
            ));
        }
        after_vowel = vowel;
    }

    if !current.phonemes.is_empty() {
        segments.push(current);
    }
    segments
}

/// Consecutive phonemes read from the same grapheme.
fn group_by_origin(phonemes: &[Phoneme]) -> Vec<&[Phoneme]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=phonemes.len() {
        let split = i == phonemes.len()
            || phonemes[i].origin.is_none()
            || phonemes[i].origin != phonemes[start].origin;
        if split {
            groups.push(&phonemes[start..i]);
            start = i;
        }
    }
    groups
}

/// A grapheme read as a lone `NG`, the consonant half of a nasal vowel.
fn is_nasal_coda(group: &[Phoneme]) -> bool {
    matches!(group, [p] if p.symbol == Some(Symbol::Ng))
}

fn closes_after(rest: &[&[Phoneme]]) -> bool {
    let ahead: Vec<&Phoneme> = rest
        .iter()
        .flat_map(|group| group.iter())
        .filter(|p| !p.is_silent())
        .collect();
    ahead.iter().any(|p| p.is_vowel()) || ahead.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::Symbol::*;
    use crate::token::Span;

    /// Builds phonemes for `parts`, each part being a grapheme and its
    /// space separated symbols (empty for a silent grapheme).
    fn word(parts: &[(&str, &str)]) -> (String, Vec<Phoneme>) {
        let mut text = String::new();
        let mut phonemes = Vec::new();
        for (grapheme, sounds) in parts {
            let span = Span::new(text.len(), text.len() + grapheme.len());
            text.push_str(grapheme);
            if sounds.is_empty() {
                phonemes.push(Phoneme::silent(Some(span)));
            }
            for sound in sounds.split_whitespace() {
                phonemes.push(Phoneme::sounded(sound.parse().unwrap(), Some(span)));
            }
        }
        (text, phonemes)
    }

    fn displays(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|s| s.display.as_str()).collect()
    }

    #[test]
    fn test_silent_final_joins_segment() {
        let (text, ps) = word(&[("ch", "SH"), ("a", "AE0"), ("t", "")]);
        let segments = assemble(&text, &ps);
        assert_eq!(displays(&segments), vec!["cha"]);
        assert_eq!(segments[0].phonemes.len(), 3);
        assert!(segments[0].phonemes[2].is_silent());
    }

    #[test]
    fn test_boundary_after_vowel() {
        let (text, ps) = word(&[
            ("m", "M"),
            ("ai", "EH0"),
            ("s", "Z"),
            ("o", "AO0"),
            ("n", "NG"),
        ]);
        assert_eq!(displays(&assemble(&text, &ps)), vec!["mai", "son"]);
    }

    #[test]
    fn test_two_trailing_consonants_split() {
        let (text, ps) = word(&[("p", "P"), ("a", "AE0"), ("r", "R"), ("c", "K")]);
        assert_eq!(displays(&assemble(&text, &ps)), vec!["pa", "rc"]);
    }

    #[test]
    fn test_multi_symbol_grapheme_not_split() {
        let (text, ps) = word(&[("m", "M"), ("er", "EH0 R"), ("c", "S"), ("i", "IH0")]);
        let segments = assemble(&text, &ps);
        assert_eq!(displays(&segments), vec!["mer", "ci"]);
        assert_eq!(segments[0].symbols().collect::<Vec<_>>(), vec![M, Eh, R]);
    }

    #[test]
    fn test_silent_after_boundary_attaches_backwards() {
        let (text, ps) = word(&[
            ("d", "D"),
            ("e", "EH0"),
            ("h", ""),
            ("o", "AO0"),
            ("r", "R"),
            ("s", ""),
        ]);
        let segments = assemble(&text, &ps);
        assert_eq!(displays(&segments), vec!["de", "or"]);
        assert_eq!(segments[0].phonemes.len(), 3);
    }

    #[test]
    fn test_nasal_coda_stays_with_vowel() {
        let (text, ps) = word(&[
            ("b", "B"),
            ("o", "AO0"),
            ("n", "NG"),
            ("j", "JH"),
            ("ou", "UW0"),
            ("r", "R"),
        ]);
        assert_eq!(displays(&assemble(&text, &ps)), vec!["bon", "jour"]);

        let (text, ps) = word(&[
            ("e", "AE0"),
            ("n", "NG"),
            ("f", "F"),
            ("a", "AE0"),
            ("n", "NG"),
            ("t", ""),
        ]);
        let segments = assemble(&text, &ps);
        assert_eq!(displays(&segments), vec!["en", "fan"]);
        assert!(segments[1].phonemes[3].is_silent());
    }

    #[test]
    fn test_no_vowel_single_segment() {
        let (text, ps) = word(&[("b", "B"), ("rr", "R")]);
        let segments = assemble(&text, &ps);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].display, "brr");
        assert!(assemble("", &[]).is_empty());
    }

    #[test]
    fn test_render_with_pauses() {
        let result = BreakdownResult::new(
            "le maison",
            vec![
                Segment::new(vec![Phoneme::sounded(L, None)], "le".into()),
                Segment::pause(),
                Segment::new(vec![Phoneme::sounded(M, None)], "mai".into()),
                Segment::new(vec![Phoneme::sounded(Z, None)], "son".into()),
            ],
        );
        assert_eq!(result.render("-"), "le mai-son");
        assert_eq!(result.to_string(), "le mai·son");
        assert_eq!(result.symbols(), vec![L, Rest, M, Z]);
        assert_eq!(result.visemes()[1], Viseme::Rest);
        assert!(BreakdownResult::empty().render("·").is_empty());
    }

    #[test]
    fn test_render_skips_words_without_display() {
        let silent = Segment::new(vec![Phoneme::silent(None)], String::new());
        let cha = Segment::new(vec![Phoneme::sounded(Sh, None)], "cha".into());
        let result = BreakdownResult::new(
            "h chat h",
            vec![silent.clone(), Segment::pause(), cha, Segment::pause(), silent.clone()],
        );
        assert_eq!(result.render("·"), "cha");

        let only_silent = BreakdownResult::new("h", vec![silent]);
        assert_eq!(only_silent.render("·"), "");
    }
}
