//! Longest-match grapheme segmentation.
//!
//! The pattern table is priority ordered: at each position the longest
//! pattern (in characters) wins, and among patterns of the same length the
//! one declared first wins. Characters no pattern covers come out as
//! single-character fallback units, so segmentation always covers the whole
//! input.

use std::collections::HashMap;

use crate::token::GraphemeUnit;

pub struct Segmenter {
    /// Pattern text to the index of its first declaration.
    patterns: HashMap<String, usize>,
    max_len: usize,
}

impl Segmenter {
    pub fn new(patterns: &[&str]) -> Self {
        let mut table = HashMap::new();
        let mut max_len = 1;
        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.is_empty() {
                continue;
            }
            max_len = max_len.max(pattern.chars().count());
            table.entry(pattern.to_string()).or_insert(index);
        }
        Self {
            patterns: table,
            max_len,
        }
    }

    pub fn segment(&self, word: &str) -> Vec<GraphemeUnit> {
        let boundaries: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let char_count = boundaries.len() - 1;

        let mut units = Vec::new();
        let mut pos = 0;
        while pos < char_count {
            let longest = self.max_len.min(char_count - pos);
            let start = boundaries[pos];

            let matched = (1..=longest).rev().find_map(|len| {
                let candidate = &word[start..boundaries[pos + len]];
                self.patterns.get(candidate).map(|&index| (len, index))
            });

            let (len, pattern) = match matched {
                Some((len, index)) => (len, Some(index)),
                None => (1, None),
            };
            units.push(GraphemeUnit::new(
                &word[start..boundaries[pos + len]],
                start,
                pattern,
            ));
            pos += len;
        }
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(units: &[GraphemeUnit]) -> Vec<&str> {
        units.iter().map(|u| u.text.as_str()).collect()
    }

    #[test]
    fn test_longest_match() {
        let seg = Segmenter::new(&["eau", "au", "ch", "a", "e", "u", "c", "h", "t"]);
        let units = seg.segment("chateau");
        assert_eq!(texts(&units), vec!["ch", "a", "t", "eau"]);
        assert_eq!(units[3].start, 4);
        assert_eq!(units[3].end, 7);
    }

    #[test]
    fn test_fallback_unit() {
        let seg = Segmenter::new(&["a", "o"]);
        let units = seg.segment("año");
        assert_eq!(texts(&units), vec!["a", "ñ", "o"]);
        assert_eq!(units[1].pattern, None);
        assert_eq!((units[1].start, units[1].end), (1, 3));
        assert_eq!(units[2].start, 3);
    }

    #[test]
    fn test_equal_length_tie_break() {
        let seg = Segmenter::new(&["ou", "ch", "ou", "o", "u"]);
        let units = seg.segment("ou");
        assert_eq!(texts(&units), vec!["ou"]);
        assert_eq!(units[0].pattern, Some(0));
    }

    #[test]
    fn test_empty_input() {
        let seg = Segmenter::new(&["a"]);
        assert!(seg.segment("").is_empty());
    }

    #[test]
    fn test_multibyte_patterns() {
        let seg = Segmenter::new(&["œu", "oeu", "c", "r"]);
        assert_eq!(texts(&seg.segment("cœur")), vec!["c", "œu", "r"]);
        assert_eq!(texts(&seg.segment("coeur")), vec!["c", "oeu", "r"]);
    }
}
