use std::collections::HashMap;

use tracing::{debug, trace};

use crate::assembler::{BreakdownResult, Segment};
use crate::data::{self, RawSegment};
use crate::error::{BreakdownError, Result};
use crate::phoneme::{Phoneme, Symbol};
use crate::token::Word;

/// Whole-word pronunciations that override the rules.
///
/// Keys are normalized the same way user input is, so lookups are exact
/// matches on the normalized word. There is no partial or fuzzy matching.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Segment>>,
}

impl Lexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The lexicon compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(data::load_lexicon()?)
    }

    /// Parses `{"word": [["display", "SYM SYM"], ...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_entries(data::parse_lexicon(json)?)
    }

    pub fn from_entries(raw: HashMap<String, Vec<RawSegment>>) -> Result<Self> {
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, segments) in raw {
            let word = Word::new(&key).normalized;
            if entries.contains_key(&word) {
                return Err(BreakdownError::InvalidLexiconEntry {
                    word,
                    reason: "duplicate key".to_string(),
                });
            }
            let segments = Self::build_entry(&word, segments)?;
            entries.insert(word, segments);
        }
        debug!(entries = entries.len(), "loaded lexicon");
        Ok(Self { entries })
    }

    fn build_entry(word: &str, raw: Vec<RawSegment>) -> Result<Vec<Segment>> {
        let invalid = |reason: String| BreakdownError::InvalidLexiconEntry {
            word: word.to_string(),
            reason,
        };

        if word.is_empty() || word.contains(' ') {
            return Err(invalid("key must be a single word".to_string()));
        }
        if raw.is_empty() {
            return Err(invalid("no segments".to_string()));
        }

        let mut segments = Vec::with_capacity(raw.len());
        for (display, symbols) in raw {
            if display.is_empty() {
                return Err(invalid("empty display text".to_string()));
            }
            let mut phonemes = Vec::new();
            for token in symbols.split_whitespace() {
                let symbol: Symbol = token.parse().map_err(|e| invalid(format!("{e}")))?;
                if symbol == Symbol::Rest {
                    return Err(invalid("rest symbol inside a word".to_string()));
                }
                phonemes.push(Phoneme::sounded(symbol, None));
            }
            if phonemes.is_empty() {
                return Err(invalid(format!("segment '{display}' has no symbols")));
            }
            segments.push(Segment::new(phonemes, display));
        }
        Ok(segments)
    }

    /// The authored breakdown of an already normalized word.
    pub fn lookup(&self, word: &str) -> Option<BreakdownResult> {
        let segments = self.entries.get(word);
        trace!(word, hit = segments.is_some(), "lexicon lookup");
        segments.map(|segments| BreakdownResult::new(word, segments.clone()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::Symbol::*;

    #[test]
    fn test_builtin_lookup() {
        let lexicon = Lexicon::builtin().unwrap();
        let result = lexicon.lookup("monsieur").unwrap();
        assert_eq!(result.text, "monsieur");
        assert_eq!(result.render("·"), "me·sieu");
        assert_eq!(result.symbols(), vec![M, Eh, S, Y, Eh]);
        assert!(result.segments[0].phonemes.iter().all(|p| p.origin.is_none()));
        assert!(lexicon.lookup("chat").is_none());
        assert!(lexicon.lookup("Monsieur").is_none());
    }

    #[test]
    fn test_keys_are_normalized() {
        let lexicon = Lexicon::from_json(r#"{" Août ": [["août", "UW0 T"]]}"#).unwrap();
        assert!(lexicon.contains("août"));
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_rejects_bad_entries() {
        let cases = [
            r#"{"chat": []}"#,
            r#"{"chat": [["cha", ""]]}"#,
            r#"{"chat": [["", "SH AE0"]]}"#,
            r#"{"chat": [["cha", "SH AA1"]]}"#,
            r#"{"chat": [["cha", "SH _ AE0"]]}"#,
            r#"{"le chat": [["le", "L EH0"]]}"#,
            r#"{"Chat": [["cha", "SH AE0"]], "chat": [["chat", "SH AE0 T"]]}"#,
        ];
        for json in cases {
            match Lexicon::from_json(json) {
                Err(BreakdownError::InvalidLexiconEntry { .. }) => {}
                other => panic!("expected invalid entry for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_keys_colliding_after_normalization() {
        let json = r#"{"Chat": [["cha", "SH AE0"]], " chat": [["chat", "SH AE0 T"]]}"#;
        match Lexicon::from_json(json) {
            Err(BreakdownError::InvalidLexiconEntry { word, reason }) => {
                assert_eq!(word, "chat");
                assert_eq!(reason, "duplicate key");
            }
            other => panic!("expected duplicate key, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.is_empty());
        assert!(lexicon.lookup("femme").is_none());
    }
}
