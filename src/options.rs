use serde::{Deserialize, Serialize};

use crate::assembler::DEFAULT_SEPARATOR;
use crate::error::{BreakdownError, Result};

/// Engine settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakdownOptions {
    /// Placed between segments of a word in the flattened display form.
    pub separator: String,
    /// Silence a sound that repeats the sound right before it in a word.
    pub collapse_repeats: bool,
    /// Consult the lexicon before the rules.
    pub use_lexicon: bool,
}

impl Default for BreakdownOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            collapse_repeats: true,
            use_lexicon: true,
        }
    }
}

impl BreakdownOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(BreakdownError::Options)
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_collapse_repeats(mut self, collapse: bool) -> Self {
        self.collapse_repeats = collapse;
        self
    }

    pub fn with_lexicon(mut self, use_lexicon: bool) -> Self {
        self.use_lexicon = use_lexicon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BreakdownOptions::default();
        assert_eq!(options.separator, "·");
        assert!(options.collapse_repeats);
        assert!(options.use_lexicon);
        assert_eq!(BreakdownOptions::from_json("{}").unwrap(), options);
    }

    #[test]
    fn test_partial_json() {
        let options = BreakdownOptions::from_json(r#"{"separator": "-", "use_lexicon": false}"#)
            .unwrap();
        assert_eq!(options.separator, "-");
        assert!(options.collapse_repeats);
        assert!(!options.use_lexicon);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BreakdownOptions::from_json(r#"{"collapse_repeats": "yes"}"#),
            Err(BreakdownError::Options(_))
        ));
    }
}
