use thiserror::Error;

pub type Result<T> = std::result::Result<T, BreakdownError>;

#[derive(Debug, Error)]
pub enum BreakdownError {
    /// No rule in the active table covers this grapheme. The table needs
    /// extending; the engine never guesses a sound.
    #[error("no phoneme rule for grapheme '{unit}' at offset {offset} in '{word}'")]
    UnmappableGrapheme {
        word: String,
        unit: String,
        offset: usize,
    },

    #[error("unsupported character {character:?} at offset {offset} in '{text}'")]
    InvalidEncoding {
        text: String,
        character: char,
        offset: usize,
    },

    #[error("failed to parse lexicon: {0}")]
    Lexicon(#[source] serde_json::Error),

    #[error("invalid lexicon entry '{word}': {reason}")]
    InvalidLexiconEntry { word: String, reason: String },

    #[error("failed to parse breakdown options: {0}")]
    Options(#[source] serde_json::Error),

    #[error("invalid script pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl BreakdownError {
    /// Byte offset into the normalized text, for errors tied to a position.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BreakdownError::UnmappableGrapheme { offset, .. }
            | BreakdownError::InvalidEncoding { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Moves a word-relative offset into the text the word came from.
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            BreakdownError::UnmappableGrapheme { word, unit, offset } => {
                BreakdownError::UnmappableGrapheme {
                    word,
                    unit,
                    offset: offset + by,
                }
            }
            other => other,
        }
    }
}
