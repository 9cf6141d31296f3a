use serde::{Deserialize, Serialize};

/// A piece of user input, kept in both raw and normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub raw: String,
    pub normalized: String,
}

impl Word {
    /// Trims, collapses inner whitespace to single spaces, lower-cases and
    /// folds the typographic apostrophe. Diacritics are kept.
    pub fn new(raw: &str) -> Self {
        let normalized = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
            .replace('’', "'");
        Self {
            raw: raw.to_string(),
            normalized,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Space separated words of the normalized text with their byte offsets.
    pub fn parts(&self) -> Vec<(usize, &str)> {
        let mut offset = 0;
        let mut parts = Vec::new();
        for part in self.normalized.split(' ') {
            if !part.is_empty() {
                parts.push((offset, part));
            }
            offset += part.len() + 1;
        }
        parts
    }
}

/// Byte range into a normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn shifted(&self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }

    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or_default()
    }
}

/// A run of letters read as one orthographic symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphemeUnit {
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// Index of the pattern table entry that matched, `None` when the
    /// segmenter fell back to a single character.
    pub pattern: Option<usize>,
}

impl GraphemeUnit {
    pub fn new(text: &str, start: usize, pattern: Option<usize>) -> Self {
        Self {
            text: text.to_string(),
            start,
            end: start + text.len(),
            pattern,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}
