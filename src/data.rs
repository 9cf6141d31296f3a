use std::collections::HashMap;

use crate::error::{BreakdownError, Result};

/// Whole-word pronunciations shipped with the crate.
pub const LEXICON_JSON: &str = include_str!("../data/lexicon.json");

/// One authored segment: display text and its space separated symbols.
pub type RawSegment = (String, String);

pub fn parse_lexicon(json: &str) -> Result<HashMap<String, Vec<RawSegment>>> {
    serde_json::from_str(json).map_err(BreakdownError::Lexicon)
}

pub fn load_lexicon() -> Result<HashMap<String, Vec<RawSegment>>> {
    parse_lexicon(LEXICON_JSON)
}
