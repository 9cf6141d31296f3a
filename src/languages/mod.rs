use crate::rules::Rule;

/// A pronunciation language: the grapheme patterns to segment with and the
/// rules that read them.
pub trait LanguageRules: Send + Sync {
    /// Segmentation patterns in priority order.
    fn graphemes(&self) -> &[&'static str];

    fn rules(&self) -> &[Rule];
}

pub mod french;

pub use french::French;
