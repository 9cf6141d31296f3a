//! The breakdown facade: normalize, validate, then read every word through
//! the lexicon or the rules and assemble the segments.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::alphabet::UNSUPPORTED_PATTERN;
use crate::assembler::{BreakdownResult, Segment, assemble};
use crate::error::{BreakdownError, Result};
use crate::languages::{French, LanguageRules};
use crate::lexicon::Lexicon;
use crate::options::BreakdownOptions;
use crate::phoneme::{Phoneme, Symbol, Viseme};
use crate::rules::{RuleTable, UnitContext};
use crate::segmenter::Segmenter;
use crate::token::{GraphemeUnit, Word};

pub struct BreakdownEngine {
    lexicon: Lexicon,
    rules: RuleTable,
    segmenter: Segmenter,
    options: BreakdownOptions,
    unsupported: Regex,
}

impl BreakdownEngine {
    /// French rules, the built-in lexicon and default options.
    pub fn new() -> Result<Self> {
        Self::with_options(BreakdownOptions::default())
    }

    pub fn with_options(options: BreakdownOptions) -> Result<Self> {
        Self::with_language(&French, Lexicon::builtin()?, options)
    }

    pub fn with_language(
        language: &dyn LanguageRules,
        lexicon: Lexicon,
        options: BreakdownOptions,
    ) -> Result<Self> {
        let unsupported = Regex::new(UNSUPPORTED_PATTERN)?;
        debug!(
            graphemes = language.graphemes().len(),
            rules = language.rules().len(),
            lexicon = lexicon.len(),
            "built breakdown engine"
        );
        Ok(Self {
            lexicon,
            rules: RuleTable::new(language.rules()),
            segmenter: Segmenter::new(language.graphemes()),
            options,
            unsupported,
        })
    }

    pub fn options(&self) -> &BreakdownOptions {
        &self.options
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn normalize(&self, raw: &str) -> Word {
        Word::new(raw)
    }

    /// Grapheme units of one already normalized word.
    pub fn segment(&self, word: &str) -> Vec<GraphemeUnit> {
        self.segmenter.segment(word)
    }

    pub fn breakdown(&self, raw: &str) -> Result<BreakdownResult> {
        let word = self.normalize(raw);
        if word.is_empty() {
            return Ok(BreakdownResult::empty());
        }
        self.validate(&word.normalized)?;

        let mut segments = Vec::new();
        for (offset, part) in word.parts() {
            if !segments.is_empty() {
                segments.push(Segment::pause());
            }
            segments.extend(self.breakdown_part(&word.normalized, offset, part)?);
        }

        debug!(text = %word.normalized, segments = segments.len(), "breakdown");
        Ok(BreakdownResult::new(word.normalized, segments))
    }

    /// The flattened display form, segments joined by the configured
    /// separator.
    pub fn breakdown_word(&self, raw: &str) -> Result<String> {
        Ok(self.breakdown(raw)?.render(&self.options.separator))
    }

    /// Sounding symbols with a rest between words.
    pub fn phonemes(&self, raw: &str) -> Result<Vec<Symbol>> {
        Ok(self.breakdown(raw)?.symbols())
    }

    pub fn visemes(&self, raw: &str) -> Result<Vec<Viseme>> {
        Ok(self.breakdown(raw)?.visemes())
    }

    fn validate(&self, text: &str) -> Result<()> {
        match self.unsupported.find(text) {
            Some(m) => Err(BreakdownError::InvalidEncoding {
                text: text.to_string(),
                character: m.as_str().chars().next().unwrap_or_default(),
                offset: m.start(),
            }),
            None => Ok(()),
        }
    }

    fn breakdown_part(&self, text: &str, offset: usize, part: &str) -> Result<Vec<Segment>> {
        if self.options.use_lexicon {
            if let Some(entry) = self.lexicon.lookup(part) {
                debug!(word = part, "lexicon hit");
                return Ok(entry.segments);
            }
        }

        let mut phonemes = self.read(part).map_err(|err| err.shifted(offset))?;
        for phoneme in &mut phonemes {
            phoneme.origin = phoneme.origin.map(|span| span.shifted(offset));
        }
        if self.options.collapse_repeats {
            collapse_repeats(&mut phonemes);
        }
        Ok(assemble(text, &phonemes))
    }

    /// Reads one word through the rules. Origins are relative to `word`.
    fn read(&self, word: &str) -> Result<Vec<Phoneme>> {
        let units = self.segmenter.segment(word);
        let mut phonemes = Vec::with_capacity(units.len());
        for (index, unit) in units.iter().enumerate() {
            let sounds = self.rules.map_unit(&UnitContext::of(word, &units, index))?;
            let span = unit.span();
            if sounds.is_empty() {
                phonemes.push(Phoneme::silent(Some(span)));
            } else {
                phonemes.extend(sounds.iter().map(|&s| Phoneme::sounded(s, Some(span))));
            }
        }
        Ok(phonemes)
    }
}

/// Silences a sound identical to the sound right before it. Silent
/// phonemes in between are skipped over.
pub fn collapse_repeats(phonemes: &mut [Phoneme]) {
    let mut last: Option<Symbol> = None;
    for phoneme in phonemes.iter_mut() {
        let Some(symbol) = phoneme.symbol else {
            continue;
        };
        if last == Some(symbol) {
            phoneme.symbol = None;
        } else {
            last = Some(symbol);
        }
    }
}

static SHARED: OnceLock<BreakdownEngine> = OnceLock::new();

/// The process-wide engine with default settings, built on first use.
pub fn shared() -> Result<&'static BreakdownEngine> {
    if let Some(engine) = SHARED.get() {
        return Ok(engine);
    }
    let engine = BreakdownEngine::new()?;
    Ok(SHARED.get_or_init(|| engine))
}

pub fn breakdown(raw: &str) -> Result<BreakdownResult> {
    shared()?.breakdown(raw)
}

pub fn breakdown_word(raw: &str) -> Result<String> {
    shared()?.breakdown_word(raw)
}
