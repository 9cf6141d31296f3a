//! Grapheme-to-phoneme rule evaluation.
//!
//! A rule reads one grapheme in its context and yields zero or more symbols
//! (zero means the grapheme is silent). Rules live in three tiers that are
//! always tried in the same order:
//!
//! 1. [`Tier::Contextual`] - depends on neighbouring graphemes or text
//! 2. [`Tier::Positional`] - word-initial or word-final variants
//! 3. [`Tier::Default`] - the grapheme on its own
//!
//! Within a tier, rules are tried in declaration order. The first match wins.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::alphabet::{
    is_consonant, starts_with_consonant, starts_with_front_vowel, starts_with_vowel,
};
use crate::error::{BreakdownError, Result};
use crate::phoneme::Symbol;
use crate::token::GraphemeUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Contextual,
    Positional,
    Default,
}

/// When a rule applies.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    Always,
    /// First grapheme of the word.
    Initial,
    /// Last grapheme of the word.
    Final,
    /// Next grapheme is one of these.
    Before(&'static [&'static str]),
    /// Previous grapheme is one of these.
    After(&'static [&'static str]),
    /// Next grapheme ends the word.
    NextFinal,
    BeforeVowel,
    AfterVowel,
    BeforeConsonant,
    AfterConsonant,
    /// Next grapheme starts with `e`, `i`, `y` or an accented form.
    BeforeFront,
    /// Next grapheme is a lone `n`/`m` that ends the word or precedes a
    /// consonant, so the vowel is nasal.
    Nasal,
    /// This `n`/`m` follows a vowel and ends the word or precedes a consonant.
    NasalCoda,
    /// Word text after this grapheme starts with the given text.
    FollowedBy(&'static str),
    /// Word text before this grapheme is exactly the given text.
    Prefix(&'static str),
    /// Word is at most this many characters long.
    MaxLen(usize),
    Not(&'static Condition),
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

/// Everything a rule may look at when reading one grapheme.
#[derive(Debug, Clone, Copy)]
pub struct UnitContext<'a> {
    pub word: &'a str,
    pub unit: &'a GraphemeUnit,
    pub prev: Option<&'a GraphemeUnit>,
    pub next: Option<&'a GraphemeUnit>,
    pub next_is_final: bool,
}

impl<'a> UnitContext<'a> {
    /// Builds the context of `units[index]` within `word`.
    pub fn of(word: &'a str, units: &'a [GraphemeUnit], index: usize) -> Self {
        Self {
            word,
            unit: &units[index],
            prev: index.checked_sub(1).map(|i| &units[i]),
            next: units.get(index + 1),
            next_is_final: index + 2 == units.len(),
        }
    }

    pub fn is_initial(&self) -> bool {
        self.prev.is_none()
    }

    pub fn is_final(&self) -> bool {
        self.next.is_none()
    }

    pub fn preceding(&self) -> &'a str {
        self.word.get(..self.unit.start).unwrap_or_default()
    }

    pub fn following(&self) -> &'a str {
        self.word.get(self.unit.end..).unwrap_or_default()
    }

    fn prev_text(&self) -> &'a str {
        self.prev.map(|u| u.text.as_str()).unwrap_or_default()
    }

    fn next_text(&self) -> &'a str {
        self.next.map(|u| u.text.as_str()).unwrap_or_default()
    }
}

impl Condition {
    pub fn holds(&self, ctx: &UnitContext<'_>) -> bool {
        match self {
            Condition::Always => true,
            Condition::Initial => ctx.is_initial(),
            Condition::Final => ctx.is_final(),
            Condition::Before(set) => {
                ctx.next.is_some() && set.iter().any(|g| *g == ctx.next_text())
            }
            Condition::After(set) => {
                ctx.prev.is_some() && set.iter().any(|g| *g == ctx.prev_text())
            }
            Condition::NextFinal => ctx.next.is_some() && ctx.next_is_final,
            Condition::BeforeVowel => starts_with_vowel(ctx.next_text()),
            Condition::AfterVowel => starts_with_vowel(ctx.prev_text()),
            Condition::BeforeConsonant => starts_with_consonant(ctx.next_text()),
            Condition::AfterConsonant => starts_with_consonant(ctx.prev_text()),
            Condition::BeforeFront => starts_with_front_vowel(ctx.next_text()),
            Condition::Nasal => {
                let next = ctx.next_text();
                if next != "n" && next != "m" {
                    return false;
                }
                match ctx.following().get(next.len()..).and_then(|s| s.chars().next()) {
                    None => true,
                    Some(c) => is_consonant(c),
                }
            }
            Condition::NasalCoda => {
                starts_with_vowel(ctx.prev_text())
                    && (ctx.is_final() || starts_with_consonant(ctx.next_text()))
            }
            Condition::FollowedBy(text) => ctx.following().starts_with(*text),
            Condition::Prefix(text) => ctx.preceding() == *text,
            Condition::MaxLen(n) => ctx.word.chars().count() <= *n,
            Condition::Not(inner) => !inner.holds(ctx),
            Condition::All(all) => all.iter().all(|c| c.holds(ctx)),
            Condition::Any(any) => any.iter().any(|c| c.holds(ctx)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub grapheme: &'static str,
    pub tier: Tier,
    pub when: Condition,
    pub sounds: &'static [Symbol],
}

impl Rule {
    pub const fn contextual(
        grapheme: &'static str,
        when: Condition,
        sounds: &'static [Symbol],
    ) -> Self {
        Self {
            grapheme,
            tier: Tier::Contextual,
            when,
            sounds,
        }
    }

    pub const fn initial(grapheme: &'static str, sounds: &'static [Symbol]) -> Self {
        Self {
            grapheme,
            tier: Tier::Positional,
            when: Condition::Initial,
            sounds,
        }
    }

    pub const fn word_final(grapheme: &'static str, sounds: &'static [Symbol]) -> Self {
        Self {
            grapheme,
            tier: Tier::Positional,
            when: Condition::Final,
            sounds,
        }
    }

    pub const fn default(grapheme: &'static str, sounds: &'static [Symbol]) -> Self {
        Self {
            grapheme,
            tier: Tier::Default,
            when: Condition::Always,
            sounds,
        }
    }
}

/// Rules indexed by grapheme, each list sorted into evaluation order.
pub struct RuleTable {
    rules: HashMap<&'static str, Vec<Rule>>,
}

impl RuleTable {
    pub fn new(rules: &[Rule]) -> Self {
        let mut table: HashMap<&'static str, Vec<Rule>> = HashMap::new();
        for rule in rules {
            table.entry(rule.grapheme).or_default().push(*rule);
        }
        // stable: declaration order survives within a tier
        for list in table.values_mut() {
            list.sort_by_key(|rule| rule.tier);
        }
        Self { rules: table }
    }

    pub fn covers(&self, grapheme: &str) -> bool {
        self.rules.contains_key(grapheme)
    }

    /// First matching rule for the grapheme in `ctx`, if any.
    pub fn find(&self, ctx: &UnitContext<'_>) -> Option<&Rule> {
        self.rules
            .get(ctx.unit.text.as_str())?
            .iter()
            .find(|rule| rule.when.holds(ctx))
    }

    /// Reads one grapheme. A grapheme no rule covers is a gap in the table
    /// and is reported, never guessed.
    pub fn map_unit(&self, ctx: &UnitContext<'_>) -> Result<&'static [Symbol]> {
        match self.find(ctx) {
            Some(rule) => {
                trace!(
                    unit = %ctx.unit.text,
                    tier = ?rule.tier,
                    sounds = ?rule.sounds,
                    "mapped grapheme"
                );
                Ok(rule.sounds)
            }
            None => {
                warn!(word = %ctx.word, unit = %ctx.unit.text, offset = ctx.unit.start, "unmappable grapheme");
                Err(BreakdownError::UnmappableGrapheme {
                    word: ctx.word.to_string(),
                    unit: ctx.unit.text.clone(),
                    offset: ctx.unit.start,
                })
            }
        }
    }
}
