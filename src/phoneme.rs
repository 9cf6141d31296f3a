use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::Span;

/// The phoneme inventory, written with CMU-style symbols.
///
/// French vowels are approximated by the closest unstressed CMU vowel; `Rest`
/// is the pause between words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Ae,
    Ao,
    Eh,
    Ih,
    Uw,
    B,
    D,
    F,
    G,
    Jh,
    K,
    L,
    M,
    N,
    Ng,
    P,
    R,
    S,
    Sh,
    T,
    V,
    W,
    Y,
    Z,
    Rest,
}

impl Symbol {
    pub const ALL: [Symbol; 25] = [
        Symbol::Ae,
        Symbol::Ao,
        Symbol::Eh,
        Symbol::Ih,
        Symbol::Uw,
        Symbol::B,
        Symbol::D,
        Symbol::F,
        Symbol::G,
        Symbol::Jh,
        Symbol::K,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::Ng,
        Symbol::P,
        Symbol::R,
        Symbol::S,
        Symbol::Sh,
        Symbol::T,
        Symbol::V,
        Symbol::W,
        Symbol::Y,
        Symbol::Z,
        Symbol::Rest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Ae => "AE0",
            Symbol::Ao => "AO0",
            Symbol::Eh => "EH0",
            Symbol::Ih => "IH0",
            Symbol::Uw => "UW0",
            Symbol::B => "B",
            Symbol::D => "D",
            Symbol::F => "F",
            Symbol::G => "G",
            Symbol::Jh => "JH",
            Symbol::K => "K",
            Symbol::L => "L",
            Symbol::M => "M",
            Symbol::N => "N",
            Symbol::Ng => "NG",
            Symbol::P => "P",
            Symbol::R => "R",
            Symbol::S => "S",
            Symbol::Sh => "SH",
            Symbol::T => "T",
            Symbol::V => "V",
            Symbol::W => "W",
            Symbol::Y => "Y",
            Symbol::Z => "Z",
            Symbol::Rest => "_",
        }
    }

    pub fn is_vowel(&self) -> bool {
        matches!(
            self,
            Symbol::Ae | Symbol::Ao | Symbol::Eh | Symbol::Ih | Symbol::Uw
        )
    }

    /// Mouth shape used when lip-syncing this sound.
    pub fn viseme(&self) -> Viseme {
        match self {
            Symbol::Ae | Symbol::Ih => Viseme::Ai,
            Symbol::Ao => Viseme::O,
            Symbol::Eh => Viseme::E,
            Symbol::Uw => Viseme::U,
            Symbol::B | Symbol::M | Symbol::P => Viseme::Mbp,
            Symbol::F | Symbol::V => Viseme::Fv,
            Symbol::L => Viseme::L,
            Symbol::W => Viseme::Wq,
            Symbol::Rest => Viseme::Rest,
            Symbol::D
            | Symbol::G
            | Symbol::Jh
            | Symbol::K
            | Symbol::N
            | Symbol::Ng
            | Symbol::R
            | Symbol::S
            | Symbol::Sh
            | Symbol::T
            | Symbol::Y
            | Symbol::Z => Viseme::Etc,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phoneme symbol '{0}'")]
pub struct UnknownSymbol(pub String);

impl FromStr for Symbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .iter()
            .copied()
            .find(|sym| sym.as_str() == s)
            .ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

/// Preston Blair mouth shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viseme {
    Ai,
    E,
    O,
    U,
    Wq,
    L,
    Mbp,
    Fv,
    Etc,
    Rest,
}

impl Viseme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Viseme::Ai => "AI",
            Viseme::E => "E",
            Viseme::O => "O",
            Viseme::U => "U",
            Viseme::Wq => "WQ",
            Viseme::L => "L",
            Viseme::Mbp => "MBP",
            Viseme::Fv => "FV",
            Viseme::Etc => "etc",
            Viseme::Rest => "rest",
        }
    }
}

impl fmt::Display for Viseme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sound of a breakdown, or the silence left by a mute grapheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    /// `None` marks a silent grapheme.
    pub symbol: Option<Symbol>,
    /// The grapheme this phoneme was read from, when it came from the rules.
    pub origin: Option<Span>,
}

impl Phoneme {
    pub fn sounded(symbol: Symbol, origin: Option<Span>) -> Self {
        Self {
            symbol: Some(symbol),
            origin,
        }
    }

    pub fn silent(origin: Option<Span>) -> Self {
        Self {
            symbol: None,
            origin,
        }
    }

    pub fn rest() -> Self {
        Self::sounded(Symbol::Rest, None)
    }

    pub fn is_silent(&self) -> bool {
        self.symbol.is_none()
    }

    pub fn is_vowel(&self) -> bool {
        self.symbol.is_some_and(|s| s.is_vowel())
    }

    pub fn is_rest(&self) -> bool {
        self.symbol == Some(Symbol::Rest)
    }
}
