//! French reading rules.
//!
//! Sounds are written with CMU-style symbols: the French front rounded vowels
//! fall back to `EH0`/`UW0`, nasal vowels are a vowel followed by `NG`.

use super::LanguageRules;
use crate::phoneme::Symbol::*;
use crate::rules::Condition::*;
use crate::rules::{Condition, Rule};

pub struct French;

impl LanguageRules for French {
    fn graphemes(&self) -> &[&'static str] {
        GRAPHEMES
    }

    fn rules(&self) -> &[Rule] {
        RULES
    }
}

pub const GRAPHEMES: &[&str] = &[
    // four letters
    "aill", "eill",
    // three letters
    "eau", "oeu", "œu", "ail", "eil", "ill", "sch",
    // two letters
    "ai", "aî", "ei", "au", "eu", "ou", "où", "oû", "oi", "oy", "er", "ez",
    "ch", "ph", "th", "gn", "qu", "gu",
    "bb", "cc", "dd", "ff", "gg", "ll", "mm", "nn", "pp", "rr", "ss", "tt",
    // single letters
    "a", "à", "â", "ä", "æ", "e", "é", "è", "ê", "ë", "i", "î", "ï", "o", "ô", "ö", "œ",
    "u", "ù", "û", "ü", "y", "ÿ",
    "á", "ã", "å", "í", "ì", "ó", "ò", "õ", "ø", "ú", "ý",
    "b", "c", "ç", "d", "f", "g", "h", "j", "k", "l", "m", "n", "ñ", "p", "q", "r", "s", "t",
    "v", "w", "x", "z",
    "'", "-",
];

const SILENT: &[crate::phoneme::Symbol] = &[];

const NOT_SHORT: Condition = Not(&MaxLen(3));
const HYPHEN: &[&str] = &["-"];

pub const RULES: &[Rule] = &[
    // --- vowels ---
    Rule::default("a", &[Ae]),
    Rule::default("à", &[Ae]),
    Rule::default("â", &[Ae]),
    Rule::default("ä", &[Ae]),
    Rule::default("æ", &[Eh]),
    Rule::default("ai", &[Eh]),
    Rule::default("aî", &[Eh]),
    Rule::default("ail", &[Ae, Y]),
    Rule::default("aill", &[Ae, Y]),
    Rule::default("au", &[Ao]),
    Rule::default("eau", &[Ao]),
    // je, le, que
    Rule::contextual("e", All(&[Final, MaxLen(2)]), &[Eh]),
    Rule::contextual("e", All(&[Final, After(&["qu"]), MaxLen(3)]), &[Eh]),
    // plural -es
    Rule::contextual("e", All(&[Before(&["s"]), NextFinal, NOT_SHORT]), SILENT),
    Rule::contextual("e", All(&[Initial, Before(&["nn", "mm"])]), &[Ae]),
    Rule::contextual("e", All(&[Nasal, After(&["i"]), NextFinal]), &[Eh]),
    Rule::contextual("e", Nasal, &[Ae]),
    Rule::word_final("e", SILENT),
    Rule::default("e", &[Eh]),
    Rule::default("é", &[Eh]),
    Rule::default("è", &[Eh]),
    Rule::default("ê", &[Eh]),
    Rule::default("ë", &[Eh]),
    Rule::default("ei", &[Eh]),
    Rule::default("eil", &[Eh, Y]),
    Rule::default("eill", &[Eh, Y]),
    Rule::default("eu", &[Eh]),
    Rule::default("oeu", &[Eh]),
    Rule::default("œu", &[Eh]),
    Rule::default("œ", &[Eh]),
    Rule::contextual("er", All(&[Before(&["s"]), NextFinal]), &[Eh]),
    Rule::contextual("er", All(&[Final, NOT_SHORT]), &[Eh]),
    Rule::default("er", &[Eh, R]),
    Rule::word_final("ez", &[Eh]),
    Rule::default("ez", &[Eh, Z]),
    Rule::contextual("i", Nasal, &[Eh]),
    Rule::default("i", &[Ih]),
    Rule::default("î", &[Ih]),
    Rule::default("ï", &[Ih]),
    Rule::contextual("ill", AfterVowel, &[Y]),
    Rule::initial("ill", &[Ih, L]),
    Rule::default("ill", &[Ih, Y]),
    Rule::default("o", &[Ao]),
    Rule::default("ô", &[Ao]),
    Rule::default("ö", &[Ao]),
    Rule::contextual("oi", Nasal, &[W, Eh]),
    Rule::default("oi", &[W, Ae]),
    Rule::contextual("oy", BeforeVowel, &[W, Ae, Y]),
    Rule::default("oy", &[W, Ae]),
    Rule::contextual("ou", BeforeVowel, &[W]),
    Rule::default("ou", &[Uw]),
    Rule::default("où", &[Uw]),
    Rule::default("oû", &[Uw]),
    Rule::contextual("u", Nasal, &[Eh]),
    Rule::contextual("u", All(&[AfterConsonant, Before(&["i"])]), &[W]),
    Rule::default("u", &[Uw]),
    Rule::default("ù", &[Uw]),
    Rule::default("û", &[Uw]),
    Rule::default("ü", &[Uw]),
    Rule::contextual("y", All(&[AfterVowel, BeforeVowel]), &[Y]),
    Rule::initial("y", &[Y]),
    Rule::default("y", &[Ih]),
    Rule::default("ÿ", &[Ih]),
    // accents from borrowed words read as the plain vowel
    Rule::default("á", &[Ae]),
    Rule::default("ã", &[Ae]),
    Rule::default("å", &[Ae]),
    Rule::default("í", &[Ih]),
    Rule::default("ì", &[Ih]),
    Rule::default("ý", &[Ih]),
    Rule::default("ó", &[Ao]),
    Rule::default("ò", &[Ao]),
    Rule::default("õ", &[Ao]),
    Rule::default("ø", &[Ao]),
    Rule::default("ú", &[Uw]),
    // --- consonants ---
    Rule::contextual("b", Before(&["s", "t"]), &[P]),
    Rule::word_final("b", SILENT),
    Rule::default("b", &[B]),
    Rule::default("bb", &[B]),
    Rule::contextual("c", All(&[After(&["s"]), BeforeFront]), SILENT),
    Rule::contextual("c", BeforeFront, &[S]),
    Rule::contextual("c", All(&[Final, After(&["n"])]), SILENT),
    Rule::default("c", &[K]),
    Rule::contextual("cc", BeforeFront, &[K, S]),
    Rule::default("cc", &[K]),
    Rule::default("ç", &[S]),
    Rule::contextual("ch", Before(&["r", "l"]), &[K]),
    Rule::default("ch", &[Sh]),
    Rule::default("sch", &[Sh]),
    // liaison across a hyphen
    Rule::contextual("d", Before(HYPHEN), &[T]),
    Rule::contextual("d", All(&[Before(&["s"]), NextFinal]), SILENT),
    Rule::word_final("d", SILENT),
    Rule::default("d", &[D]),
    Rule::default("dd", &[D]),
    Rule::contextual("f", Before(HYPHEN), &[V]),
    Rule::default("f", &[F]),
    Rule::default("ff", &[F]),
    Rule::contextual("g", BeforeFront, &[Jh]),
    Rule::word_final("g", SILENT),
    Rule::default("g", &[G]),
    Rule::default("gg", &[G]),
    Rule::default("gn", &[N, Y]),
    Rule::contextual("gu", BeforeFront, &[G]),
    Rule::default("gu", &[G, Uw]),
    Rule::default("h", SILENT),
    Rule::default("j", &[Jh]),
    Rule::default("k", &[K]),
    Rule::default("l", &[L]),
    Rule::default("ll", &[L]),
    Rule::contextual("m", NasalCoda, &[Ng]),
    Rule::default("m", &[M]),
    Rule::default("mm", &[M]),
    Rule::contextual("n", NasalCoda, &[Ng]),
    Rule::default("n", &[N]),
    Rule::default("nn", &[N]),
    Rule::default("ñ", &[N]),
    Rule::contextual("p", All(&[After(&["m"]), Before(&["t"])]), SILENT),
    Rule::word_final("p", SILENT),
    Rule::default("p", &[P]),
    Rule::default("ph", &[F]),
    Rule::default("pp", &[P]),
    Rule::default("q", &[K]),
    Rule::default("qu", &[K]),
    Rule::default("r", &[R]),
    Rule::default("rr", &[R]),
    Rule::contextual("s", All(&[AfterVowel, BeforeVowel]), &[Z]),
    Rule::word_final("s", SILENT),
    Rule::default("s", &[S]),
    Rule::default("ss", &[S]),
    Rule::contextual("t", Before(HYPHEN), &[T]),
    Rule::contextual(
        "t",
        All(&[
            Not(&After(&["s"])),
            Any(&[FollowedBy("io"), FollowedBy("ience")]),
        ]),
        &[S],
    ),
    Rule::word_final("t", SILENT),
    Rule::default("t", &[T]),
    Rule::default("th", &[T]),
    Rule::default("tt", &[T]),
    Rule::default("v", &[V]),
    Rule::default("w", &[W]),
    Rule::contextual("x", All(&[Prefix("e"), BeforeVowel]), &[G, Z]),
    Rule::word_final("x", SILENT),
    Rule::default("x", &[K, S]),
    Rule::word_final("z", SILENT),
    Rule::default("z", &[Z]),
    // --- joiners ---
    Rule::default("'", SILENT),
    Rule::default("-", SILENT),
];
