//! Character classes of the French script.

/// Vowel letters, plain and accented, lowercase.
pub const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'à', 'â', 'ä', 'æ', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'ö',
    'œ', 'ù', 'û', 'ü', 'ÿ',
    // borrowed spellings
    'á', 'ã', 'å', 'í', 'ì', 'ó', 'ò', 'õ', 'ø', 'ú', 'ý',
];

/// Vowels that soften a preceding `c` or `g`.
pub const FRONT_VOWELS: &[char] = &['e', 'i', 'y', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'í', 'ì', 'ý'];

/// Matches the first character the engine refuses to read: anything that is
/// not Latin script, whitespace, or one of the joiners `'` and `-` that hold
/// a single word together (`l'ami`, `grand-père`).
pub const UNSUPPORTED_PATTERN: &str = r"[^\p{Latin}\s'\-]";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&c)
}

pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// A grapheme counts as a vowel when it starts with a vowel letter.
pub fn starts_with_vowel(text: &str) -> bool {
    text.chars().next().is_some_and(is_vowel)
}

pub fn starts_with_consonant(text: &str) -> bool {
    text.chars().next().is_some_and(is_consonant)
}

pub fn starts_with_front_vowel(text: &str) -> bool {
    text.chars().next().is_some_and(is_front_vowel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_letter_classes() {
        assert!(is_vowel('é'));
        assert!(is_vowel('œ'));
        assert!(is_vowel('ø'));
        assert!(is_vowel('ý'));
        assert!(!is_vowel('ç'));
        assert!(is_consonant('ç'));
        assert!(is_consonant('ñ'));
        assert!(!is_consonant('\''));
        assert!(is_front_vowel('ï'));
        assert!(!is_front_vowel('a'));
    }

    #[test]
    fn test_grapheme_classes() {
        assert!(starts_with_vowel("eau"));
        assert!(starts_with_consonant("ch"));
        assert!(!starts_with_consonant("-"));
        assert!(starts_with_front_vowel("ei"));
        assert!(!starts_with_vowel(""));
    }

    #[test]
    fn test_unsupported_pattern() {
        let re = Regex::new(UNSUPPORTED_PATTERN).unwrap();
        assert!(re.find("grand-père l'ami").is_none());
        assert!(re.find("año").is_none());
        assert_eq!(re.find("chat1").map(|m| m.start()), Some(4));
        assert_eq!(re.find("привет").map(|m| m.start()), Some(0));
        assert!(re.find("chat!").is_some());
    }
}
