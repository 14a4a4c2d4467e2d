//! Coptic letter and diacritic classification.
//!
//! Nomenclature used across the engine:
//! - *letter*: one of the 32 Coptic alphabetical letters (lowercase forms).
//! - *diacritic*: one of the two standard combining marks (overline, jinkim).
//! - *glyph*: a letter or a diacritic.
//! - *auxiliary letter*: a letter whose sound is written out as a substitute
//!   letter sequence (e.g. `ⲝ` as `ⲕⲥ`).

use super::model::CopticError;

pub const ALPHA: char = 'ⲁ';
pub const BITA: char = 'ⲃ';
pub const GAMMA: char = 'ⲅ';
pub const DELTA: char = 'ⲇ';
pub const EI: char = 'ⲉ';
pub const SOOU: char = 'ⲋ';
pub const ZITA: char = 'ⲍ';
pub const EITA: char = 'ⲏ';
pub const THITA: char = 'ⲑ';
pub const IOTA: char = 'ⲓ';
pub const KABBA: char = 'ⲕ';
pub const LAULA: char = 'ⲗ';
pub const MI: char = 'ⲙ';
pub const NI: char = 'ⲛ';
pub const XI: char = 'ⲝ';
pub const OMICRON: char = 'ⲟ';
pub const PI: char = 'ⲡ';
pub const RO: char = 'ⲣ';
pub const SIMA: char = 'ⲥ';
pub const TAU: char = 'ⲧ';
pub const UA: char = 'ⲩ';
pub const PHI: char = 'ⲫ';
pub const KHI: char = 'ⲭ';
pub const PSI: char = 'ⲯ';
pub const OMEGA: char = 'ⲱ';
pub const SHAI: char = 'ϣ';
pub const FAI: char = 'ϥ';
pub const KHAI: char = 'ϧ';
pub const HORI: char = 'ϩ';
pub const JANJA: char = 'ϫ';
pub const CHIMA: char = 'ϭ';
pub const TI: char = 'ϯ';

/// All 32 letters, in alphabetical order.
pub const LETTERS: [char; 32] = [
    ALPHA, BITA, GAMMA, DELTA, EI, SOOU, ZITA, EITA, THITA, IOTA, KABBA, LAULA, MI, NI, XI,
    OMICRON, PI, RO, SIMA, TAU, UA, PHI, KHI, PSI, OMEGA, SHAI, FAI, KHAI, HORI, JANJA, CHIMA, TI,
];

pub const VOWELS: [char; 7] = [ALPHA, EI, IOTA, EITA, UA, OMICRON, OMEGA];

pub const DRAGGING_VOWELS: [char; 4] = [EI, IOTA, EITA, UA];

/// Vowels that may precede `ⲩ` in native Coptic words.
pub const UA_COMPATIBLE_VOWELS: [char; 3] = [ALPHA, EI, OMICRON];

// Overlines.
pub const COMBINING_OVERLINE: char = '\u{0305}';
pub const COMBINING_MACRON: char = '\u{0304}';
pub const COMBINING_CONJOINING_MACRON: char = '\u{FE26}';
pub const STANDARD_OVERLINE: char = COMBINING_OVERLINE;
pub const NONSTANDARD_OVERLINES: [char; 2] = [COMBINING_MACRON, COMBINING_CONJOINING_MACRON];

// Jinkims.
pub const COMBINING_GRAVE_ACCENT: char = '\u{0300}';
pub const GRAVE_ACCENT: char = '`';
pub const COPTIC_MORPHOLOGICAL_DIVIDER: char = '\u{2CFF}';
pub const COMBINING_COMMA_ABOVE_RIGHT: char = '\u{0315}';
pub const COMBINING_DOT_ABOVE: char = '\u{0307}';
pub const COMBINING_DOT_ABOVE_LEFT: char = '\u{1DF8}';
pub const COMBINING_DOT_ABOVE_RIGHT: char = '\u{0358}';
pub const STANDARD_JINKIM: char = COMBINING_GRAVE_ACCENT;
pub const NONSTANDARD_JINKIMS: [char; 4] = [
    COMBINING_COMMA_ABOVE_RIGHT,
    COMBINING_DOT_ABOVE,
    COMBINING_DOT_ABOVE_LEFT,
    COMBINING_DOT_ABOVE_RIGHT,
];
/// Jinkims written as a standalone character before the letter they mark.
pub const SPACING_JINKIMS: [char; 2] = [GRAVE_ACCENT, COPTIC_MORPHOLOGICAL_DIVIDER];

pub const DIACRITICS: [char; 2] = [STANDARD_JINKIM, STANDARD_OVERLINE];

pub fn is_letter(c: char) -> bool {
    LETTERS.contains(&c)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// True for letters that are not vowels. Non-letters are never consonants.
pub fn is_consonant(c: char) -> bool {
    is_letter(c) && !is_vowel(c)
}

pub fn is_dragging_vowel(c: char) -> bool {
    DRAGGING_VOWELS.contains(&c)
}

pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

pub fn is_ua_compatible_vowel(c: char) -> bool {
    UA_COMPATIBLE_VOWELS.contains(&c)
}

pub fn is_spacing_jinkim(c: char) -> bool {
    SPACING_JINKIMS.contains(&c)
}

pub fn is_glyph(c: char) -> bool {
    is_letter(c) || is_diacritic(c)
}

/// Remove every character that is not a letter. Returns the same buffer.
pub fn delete_non_coptic_letters(buf: &mut Vec<char>) -> &mut Vec<char> {
    buf.retain(|&c| is_letter(c));
    buf
}

/// Remove every character that is not a glyph. Returns the same buffer.
pub fn delete_non_coptic_glyphs(buf: &mut Vec<char>) -> &mut Vec<char> {
    buf.retain(|&c| is_glyph(c));
    buf
}

/// Maximal runs of glyphs in `line`, left to right.
///
/// Runs of non-glyph characters separate spans and never yield empty items.
/// The iterator is lazy and `Clone`, so it can be restarted cheaply.
pub fn split_at_non_coptic_glyphs(line: &str) -> impl Iterator<Item = &str> + Clone + '_ {
    line.split(|c: char| !is_glyph(c))
        .filter(|span| !span.is_empty())
}

pub fn is_all_coptic_letters(word: &str) -> bool {
    word.chars().all(is_letter)
}

pub fn is_all_coptic_letters_or_space(word: &str) -> bool {
    word.chars().all(|c| is_letter(c) || c == ' ')
}

pub fn assert_all_coptic_letters(word: &str) -> Result<(), CopticError> {
    if is_all_coptic_letters(word) {
        Ok(())
    } else {
        Err(CopticError::InvalidInput(format!(
            "expected only Coptic letters: {word:?}"
        )))
    }
}

pub fn assert_all_coptic_letters_or_space(word: &str) -> Result<(), CopticError> {
    if is_all_coptic_letters_or_space(word) {
        Ok(())
    } else {
        Err(CopticError::InvalidInput(format!(
            "expected only Coptic letters or spaces: {word:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_diacritics_are_disjoint() {
        for c in LETTERS {
            assert!(!is_diacritic(c), "{c} classified as both");
        }
        for c in NONSTANDARD_OVERLINES.iter().chain(&NONSTANDARD_JINKIMS) {
            assert!(!is_glyph(*c), "nonstandard mark {c:?} must not be a glyph");
        }
    }

    #[test]
    fn vowel_subsets_are_vowels() {
        assert!(DRAGGING_VOWELS.iter().all(|&c| is_vowel(c)));
        assert!(UA_COMPATIBLE_VOWELS.iter().all(|&c| is_vowel(c)));
        assert_eq!(LETTERS.iter().filter(|&&c| is_consonant(c)).count(), 25);
        assert!(!is_consonant('b'));
    }

    #[test]
    fn split_skips_non_glyph_runs() {
        let spans: Vec<&str> = split_at_non_coptic_glyphs("  ⲁⲛⲟⲕ, ⲡⲉ!! ϩⲁⲙ\u{300} ").collect();
        assert_eq!(spans, vec!["ⲁⲛⲟⲕ", "ⲡⲉ", "ϩⲁⲙ\u{300}"]);
    }

    #[test]
    fn split_of_text_without_glyphs_is_empty() {
        assert_eq!(split_at_non_coptic_glyphs("hello, world! 123").count(), 0);
        assert_eq!(split_at_non_coptic_glyphs("").count(), 0);
    }

    #[test]
    fn split_of_all_glyph_text_is_the_input() {
        let line = "ⲫ\u{300}ⲛⲟⲩϯ\u{305}";
        let spans: Vec<&str> = split_at_non_coptic_glyphs(line).collect();
        assert_eq!(spans, vec![line]);
    }

    #[test]
    fn split_is_restartable() {
        let spans = split_at_non_coptic_glyphs("ⲁ.ⲃ");
        assert_eq!(spans.clone().count(), 2);
        assert_eq!(spans.collect::<Vec<_>>(), vec!["ⲁ", "ⲃ"]);
    }

    #[test]
    fn delete_filters_in_place() {
        let mut buf: Vec<char> = "ⲁ\u{300}x ⲃ\u{305}".chars().collect();
        delete_non_coptic_glyphs(&mut buf);
        assert_eq!(buf.iter().collect::<String>(), "ⲁ\u{300}ⲃ\u{305}");
        let letters: String = delete_non_coptic_letters(&mut buf).iter().collect();
        assert_eq!(letters, "ⲁⲃ");
    }

    #[test]
    fn assertions_report_offending_text() {
        assert!(assert_all_coptic_letters("ⲡⲛⲉⲩⲙⲁ").is_ok());
        assert!(assert_all_coptic_letters_or_space("ⲕⲩⲣⲓⲉ ⲉⲗⲉⲏⲥⲟⲛ").is_ok());
        match assert_all_coptic_letters("ⲕⲩⲣⲓⲉ ⲉⲗⲉⲏⲥⲟⲛ") {
            Err(CopticError::InvalidInput(msg)) => assert!(msg.contains("ⲕⲩⲣⲓⲉ")),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            assert_all_coptic_letters_or_space("ⲧⲁⲩ-ⲣⲟ"),
            Err(CopticError::InvalidInput(_))
        ));
    }
}
