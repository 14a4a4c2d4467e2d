//! Canonicalization of raw Coptic text.
//!
//! A raw line goes through, in order:
//! 1. lower-casing;
//! 2. diacritic canonicalization (nonstandard jinkims and overlines become the
//!    standard combining marks, spacing jinkims become combining ones on the
//!    following letter);
//! 3. letter-abbreviation expansion (ligature symbols);
//! 4. word-abbreviation expansion (overlined contractions such as `ⲓ̅ⲏ̅ⲥ̅`);
//! 5. numeral expansion;
//! 6. glyph filtering: the line is split at non-glyphs, each span keeps only
//!    its letters, and non-empty spans are joined with single spaces.
//!
//! The output holds only letters and single spaces between words.

use super::alphabet::{self, STANDARD_JINKIM, STANDARD_OVERLINE};
use super::model::CopticError;
use super::rules::RuleTable;

/// Ligature symbols standing for whole letter sequences.
const LETTER_ABBREVIATIONS: &[(char, &str)] = &[
    ('ⳤ', "ⲕⲁⲓ"),
    ('⳥', "ⲙⲁⲣⲧⲏⲣⲟⲥ"),
    ('⳦', "ⲡⲣⲟⲥ"),
    ('⳧', "ⲥⲧⲁⲩⲣⲟⲥ"),
    ('⳨', "ⲧⲁⲩ-ⲣⲟ"),
    ('⳩', "ⲭⲣⲓⲥⲧⲟⲥ"),
    ('⳪', "ϭⲟⲓⲥ"),
];

/// How a word abbreviation is written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AbbreviationForm {
    /// Plain letters, no marks.
    Bare,
    /// Every letter overlined.
    Small,
    /// Every letter overlined, and also the variant with the (capitalized)
    /// first letter left bare.
    SmallAndCapitalized,
}

const WORD_ABBREVIATIONS: &[(&str, &str, AbbreviationForm)] = &[
    ("ⲫϯ", "ⲫⲛⲟⲩϯ", AbbreviationForm::Bare),
    ("ⲓⲏⲥ", "ⲓⲏⲥⲟⲩⲥ", AbbreviationForm::SmallAndCapitalized),
    ("ⲓⲗⲏⲙ", "ⲓⲉⲣⲟⲥⲁⲗⲏⲙ", AbbreviationForm::SmallAndCapitalized),
    ("ⲓⲥⲗ", "ⲓⲥⲣⲁⲏⲗ", AbbreviationForm::SmallAndCapitalized),
    ("ⲓⲱⲁ", "ⲓⲱⲁⲛⲛⲏⲥ", AbbreviationForm::SmallAndCapitalized),
    ("ⲇⲁⲇ", "ⲇⲁⲩⲓⲇ", AbbreviationForm::Small),
    ("ⲁⲗ", "ⲁⲗⲗⲏⲗⲟⲩⲓⲁ", AbbreviationForm::Small),
    ("ⲕⲉ", "ⲕⲩⲣⲓⲉ ⲉⲗⲉⲏⲥⲟⲛ", AbbreviationForm::Small),
    ("ⲡⲛⲁ", "ⲡⲛⲉⲩⲙⲁ", AbbreviationForm::Small),
    ("ⲉⲑⲩ", "ⲉⲑⲟⲩⲁⲃ", AbbreviationForm::Small),
    ("ⲉⲑ", "ⲉⲑⲟⲩⲁⲃ", AbbreviationForm::Small),
];

/// Numeral glyphs spelled out as words.
const NUMERALS: &[(char, &str)] = &[(alphabet::SOOU, "ⲥⲟⲟⲩ")];

#[derive(Debug, Clone)]
pub struct Normalizer {
    jinkims: RuleTable,
    overlines: RuleTable,
    letter_abbreviations: RuleTable,
    word_abbreviations: RuleTable,
    bare_word_abbreviations: RuleTable,
    numerals: RuleTable,
}

impl Normalizer {
    /// Build all normalization tables.
    ///
    /// Fails if a built-in abbreviation is malformed; this is a startup
    /// integrity check and never depends on user input.
    pub fn new() -> Result<Self, CopticError> {
        let jinkims = RuleTable::from_chars(
            alphabet::NONSTANDARD_JINKIMS
                .iter()
                .map(|&c| (c, STANDARD_JINKIM.to_string())),
        )?;
        let overlines = RuleTable::from_chars(
            alphabet::NONSTANDARD_OVERLINES
                .iter()
                .map(|&c| (c, STANDARD_OVERLINE.to_string())),
        )?;
        let letter_abbreviations = RuleTable::from_chars(LETTER_ABBREVIATIONS.iter().copied())?;

        let mut word_rules = Vec::new();
        let mut bare_rules = Vec::new();
        for &(letters, expansion, form) in WORD_ABBREVIATIONS {
            alphabet::assert_all_coptic_letters_or_space(expansion)?;
            match form {
                AbbreviationForm::Bare => {
                    alphabet::assert_all_coptic_letters(letters)?;
                    bare_rules.push((letters.to_string(), expansion));
                }
                AbbreviationForm::Small => {
                    word_rules.push((build_abbreviation(letters, false)?, expansion));
                }
                AbbreviationForm::SmallAndCapitalized => {
                    word_rules.push((build_abbreviation(letters, false)?, expansion));
                    word_rules.push((build_abbreviation(letters, true)?, expansion));
                }
            }
        }
        word_rules.extend(bare_rules.iter().cloned());

        Ok(Self {
            jinkims,
            overlines,
            letter_abbreviations,
            word_abbreviations: RuleTable::new(word_rules)?,
            bare_word_abbreviations: RuleTable::new(bare_rules)?,
            numerals: RuleTable::from_chars(NUMERALS.iter().copied())?,
        })
    }

    /// Total number of registered rules across all tables.
    pub fn rule_count(&self) -> usize {
        self.jinkims.len()
            + self.overlines.len()
            + self.letter_abbreviations.len()
            + self.word_abbreviations.len()
            + self.numerals.len()
    }

    /// Canonicalize one line of raw text.
    pub fn normalize_line(&self, raw: &str) -> String {
        let mut buf: Vec<char> = raw.to_lowercase().chars().collect();
        self.normalize_diacritics(&mut buf);
        self.letter_abbreviations.apply(&mut buf);
        self.word_abbreviations.apply(&mut buf);
        self.numerals.apply(&mut buf);

        let line: String = buf.into_iter().collect();
        let words: Vec<String> = alphabet::split_at_non_coptic_glyphs(&line)
            .map(|span| {
                let mut word: Vec<char> = span.chars().collect();
                alphabet::delete_non_coptic_letters(&mut word);
                word.into_iter().collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect();

        // Stripping diacritics can bring two letters of a bare abbreviation
        // together (e.g. a jinkim between them); expand those too so that
        // the output is a fixed point.
        let mut joined: Vec<char> = words.join(" ").chars().collect();
        self.bare_word_abbreviations.apply(&mut joined);
        joined.into_iter().collect()
    }

    fn normalize_diacritics(&self, buf: &mut Vec<char>) {
        self.jinkims.apply(buf);
        self.overlines.apply(buf);
        // A spacing jinkim precedes the letter it marks; move it after that
        // letter as a combining mark.
        let mut i = 0;
        while i < buf.len() {
            if alphabet::is_spacing_jinkim(buf[i]) {
                if i + 1 == buf.len() {
                    buf.remove(i);
                } else {
                    buf[i] = buf[i + 1];
                    buf[i + 1] = STANDARD_JINKIM;
                }
            }
            i += 1;
        }
    }
}

/// Spell an overlined abbreviation of `letters`.
///
/// The small form carries an overline on every letter. The capitalized form
/// leaves the first letter bare.
fn build_abbreviation(letters: &str, capitalized: bool) -> Result<String, CopticError> {
    let count = letters.chars().count();
    if count < 2 {
        return Err(CopticError::Configuration(format!(
            "abbreviation {letters:?} must have at least 2 letters"
        )));
    }
    alphabet::assert_all_coptic_letters(letters)?;
    let mut abbreviation = String::with_capacity(letters.len() * 2);
    for (i, c) in letters.chars().enumerate() {
        abbreviation.push(c);
        if !capitalized || i != 0 {
            abbreviation.push(STANDARD_OVERLINE);
        }
    }
    Ok(abbreviation)
}
