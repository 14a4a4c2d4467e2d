use super::alphabet::{self, EI};
use super::heuristic::{LanguageHeuristic, Origin};
use super::model::CopticError;
use super::phonetic::PhoneticAlphabet;
use super::rules::{RuleTable, ScanAdvance};

/// Letters written out as other letters, regardless of origin.
const AUXILIARY_LETTERS: &[(&str, &str)] = &[
    ("ⲅⲅ", "ⲛⲅ"),
    ("ⲅⲕ", "ⲛⲕ"),
    ("ⲅⲝ", "ⲛⲕⲥ"),
    ("ⲅⲭ", "ⲛⲭ"),
    ("ⲝ", "ⲕⲥ"),
    ("ⲯ", "ⲡⲥ"),
    ("ϯ", "ⲧⲓ"),
];

/// `ⲭ` in Greek words: `ϣ` before a front vowel, `ϧ` otherwise.
const GREEK_KHI: &[(&str, &str)] = &[
    ("ⲭⲉ", "ϣⲉ"),
    ("ⲭⲓ", "ϣⲓ"),
    ("ⲭⲏ", "ϣⲏ"),
    ("ⲭⲩ", "ϣⲩ"),
    ("ⲭ", "ϧ"),
];

/// Converts normalized Coptic words to phonetic strings.
///
/// Built once per [`PhoneticAlphabet`]; afterwards every call is a pure
/// function of its input.
#[derive(Debug, Clone)]
pub struct Transliterator {
    heuristic: LanguageHeuristic,
    auxiliary: RuleTable,
    greek_khi: RuleTable,
    consonants: RuleTable,
    vowels: RuleTable,
    word_final_ei: Vec<char>,
}

impl Transliterator {
    pub fn new(phonetic: &PhoneticAlphabet) -> Result<Self, CopticError> {
        Self::with_heuristic(phonetic, LanguageHeuristic::default())
    }

    pub fn with_heuristic(
        phonetic: &PhoneticAlphabet,
        heuristic: LanguageHeuristic,
    ) -> Result<Self, CopticError> {
        phonetic.validate()?;
        let p = phonetic;
        let consonants = RuleTable::from_chars([
            (alphabet::BITA, &p.bita),
            (alphabet::GAMMA, &p.gamma),
            (alphabet::DELTA, &p.delta),
            (alphabet::ZITA, &p.zita),
            (alphabet::THITA, &p.thita),
            (alphabet::KABBA, &p.kabba),
            (alphabet::LAULA, &p.laula),
            (alphabet::MI, &p.mi),
            (alphabet::NI, &p.ni),
            (alphabet::PI, &p.pi),
            (alphabet::RO, &p.ro),
            (alphabet::SIMA, &p.sima),
            (alphabet::TAU, &p.tau),
            (alphabet::PHI, &p.phi),
            (alphabet::KHI, &p.khi),
            (alphabet::SHAI, &p.shai),
            (alphabet::FAI, &p.fai),
            (alphabet::KHAI, &p.khai),
            (alphabet::HORI, &p.hori),
            (alphabet::JANJA, &p.janja),
            (alphabet::CHIMA, &p.chima),
        ])?
        .with_advance(ScanAdvance::PastReplacement);
        let vowels = RuleTable::new([
            (alphabet::ALPHA.to_string(), &p.alpha),
            (EI.to_string(), &p.short_ei),
            (alphabet::EITA.to_string(), &p.eita),
            (alphabet::IOTA.to_string(), &p.iota),
            (format!("{}{}", alphabet::OMICRON, alphabet::UA), &p.omicron_ua),
            (alphabet::OMICRON.to_string(), &p.omicron),
            (alphabet::UA.to_string(), &p.ua),
            (alphabet::OMEGA.to_string(), &p.omega),
        ])?
        .with_advance(ScanAdvance::PastReplacement);

        Ok(Self {
            heuristic,
            auxiliary: RuleTable::new(AUXILIARY_LETTERS.iter().copied())?,
            greek_khi: RuleTable::new(GREEK_KHI.iter().copied())?,
            consonants,
            vowels,
            word_final_ei: p.long_ei.chars().collect(),
        })
    }

    /// Total number of registered rules across all tables.
    pub fn rule_count(&self) -> usize {
        self.auxiliary.len() + self.greek_khi.len() + self.consonants.len() + self.vowels.len()
    }

    /// Transliterate every word of a normalized line.
    ///
    /// Words are separated by single spaces. Each word is handled on its own;
    /// the returned iterator is lazy and yields words in input order.
    pub fn transliterate_line<'a>(
        &'a self,
        normalized_line: &'a str,
    ) -> impl Iterator<Item = String> + 'a {
        normalized_line
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(move |word| self.transliterate_word(word))
    }

    /// Transliterate one normalized word, guessing its origin.
    pub fn transliterate_word(&self, word: &str) -> String {
        self.transliterate_word_as(word, self.heuristic.classify(word))
    }

    /// Transliterate one normalized word of a known origin.
    ///
    /// Characters without a rule (there should be none after normalization)
    /// are passed through unchanged.
    pub fn transliterate_word_as(&self, word: &str, origin: Origin) -> String {
        let mut buf: Vec<char> = word.chars().collect();

        self.auxiliary.apply(&mut buf);

        // Greek ⲭ depends on the following vowel, so it goes before the
        // one-to-one consonant pass.
        if origin == Origin::Greek {
            self.greek_khi.apply(&mut buf);
        }

        // Two leading vowels get an epenthetic ⲉ.
        if buf.len() >= 2 && alphabet::is_vowel(buf[0]) && alphabet::is_vowel(buf[1]) {
            buf.insert(0, EI);
        }

        self.consonants.apply(&mut buf);

        // Word-final ⲉ takes its long form; the rest of the word goes through
        // the vowel table.
        let final_ei = buf.last() == Some(&EI);
        if final_ei {
            buf.pop();
        }
        self.vowels.apply(&mut buf);
        if final_ei {
            buf.extend_from_slice(&self.word_final_ei);
        }

        buf.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Transliterator;
    use crate::engines::coptic::heuristic::{LanguageHeuristic, Origin};
    use crate::engines::coptic::model::CopticError;
    use crate::engines::coptic::phonetic::PhoneticAlphabet;

    fn transliterator() -> Transliterator {
        Transliterator::new(&PhoneticAlphabet::us_ipa()).unwrap()
    }

    #[test]
    fn greek_khi_digraph_beats_generic_khi() {
        let t = transliterator();
        assert_eq!(t.transliterate_word("ⲭⲓ"), "ʃiː");
        assert_eq!(t.transliterate_word("ⲭⲉⲣⲉ"), "ʃəɹeɪ");
    }

    #[test]
    fn greek_khi_fallback_before_other_letters() {
        let t = transliterator();
        // ⲭ before ⲣ takes the generic Greek form (ϧ, then k).
        assert_eq!(t.transliterate_word("ⲭⲣⲓⲥⲧⲟⲥ"), "kɹiːstɑːs");
        assert_eq!(t.transliterate_word_as("ⲭⲁ", Origin::Greek), "kʌ");
    }

    #[test]
    fn coptic_khi_is_never_softened() {
        let t = transliterator();
        assert_eq!(t.transliterate_word_as("ⲭⲓ", Origin::Coptic), "kiː");
    }

    #[test]
    fn word_final_ei_is_long() {
        let t = transliterator();
        assert_eq!(t.transliterate_word("ⲡⲉ"), "peɪ");
        assert_eq!(t.transliterate_word("ⲛⲉⲙ"), "nəm");
        assert_eq!(t.transliterate_word("ⲉⲧⲉ"), "əteɪ");
        assert_eq!(t.transliterate_word("ⲉ"), "eɪ");
    }

    #[test]
    fn dollar_sign_is_not_a_word_boundary() {
        let t = transliterator();
        assert_eq!(t.transliterate_word("ⲡⲉ$"), "pə$");
        assert_eq!(t.transliterate_word("ⲡⲉ$ⲁ"), "pə$ʌ");
    }

    #[test]
    fn alphabet_with_coptic_letters_is_rejected() {
        let mut alphabet = PhoneticAlphabet::us_ipa();
        alphabet.alpha = "ʔⲁ".to_string();
        assert!(matches!(
            Transliterator::new(&alphabet),
            Err(CopticError::Configuration(_))
        ));
    }

    #[test]
    fn omicron_ua_is_a_diphthong() {
        let t = transliterator();
        assert_eq!(t.transliterate_word("ⲛⲟⲩⲃ"), "nuːb");
        assert_eq!(t.transliterate_word("ⲛⲟⲃ"), "nɑːb");
        assert_eq!(t.transliterate_word("ⲫⲛⲟⲩϯ"), "fnuːtiː");
    }

    #[test]
    fn auxiliary_letters_expand() {
        let t = transliterator();
        assert_eq!(t.transliterate_word("ⲁⲅⲅⲉⲗⲟⲥ"), "ʌngəlɑːs");
        assert_eq!(t.transliterate_word("ⲁⲝ"), "ʌks");
        assert_eq!(t.transliterate_word("ⲯⲁ"), "psʌ");
        assert_eq!(t.transliterate_word("ϯ"), "tiː");
    }

    #[test]
    fn two_leading_vowels_get_epenthetic_ei() {
        let t = transliterator();
        assert_eq!(t.transliterate_word("ⲟⲩⲃ"), "əuːb");
        assert_eq!(t.transliterate_word("ⲁⲛ"), "ʌn");
    }

    #[test]
    fn unknown_characters_pass_through() {
        let t = transliterator();
        assert_eq!(t.transliterate_word("ⲃ-ⲃ"), "b-b");
        assert_eq!(t.transliterate_word(""), "");
    }

    #[test]
    fn line_preserves_word_order() {
        let t = transliterator();
        let words: Vec<String> = t.transliterate_line("ⲁⲛⲟⲕ ⲡⲉ ⲭⲉⲣⲉ").collect();
        assert_eq!(words, vec!["ʌnɑːk", "peɪ", "ʃəɹeɪ"]);
        assert_eq!(t.transliterate_line("").count(), 0);
    }

    #[test]
    fn alternate_alphabet_and_heuristic() {
        let mut alphabet = PhoneticAlphabet::us_ipa();
        alphabet.ro = "r".to_string();
        alphabet.long_ei = "e".to_string();
        let t = Transliterator::with_heuristic(
            &alphabet,
            LanguageHeuristic::with_lexicons(Vec::<String>::new(), vec!["ⲭⲉⲣ".to_string()]),
        )
        .unwrap();
        assert_eq!(t.transliterate_word("ⲭⲉⲣ"), "ʃər");
        assert_eq!(t.transliterate_word("ⲭⲉⲣⲉ"), "kəre");
    }
}
