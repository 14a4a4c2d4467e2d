use std::collections::HashSet;

use super::alphabet::{
    self, CHIMA, DELTA, FAI, GAMMA, HORI, JANJA, KHAI, PSI, SHAI, TI, UA, XI, ZITA,
};

/// Source language of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Coptic,
    Greek,
}

/// Letters that never occur in Greek loanwords.
pub const COPTIC_ONLY_LETTERS: [char; 7] = [SHAI, FAI, KHAI, HORI, JANJA, CHIMA, TI];

/// Letters borrowed only for writing Greek loanwords.
pub const GREEK_ONLY_LETTERS: [char; 5] = [GAMMA, DELTA, ZITA, XI, PSI];

const COPTIC_ONLY_WORDS: &[&str] = &["ⲁⲛⲍⲏⲃ"];

const GREEK_ONLY_WORDS: &[&str] = &["ⲭⲉⲣⲉ", "ⲭⲣⲓⲥⲧⲟⲥ", "ⲭⲓ"];

/// Lexicon and letter-exclusivity guess of a word's [`Origin`].
///
/// Not a statistical model: the first rule that fires decides, and anything
/// undecided is Coptic, the more frequent class.
#[derive(Debug, Clone)]
pub struct LanguageHeuristic {
    coptic_words: HashSet<String>,
    greek_words: HashSet<String>,
}

impl Default for LanguageHeuristic {
    fn default() -> Self {
        Self::with_lexicons(
            COPTIC_ONLY_WORDS.iter().copied(),
            GREEK_ONLY_WORDS.iter().copied(),
        )
    }
}

impl LanguageHeuristic {
    /// Use custom whole-word lexicons. The letter rules are fixed.
    pub fn with_lexicons<C, G, S>(coptic_words: C, greek_words: G) -> Self
    where
        C: IntoIterator<Item = S>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            coptic_words: coptic_words.into_iter().map(Into::into).collect(),
            greek_words: greek_words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classify(&self, word: &str) -> Origin {
        if self.is_certainly_coptic(word) {
            Origin::Coptic
        } else if self.is_certainly_greek(word) {
            Origin::Greek
        } else {
            Origin::Coptic
        }
    }

    pub fn guess_if_coptic(&self, word: &str) -> bool {
        self.classify(word) == Origin::Coptic
    }

    fn is_certainly_coptic(&self, word: &str) -> bool {
        self.coptic_words.contains(word) || word.chars().any(|c| COPTIC_ONLY_LETTERS.contains(&c))
    }

    fn is_certainly_greek(&self, word: &str) -> bool {
        if self.greek_words.contains(word) || word.chars().any(|c| GREEK_ONLY_LETTERS.contains(&c)) {
            return true;
        }
        // ⲩ after a vowel that cannot precede it in native words.
        let chars: Vec<char> = word.chars().collect();
        chars.windows(2).any(|pair| {
            pair[1] == UA && alphabet::is_vowel(pair[0]) && !alphabet::is_ua_compatible_vowel(pair[0])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{LanguageHeuristic, Origin};

    fn classify(word: &str) -> Origin {
        LanguageHeuristic::default().classify(word)
    }

    #[test]
    fn coptic_only_letter_wins_over_greek_letters() {
        assert_eq!(classify("ϩ"), Origin::Coptic);
        assert_eq!(classify("ϩⲍⲇⲅ"), Origin::Coptic);
        assert_eq!(classify("ⲯⲩⲭⲏϩ"), Origin::Coptic);
    }

    #[test]
    fn coptic_lexicon_overrides_greek_letters() {
        assert_eq!(classify("ⲁⲛⲍⲏⲃ"), Origin::Coptic);
        assert_eq!(classify("ⲍⲏⲃ"), Origin::Greek);
    }

    #[test]
    fn greek_lexicon_and_letters() {
        assert_eq!(classify("ⲭⲉⲣⲉ"), Origin::Greek);
        assert_eq!(classify("ⲭⲣⲓⲥⲧⲟⲥ"), Origin::Greek);
        assert_eq!(classify("ⲭⲓ"), Origin::Greek);
        assert_eq!(classify("ⲁⲅⲅⲉⲗⲟⲥ"), Origin::Greek);
        assert_eq!(classify("ⲡⲁⲣⲁⲇⲓⲥⲟⲥ"), Origin::Greek);
    }

    #[test]
    fn ua_after_incompatible_vowel_is_greek() {
        assert_eq!(classify("ⲏⲩ"), Origin::Greek);
        assert_eq!(classify("ⲙⲱⲩⲥⲏⲥ"), Origin::Greek);
        // ⲁ, ⲉ and ⲟ may precede ⲩ in Coptic.
        assert_eq!(classify("ⲛⲟⲩⲧⲉ"), Origin::Coptic);
        assert_eq!(classify("ⲁⲩⲱ"), Origin::Coptic);
        assert_eq!(classify("ⲉⲩⲥⲱⲧⲉⲙ"), Origin::Coptic);
        // Only vowels trigger the rule.
        assert_eq!(classify("ⲙⲩⲣⲟⲛ"), Origin::Coptic);
    }

    #[test]
    fn ambiguous_words_default_to_coptic() {
        let heuristic = LanguageHeuristic::default();
        assert!(heuristic.guess_if_coptic("ⲡⲉ"));
        assert!(heuristic.guess_if_coptic("ⲭⲉⲗ"));
        assert!(heuristic.guess_if_coptic(""));
    }

    #[test]
    fn custom_lexicons() {
        let heuristic = LanguageHeuristic::with_lexicons(["ⲭⲉⲣⲉ"], ["ⲡⲉ"]);
        assert_eq!(heuristic.classify("ⲭⲉⲣⲉ"), Origin::Coptic);
        assert_eq!(heuristic.classify("ⲡⲉ"), Origin::Greek);
        assert_eq!(heuristic.classify("ⲭⲓ"), Origin::Coptic);
    }
}
