use super::alphabet;
use super::heuristic::Origin;
use super::normalizer::Normalizer;
use super::phonetic::PhoneticAlphabet;
use super::transliterator::Transliterator;

#[derive(thiserror::Error, Debug)]
pub enum CopticError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The composed normalization + transliteration pipeline.
///
/// All rule tables are built once here and never mutated afterwards, so a
/// model can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct CopticModel {
    normalizer: Normalizer,
    transliterator: Transliterator,
}

impl CopticModel {
    /// Build the pipeline for the given phonetic alphabet.
    pub fn new(phonetic: &PhoneticAlphabet) -> Result<Self, CopticError> {
        let normalizer = Normalizer::new()?;
        let transliterator = Transliterator::new(phonetic)?;
        log::debug!(
            "Built Coptic pipeline: {} normalizer rules, {} transliteration rules",
            normalizer.rule_count(),
            transliterator.rule_count()
        );
        Ok(Self {
            normalizer,
            transliterator,
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.transliterator
    }

    /// Normalize a raw line.
    pub fn normalize_line(&self, raw: &str) -> String {
        self.normalizer.normalize_line(raw)
    }

    /// Transliterate an already normalized line, one phonetic string per word.
    ///
    /// With `origin` set, every word is treated as that origin instead of
    /// being classified individually.
    pub fn transliterate_normalized(&self, normalized: &str, origin: Option<Origin>) -> Vec<String> {
        match origin {
            Some(origin) => normalized
                .split(' ')
                .filter(|word| !word.is_empty())
                .map(|word| self.transliterator.transliterate_word_as(word, origin))
                .collect(),
            None => self.transliterator.transliterate_line(normalized).collect(),
        }
    }

    /// Run the full pipeline on a raw line.
    ///
    /// Returns the normalized line together with its phonetic words.
    pub fn transcribe_line(&self, raw: &str, origin: Option<Origin>) -> (String, Vec<String>) {
        let normalized = self.normalize_line(raw);
        debug_assert!(alphabet::is_all_coptic_letters_or_space(&normalized));
        let phonemes = self.transliterate_normalized(&normalized, origin);
        log::debug!("{raw:?} -> {normalized:?} -> {phonemes:?}");
        (normalized, phonemes)
    }
}
