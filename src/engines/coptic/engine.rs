use std::path::Path;

use crate::{TranscriptionEngine, TranscriptionResult};

use super::heuristic::Origin;
use super::model::{CopticError, CopticModel};
use super::phonetic::PhoneticAlphabet;

/// Parameters for a single Coptic transcription request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopticTranscriptionParams {
    /// Treat every word as this origin. `None` = guess per word.
    pub origin: Option<Origin>,
}

/// Coptic normalization + IPA transliteration engine.
///
/// # Quick Start
///
/// ```rust
/// use coptic_ipa::{TranscriptionEngine, engines::coptic::CopticEngine};
///
/// let engine = CopticEngine::new()?;
/// let result = engine.transcribe("Ⲫϯ ⲡⲉ", None)?;
/// assert_eq!(result.normalized, "ⲫⲛⲟⲩϯ ⲡⲉ");
/// assert_eq!(result.phonemes, vec!["fnuːtiː", "peɪ"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Custom phonetic alphabet
///
/// ```rust,no_run
/// use coptic_ipa::engines::coptic::CopticEngine;
/// use std::path::PathBuf;
///
/// let engine = CopticEngine::from_alphabet_file(&PathBuf::from("alphabets/sahidic.json"))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CopticEngine {
    model: CopticModel,
    phonetic: PhoneticAlphabet,
}

impl CopticEngine {
    /// Create an engine with the built-in US-IPA alphabet.
    pub fn new() -> Result<Self, CopticError> {
        Self::with_alphabet(PhoneticAlphabet::us_ipa())
    }

    pub fn with_alphabet(phonetic: PhoneticAlphabet) -> Result<Self, CopticError> {
        let model = CopticModel::new(&phonetic)?;
        Ok(Self { model, phonetic })
    }

    /// Create an engine from a JSON phonetic alphabet file.
    pub fn from_alphabet_file(path: &Path) -> Result<Self, CopticError> {
        Self::with_alphabet(PhoneticAlphabet::load(path)?)
    }

    pub fn phonetic_alphabet(&self) -> &PhoneticAlphabet {
        &self.phonetic
    }

    pub fn model(&self) -> &CopticModel {
        &self.model
    }

    pub fn normalize_line(&self, raw: &str) -> String {
        self.model.normalize_line(raw)
    }
}

impl TranscriptionEngine for CopticEngine {
    type TranscriptionParams = CopticTranscriptionParams;

    fn transcribe(
        &self,
        text: &str,
        params: Option<Self::TranscriptionParams>,
    ) -> Result<TranscriptionResult, Box<dyn std::error::Error>> {
        let p = params.unwrap_or_default();
        let (normalized, phonemes) = self.model.transcribe_line(text, p.origin);
        Ok(TranscriptionResult {
            normalized,
            phonemes,
        })
    }
}
