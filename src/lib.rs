//! # coptic-ipa
//!
//! A Rust library that turns raw Coptic text into IPA transcriptions wrapped in
//! SSML, ready for a speech-synthesis service.
//!
//! ## Features
//!
//! - **Normalization**: diacritic canonicalization, abbreviation and numeral
//!   expansion, stripping of everything that is not a Coptic letter
//! - **Transliteration**: rule-table phoneme substitution with Coptic/Greek
//!   origin guessing per word
//! - **Pluggable Phonetic Alphabets**: swap the letter → sound mapping via JSON
//! - **Batch Processing**: parallel transcription of vocabulary lists into a
//!   persistent pronunciation store (feature `batch`, on by default)
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! coptic-ipa = "2026.10"
//! ```
//!
//! ```rust
//! use coptic_ipa::{engines::coptic::CopticEngine, TranscriptionEngine};
//!
//! let engine = CopticEngine::new()?;
//! let result = engine.transcribe("Ⲫϯ ⲡⲉ", None)?;
//! println!("{}", result.to_ssml(&Default::default()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engines;
pub mod ssml;
pub mod store;

use std::path::Path;

use ssml::SsmlTemplate;

/// The result of a transcription operation.
///
/// Contains the normalized text and one phonetic string per word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    /// Space-delimited, letters-only form of the input
    pub normalized: String,
    /// Phonetic transcription of each normalized word, in order
    pub phonemes: Vec<String>,
}

impl TranscriptionResult {
    /// Render the phonetic words as SSML.
    pub fn to_ssml(&self, template: &SsmlTemplate) -> String {
        template.render(&self.phonemes)
    }

    /// Write the default-template SSML to a file.
    pub fn write_ssml(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_ssml(&SsmlTemplate::default()))?;
        Ok(())
    }

    /// Number of transcribed words.
    pub fn word_count(&self) -> usize {
        self.phonemes.len()
    }
}

/// Common interface for text-to-phoneme transcription engines.
///
/// Engines are immutable once built, so transcription only needs `&self` and
/// an engine can be shared across threads.
pub trait TranscriptionEngine {
    /// Parameters for configuring a single request
    type TranscriptionParams;

    /// Transcribe the given text.
    fn transcribe(
        &self,
        text: &str,
        params: Option<Self::TranscriptionParams>,
    ) -> Result<TranscriptionResult, Box<dyn std::error::Error>>;

    /// Transcribe the given text and write SSML to a file.
    ///
    /// Default implementation calls `transcribe()` then `TranscriptionResult::write_ssml()`.
    fn transcribe_to_file(
        &self,
        text: &str,
        ssml_path: &Path,
        params: Option<Self::TranscriptionParams>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.transcribe(text, params)?.write_ssml(ssml_path)
    }
}
