//! Coptic text-to-IPA transcription engine.
//!
//! This module converts raw Coptic text into a canonical letters-only form
//! and then into phonetic strings suitable for SSML `<phoneme>` markup.
//! Everything is in-memory string rewriting; no external tools are needed.
//!
//! # Pipeline
//!
//! ```text
//! raw line ─► Normalizer ─► "ⲫⲛⲟⲩϯ ⲡⲉ" ─► Transliterator ─► ["fnuːtiː", "peɪ"]
//!                                          (LanguageHeuristic per word)
//! ```
//!
//! | Module | Role |
//! |---|---|
//! | [`alphabet`] | Letter / vowel / diacritic classification |
//! | [`rules`] | Longest-first token rewrite tables |
//! | [`normalizer`] | Diacritics, abbreviations, numerals, glyph filtering |
//! | [`heuristic`] | Coptic vs. Greek-loanword guess per word |
//! | [`phonetic`] | Letter slot → phonetic string mapping |
//! | [`transliterator`] | Letter → phoneme rewriting |
//! | `batch` | Parallel vocabulary transcription (feature `batch`) |
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use coptic_ipa::{TranscriptionEngine, engines::coptic::CopticEngine};
//!
//! let engine = CopticEngine::new()?;
//! let result = engine.transcribe("ⲭⲉⲣⲉ ⲛⲉ Ⲙⲁⲣⲓⲁ", None)?;
//! println!("{} -> {:?}", result.normalized, result.phonemes);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Forcing the Word Origin
//!
//! ```rust
//! use coptic_ipa::{TranscriptionEngine, engines::coptic::{CopticEngine, CopticTranscriptionParams, Origin}};
//!
//! let engine = CopticEngine::new()?;
//! let params = CopticTranscriptionParams { origin: Some(Origin::Greek) };
//! let result = engine.transcribe("ⲭⲏⲙⲓ", Some(params))?;
//! assert_eq!(result.phonemes, vec!["ʃiːmiː"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alphabet;
#[cfg(feature = "batch")]
pub mod batch;
pub mod engine;
pub mod heuristic;
pub mod model;
pub mod normalizer;
pub mod phonetic;
pub mod rules;
pub mod transliterator;

pub use engine::{CopticEngine, CopticTranscriptionParams};
pub use heuristic::{LanguageHeuristic, Origin};
pub use model::{CopticError, CopticModel};
pub use normalizer::Normalizer;
pub use phonetic::PhoneticAlphabet;
pub use rules::{RuleTable, ScanAdvance};
pub use transliterator::Transliterator;
