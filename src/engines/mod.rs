//! Transcription engines.
//!
//! This module contains implementations of text-to-phoneme engines.
//!
//! # Available Engines
//!
//! - `coptic` - Coptic normalization and IPA transliteration (rule tables, no
//!   external tools). Parallel batch processing requires the `batch` feature.

pub mod coptic;
