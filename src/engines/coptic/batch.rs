//! Parallel transcription of vocabulary lists into a [`PronunciationStore`].

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::ssml::SsmlTemplate;
use crate::store::PronunciationStore;

use super::engine::CopticEngine;

/// Log progress every this many transcribed lines.
const PROGRESS_INTERVAL: usize = 1000;

/// Outcome of [`populate_store`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Distinct normalized lines newly written to the store.
    pub inserted: usize,
    /// Distinct normalized lines the store already had.
    pub already_present: usize,
    /// Input lines that normalized to nothing.
    pub empty: usize,
    /// Input lines whose normalized form repeated an earlier line.
    pub duplicates: usize,
}

/// Normalize, transliterate and store every line of `lines`.
///
/// Lines are de-duplicated by their normalized form (first occurrence wins),
/// transcribed in parallel, then inserted in input order without overwriting
/// existing entries.
pub fn populate_store<I, S>(
    engine: &CopticEngine,
    template: &SsmlTemplate,
    lines: I,
    store: &mut PronunciationStore,
) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for line in lines {
        let normalized = engine.normalize_line(line.as_ref());
        if normalized.is_empty() {
            report.empty += 1;
        } else if seen.insert(normalized.clone()) {
            distinct.push(normalized);
        } else {
            report.duplicates += 1;
        }
    }

    let done = AtomicUsize::new(0);
    let transliterator = engine.model().transliterator();
    let rendered: Vec<(String, String)> = distinct
        .into_par_iter()
        .map(|normalized| {
            let ssml = template.render(transliterator.transliterate_line(&normalized));
            let count = done.fetch_add(1, Ordering::Relaxed) + 1;
            if count % PROGRESS_INTERVAL == 0 {
                log::debug!("Transcribed {count} lines");
            }
            (normalized, ssml)
        })
        .collect();

    for (normalized, ssml) in &rendered {
        if store.insert_or_ignore(normalized, ssml) {
            report.inserted += 1;
        } else {
            report.already_present += 1;
        }
    }

    log::info!(
        "Batch done: {} inserted, {} already present, {} duplicates, {} empty",
        report.inserted,
        report.already_present,
        report.duplicates,
        report.empty
    );
    report
}
