//! Persistent map from normalized text to its pronunciation markup.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::engines::coptic::CopticError;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    pronunciations: BTreeMap<String, String>,
}

/// Pronunciations keyed by normalized word or line, stored as a JSON file.
///
/// Changes stay in memory until [`save`](Self::save) is called.
#[derive(Debug)]
pub struct PronunciationStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl PronunciationStore {
    /// Open the store at `path`. A missing file yields an empty store.
    pub fn open(path: &Path) -> Result<Self, CopticError> {
        let entries = if path.exists() {
            let reader = BufReader::new(File::open(path)?);
            let file: StoreFile = serde_json::from_reader(reader)?;
            log::info!(
                "Loaded {} pronunciations from {}",
                file.pronunciations.len(),
                path.display()
            );
            file.pronunciations
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert unless `key` is already present. Returns whether it inserted.
    pub fn insert_or_ignore(&mut self, key: &str, pronunciation: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), pronunciation.to_string());
        true
    }

    /// Insert, overwriting any existing pronunciation for `key`.
    pub fn insert_or_replace(&mut self, key: &str, pronunciation: &str) {
        self.entries.insert(key.to_string(), pronunciation.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Atomically write the store to its path.
    pub fn save(&self) -> Result<(), CopticError> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let file = StoreFile {
            pronunciations: self.entries.clone(),
        };
        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, &file)?;
            writer.flush()?;
        }
        temp_file
            .persist(&self.path)
            .map_err(|e| CopticError::Io(e.error))?;
        log::info!(
            "Saved {} pronunciations to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PronunciationStore;

    #[test]
    fn insert_or_ignore_keeps_first_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PronunciationStore::open(&dir.path().join("p.json")).unwrap();
        assert!(store.is_empty());
        assert!(store.insert_or_ignore("ⲡⲉ", "<a/>"));
        assert!(!store.insert_or_ignore("ⲡⲉ", "<b/>"));
        assert_eq!(store.get("ⲡⲉ"), Some("<a/>"));
        store.insert_or_replace("ⲡⲉ", "<c/>");
        assert_eq!(store.get("ⲡⲉ"), Some("<c/>"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_and_reopen_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("p.json");
        let mut store = PronunciationStore::open(&path).unwrap();
        store.insert_or_ignore("ⲫⲛⲟⲩϯ", "<speak/>");
        store.save().unwrap();

        let reopened = PronunciationStore::open(&path).unwrap();
        assert_eq!(reopened.path(), path.as_path());
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get("ⲫⲛⲟⲩϯ"), Some("<speak/>"));
    }

    #[test]
    fn open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(PronunciationStore::open(&path).is_err());
    }
}
