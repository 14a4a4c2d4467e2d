use std::path::Path;

use serde::{Deserialize, Serialize};

use super::alphabet;
use super::model::CopticError;

/// Phonetic strings for each letter slot.
///
/// Letters that are always spelled out through other letters (`ⲝ`, `ⲯ`, `ϯ`)
/// have no slot of their own. `ⲉ` has a short form and a word-final long form,
/// and `ⲟⲩ` is a diphthong slot distinct from `ⲟ` and `ⲩ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneticAlphabet {
    pub alpha: String,
    pub bita: String,
    pub gamma: String,
    pub delta: String,
    pub short_ei: String,
    pub long_ei: String,
    pub zita: String,
    pub eita: String,
    pub thita: String,
    pub iota: String,
    pub kabba: String,
    pub laula: String,
    pub mi: String,
    pub ni: String,
    pub omicron: String,
    pub omicron_ua: String,
    pub pi: String,
    pub ro: String,
    pub sima: String,
    pub tau: String,
    pub ua: String,
    pub phi: String,
    pub khi: String,
    pub omega: String,
    pub shai: String,
    pub fai: String,
    pub khai: String,
    pub hori: String,
    pub janja: String,
    pub chima: String,
}

impl Default for PhoneticAlphabet {
    fn default() -> Self {
        Self::us_ipa()
    }
}

impl PhoneticAlphabet {
    /// IPA approximations as pronounced by a US-English speaker.
    ///
    /// Opening vowels: æ (cat), ə (again), ʌ (pulse), aɪ (price), aʊ (flower).
    /// Joining vowels: ɑː (cot), ɔː (more), ʊ (could), uː (school), oʊ (boat).
    /// Dragging vowels: ɚ (bird), ɛ (bed), ɪ (kit), iː (unique), eɪ (shade).
    pub fn us_ipa() -> Self {
        let s = |v: &str| v.to_string();
        Self {
            alpha: s("ʌ"),
            bita: s("b"),
            gamma: s("g"),
            delta: s("d"),
            short_ei: s("ə"),
            long_ei: s("eɪ"),
            zita: s("z"),
            eita: s("iː"),
            thita: s("t"),
            iota: s("iː"),
            kabba: s("k"),
            laula: s("l"),
            mi: s("m"),
            ni: s("n"),
            omicron: s("ɑː"),
            omicron_ua: s("uː"),
            pi: s("p"),
            ro: s("ɹ"),
            sima: s("s"),
            tau: s("t"),
            ua: s("w"),
            phi: s("f"),
            khi: s("k"),
            omega: s("ɔː"),
            shai: s("ʃ"),
            fai: s("f"),
            khai: s("k"),
            hori: s("h"),
            janja: s("ʒ"),
            chima: s("ʧ"),
        }
    }

    /// Parse an alphabet from JSON. Slots absent from the JSON object keep
    /// their US-IPA value.
    pub fn from_json(json: &str) -> Result<Self, CopticError> {
        let alphabet: Self = serde_json::from_str(json)?;
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// Load an alphabet from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CopticError> {
        let content = std::fs::read_to_string(path)?;
        let alphabet = Self::from_json(&content)?;
        log::info!("Loaded phonetic alphabet from {}", path.display());
        Ok(alphabet)
    }

    /// Load from `path` if it exists, otherwise fall back to [`us_ipa`](Self::us_ipa).
    pub fn load_or_default(path: &Path) -> Result<Self, CopticError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "{} not found, using built-in US-IPA alphabet",
                path.display()
            );
            Ok(Self::us_ipa())
        }
    }

    /// Every slot must produce some sound, and none may contain a Coptic
    /// letter: slot values are never rewritten by later passes.
    pub(crate) fn validate(&self) -> Result<(), CopticError> {
        let slots = [
            ("alpha", &self.alpha),
            ("bita", &self.bita),
            ("gamma", &self.gamma),
            ("delta", &self.delta),
            ("short_ei", &self.short_ei),
            ("long_ei", &self.long_ei),
            ("zita", &self.zita),
            ("eita", &self.eita),
            ("thita", &self.thita),
            ("iota", &self.iota),
            ("kabba", &self.kabba),
            ("laula", &self.laula),
            ("mi", &self.mi),
            ("ni", &self.ni),
            ("omicron", &self.omicron),
            ("omicron_ua", &self.omicron_ua),
            ("pi", &self.pi),
            ("ro", &self.ro),
            ("sima", &self.sima),
            ("tau", &self.tau),
            ("ua", &self.ua),
            ("phi", &self.phi),
            ("khi", &self.khi),
            ("omega", &self.omega),
            ("shai", &self.shai),
            ("fai", &self.fai),
            ("khai", &self.khai),
            ("hori", &self.hori),
            ("janja", &self.janja),
            ("chima", &self.chima),
        ];
        for (name, value) in slots {
            if value.is_empty() {
                return Err(CopticError::Configuration(format!(
                    "phonetic alphabet slot '{name}' is empty"
                )));
            }
            if let Some(letter) = value.chars().find(|&c| alphabet::is_letter(c)) {
                return Err(CopticError::Configuration(format!(
                    "phonetic alphabet slot '{name}' contains the Coptic letter '{letter}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneticAlphabet;
    use crate::engines::coptic::model::CopticError;

    #[test]
    fn partial_json_keeps_defaults_for_missing_slots() {
        let alphabet = PhoneticAlphabet::from_json(r#"{"ro": "r", "alpha": "a"}"#).unwrap();
        assert_eq!(alphabet.ro, "r");
        assert_eq!(alphabet.alpha, "a");
        assert_eq!(alphabet.shai, PhoneticAlphabet::us_ipa().shai);
    }

    #[test]
    fn rejects_empty_slot() {
        let result = PhoneticAlphabet::from_json(r#"{"hori": ""}"#);
        match result {
            Err(CopticError::Configuration(msg)) => assert!(msg.contains("hori")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_coptic_letter_in_slot() {
        match PhoneticAlphabet::from_json(r#"{"alpha": "ʔⲁ"}"#) {
            Err(CopticError::Configuration(msg)) => {
                assert!(msg.contains("alpha"));
                assert!(msg.contains('ⲁ'));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(PhoneticAlphabet::from_json(r#"{"alpha": "a$"}"#).is_ok());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            PhoneticAlphabet::from_json("{\"ro\": 3}"),
            Err(CopticError::Json(_))
        ));
    }

    #[test]
    fn load_or_default_falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alphabet.json");
        assert_eq!(
            PhoneticAlphabet::load_or_default(&path).unwrap(),
            PhoneticAlphabet::us_ipa()
        );

        std::fs::write(&path, r#"{"khi": "x"}"#).unwrap();
        assert_eq!(PhoneticAlphabet::load_or_default(&path).unwrap().khi, "x");
    }
}
