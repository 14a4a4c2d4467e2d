//! Length-bucketed exact-token rewriting.
//!
//! A [`RuleTable`] maps source tokens to replacements and rewrites a mutable
//! character buffer in place. Tokens are grouped by length (in chars) and the
//! groups are applied **longest first**, so a multi-character token always
//! gets the first chance at a position before any of its prefixes or suffixes
//! (maximal munch). Within one group the buffer is scanned left to right.
//!
//! Every later group (and every later table) re-scans the buffer as it stands
//! after the previous one, replacements included. That is what lets tables be
//! chained: letters become letter clusters, then clusters become phonemes.

use std::collections::{BTreeMap, HashMap};

use super::model::CopticError;

/// How the scan index moves after a replacement within one length group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanAdvance {
    /// Move one position forward from the start of the replaced span,
    /// whatever the replacement length. The tail of a multi-character
    /// replacement is visible to the same group, and the character following
    /// an empty replacement is skipped.
    ///
    /// A rule whose replacement contains its own token past the first
    /// position keeps rewriting its own output, so such tables must use
    /// [`PastReplacement`](Self::PastReplacement).
    #[default]
    ByOne,
    /// Resume right after the inserted replacement. Replaced text is never
    /// re-examined by the same group.
    PastReplacement,
}

/// An immutable set of token rewrite rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    /// Rules keyed by token length, then token.
    groups: BTreeMap<usize, HashMap<Vec<char>, Vec<char>>>,
    advance: ScanAdvance,
}

impl RuleTable {
    /// Build a table from `(token, replacement)` pairs.
    ///
    /// When the same token is registered twice the later replacement wins.
    /// An empty token is a [`CopticError::Configuration`] error.
    pub fn new<I, K, V>(rules: I) -> Result<Self, CopticError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut groups: BTreeMap<usize, HashMap<Vec<char>, Vec<char>>> = BTreeMap::new();
        for (token, replacement) in rules {
            let token: Vec<char> = token.as_ref().chars().collect();
            if token.is_empty() {
                return Err(CopticError::Configuration(format!(
                    "empty token in rule table (replacement {:?})",
                    replacement.as_ref()
                )));
            }
            groups
                .entry(token.len())
                .or_default()
                .insert(token, replacement.as_ref().chars().collect());
        }
        Ok(Self {
            groups,
            advance: ScanAdvance::default(),
        })
    }

    /// Build a table that maps each single character to a fixed replacement.
    pub fn from_chars<I, V>(rules: I) -> Result<Self, CopticError>
    where
        I: IntoIterator<Item = (char, V)>,
        V: AsRef<str>,
    {
        Self::new(
            rules
                .into_iter()
                .map(|(token, replacement)| (token.to_string(), replacement)),
        )
    }

    /// Use a different index-advance policy.
    pub fn with_advance(mut self, advance: ScanAdvance) -> Self {
        self.advance = advance;
        self
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Rewrite `buf` in place.
    pub fn apply(&self, buf: &mut Vec<char>) {
        for (&token_len, group) in self.groups.iter().rev() {
            let mut i = 0;
            while i + token_len <= buf.len() {
                match group.get(&buf[i..i + token_len]) {
                    Some(replacement) => {
                        buf.splice(i..i + token_len, replacement.iter().copied());
                        i += match self.advance {
                            ScanAdvance::ByOne => 1,
                            ScanAdvance::PastReplacement => replacement.len(),
                        };
                    }
                    None => i += 1,
                }
            }
        }
    }

    /// Convenience wrapper around [`apply`](Self::apply) for string input.
    pub fn apply_str(&self, text: &str) -> String {
        let mut buf: Vec<char> = text.chars().collect();
        self.apply(&mut buf);
        buf.into_iter().collect()
    }
}
