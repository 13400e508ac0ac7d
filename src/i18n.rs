// SPDX-License-Identifier: Apache-2.0

//! Translation table lookup.
//!
//! The table itself is owned by the host (it swaps the whole table on a
//! locale change); the search core only reads it. Keys are dotted paths
//! ("help.faq.q1") into a nested string map. Lookup never fails: a missing
//! segment or a non-string leaf resolves to the empty string, which matching
//! then skips.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A leaf string or a nested table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    Table(BTreeMap<String, TranslationValue>),
}

/// One locale's translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(flatten)]
    root: BTreeMap<String, TranslationValue>,
}

impl Translations {
    /// Parse a table from its JSON document.
    pub fn from_json(json: &str) -> Result<Translations, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a dotted key path to its localized text.
    ///
    /// Returns `""` when any segment is missing or the path ends on a nested
    /// table instead of a string. Total: never panics, never errors.
    pub fn resolve(&self, key: &str) -> &str {
        let mut table = &self.root;
        let mut segments = key.split('.').peekable();
        while let Some(segment) = segments.next() {
            match table.get(segment) {
                Some(TranslationValue::Text(text)) if segments.peek().is_none() => return text,
                Some(TranslationValue::Table(nested)) => table = nested,
                _ => return "",
            }
        }
        ""
    }

    /// Resolve a key for display, falling back to the key itself.
    ///
    /// UI labels prefer showing the raw key over showing nothing; the search
    /// core itself always uses [`Translations::resolve`] so unresolved keys
    /// never match. A miss is logged once per lookup.
    pub fn resolve_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        let resolved = self.resolve(key);
        if resolved.is_empty() {
            tracing::warn!(key, "translation key not found");
            key
        } else {
            resolved
        }
    }
}
