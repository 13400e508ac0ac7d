// SPDX-License-Identifier: Apache-2.0

//! The cross-page index: a static snapshot of what every page talks about.
//!
//! Built ahead of time and loaded once per session, the index maps each page
//! to its title key and sections, each section to the translation keys of its
//! texts. Keys resolve through the active [`crate::i18n::Translations`] at
//! query time, so a locale switch changes the resolved text without touching
//! the index itself.
//!
//! Load failure is not fatal: the widget degrades to in-page-only search. The
//! caller logs the error and carries on without an index.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One section of a page: its title key, anchor id, and text keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    /// Translation key of the section title.
    #[serde(default)]
    pub title: String,
    /// Anchor id on the owning page.
    #[serde(default)]
    pub id: String,
    /// Translation keys of the section's texts.
    #[serde(default)]
    pub keys: Vec<String>,
}

/// One page of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// Translation key of the page title.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

/// The prebuilt page → sections mapping, immutable for the session.
///
/// Pages iterate in `BTreeMap` order (sorted by page id), which keeps
/// cross-page results stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossPageIndex {
    #[serde(flatten)]
    pub pages: BTreeMap<String, PageEntry>,
}

impl CrossPageIndex {
    /// Parse an index from its JSON document.
    ///
    /// Absent `sections`/`keys` fields are tolerated as empty; they simply
    /// contribute no matches.
    pub fn from_json(json: &str) -> Result<CrossPageIndex, LoadError> {
        serde_json::from_str(json).map_err(LoadError::Parse)
    }

    /// One-shot load from a file. No retry; a failure here is terminal for
    /// the session and the widget runs without cross-page search.
    pub fn load(path: &Path) -> Result<CrossPageIndex, LoadError> {
        let json = fs::read_to_string(path)
            .map_err(|source| LoadError::Read { path: path.display().to_string(), source })?;
        CrossPageIndex::from_json(&json)
    }
}

/// Why the cross-page index could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The index resource could not be read.
    Read { path: String, source: std::io::Error },
    /// The index resource is not valid JSON for the expected schema.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read search index '{}': {}", path, source)
            }
            LoadError::Parse(source) => write!(f, "invalid search index JSON: {}", source),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Parse(source) => Some(source),
        }
    }
}

/// Derive the current page id from a location path.
///
/// The last path segment names the page; an empty segment (site root) means
/// the landing page.
pub fn page_id_from_path(path: &str) -> String {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page.to_string(),
        _ => "index.html".to_string(),
    }
}
