// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search widget.
//!
//! Two indexes feed every query: the in-page index (rebuilt wholesale each
//! time the displayed text changes) and the cross-page index (a static
//! snapshot loaded once per session, see [`crate::site`]). A query produces a
//! [`SearchResultSet`], which is ephemeral: discarded and rebuilt on every
//! keystroke or re-index.
//!
//! # Invariants
//!
//! - **IndexedItem**: `normalized_text == normalize(text)` at all times. The
//!   normalized form is cached alongside its source, never stored on its own.
//! - **SearchResultSet**: `current_page.len() <= 3` and every
//!   `other_pages[i].matches.len()` is in `1..=4`. The truncation counts are
//!   exact contracts, enforced in [`crate::search`].

use serde::{Deserialize, Serialize};

/// One text-bearing element of the current page, captured at indexing time.
///
/// The `id` is stable for the session: an element keeps its own identifier if
/// it has one, inherits the nearest enclosing section's, or gets a freshly
/// allocated one written back onto the page tree so local navigation can
/// target it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedItem {
    pub id: String,
    /// Trimmed source text, as displayed.
    pub text: String,
    /// Cached `normalize(text)`; all matching runs against this.
    pub normalized_text: String,
}

/// A single cross-page match: a snippet of localized text plus where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMatch {
    /// Snippet window around the first match, with `...` markers when the
    /// window does not reach the start or end of the source text.
    pub text: String,
    /// Resolved title of the owning section.
    pub context: String,
    /// Anchor id of the owning section on the target page.
    pub id: String,
}

/// All matches found on one other page, capped at four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMatches {
    /// Page identifier, e.g. `"ayuda.html"`.
    pub page: String,
    /// Resolved page title in the active locale.
    pub title: String,
    pub matches: Vec<SectionMatch>,
}

/// What one query produced, across both sources.
///
/// In-page matches keep document order; cross-page matches keep the index's
/// page order. A set where both collections are empty means "no results"
/// (which still renders a notice); a query below the minimum length instead
/// produces no panel at all, which callers detect before searching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSet {
    pub current_page: Vec<IndexedItem>,
    pub other_pages: Vec<PageMatches>,
}

impl SearchResultSet {
    /// True when neither source produced a match.
    pub fn is_empty(&self) -> bool {
        self.current_page.is_empty() && self.other_pages.is_empty()
    }

    /// Total number of entries a renderer would materialize.
    pub fn len(&self) -> usize {
        self.current_page.len() + self.other_pages.iter().map(|p| p.matches.len()).sum::<usize>()
    }
}
