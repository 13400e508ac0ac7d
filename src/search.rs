// SPDX-License-Identifier: Apache-2.0

//! The query engine: in-page filtering, cross-page scanning, snippets.
//!
//! Matching is plain substring containment over normalized text: no word
//! boundaries, no stemming, no typo tolerance. "Ranking" is position found:
//! in-page matches keep document order, cross-page matches keep index order.
//! Both lists are hard-capped, and the caps are contracts:
//! [`MAX_CURRENT_PAGE_MATCHES`] and [`MAX_MATCHES_PER_PAGE`].
//!
//! # Offsets are characters
//!
//! Matches are found on normalized text but snippet windows are cut from the
//! raw text, and diacritic stripping changes string length. All window
//! arithmetic therefore runs on character counts, with the match index
//! clamped to the raw text's length.

use tracing::debug;

use crate::i18n::Translations;
use crate::site::CrossPageIndex;
use crate::text::{char_len, normalize};
use crate::types::{IndexedItem, PageMatches, SearchResultSet, SectionMatch};

/// Queries below this normalized length never search (noise gate).
pub const MIN_QUERY_LEN: usize = 2;
/// In-page result cap: first matches in document order.
pub const MAX_CURRENT_PAGE_MATCHES: usize = 3;
/// Cross-page result cap, applied per page after collecting all its sections.
pub const MAX_MATCHES_PER_PAGE: usize = 4;

/// Snippet window: characters of raw text kept before the match...
const SNIPPET_BEFORE: usize = 20;
/// ...and after it (beyond the query itself).
const SNIPPET_AFTER: usize = 40;

/// Run one query against both indexes.
///
/// `site` is `None` when the cross-page index failed to load; the result then
/// carries in-page matches only. The result set is ephemeral; callers
/// discard it on the next keystroke or re-index.
pub fn search(
    raw_query: &str,
    items: &[IndexedItem],
    site: Option<&CrossPageIndex>,
    translations: &Translations,
    current_page: &str,
) -> SearchResultSet {
    let query = normalize(raw_query);
    if char_len(&query) < MIN_QUERY_LEN {
        return SearchResultSet::default();
    }

    let current_page_matches: Vec<IndexedItem> = items
        .iter()
        .filter(|item| item.normalized_text.contains(&query))
        .take(MAX_CURRENT_PAGE_MATCHES)
        .cloned()
        .collect();

    let other_pages = site
        .map(|index| search_other_pages(index, &query, translations, current_page))
        .unwrap_or_default();

    debug!(
        query = %query,
        current = current_page_matches.len(),
        pages = other_pages.len(),
        "search complete"
    );

    SearchResultSet {
        current_page: current_page_matches,
        other_pages,
    }
}

/// Scan every other page of the cross-page index for the normalized query.
fn search_other_pages(
    index: &CrossPageIndex,
    query: &str,
    translations: &Translations,
    current_page: &str,
) -> Vec<PageMatches> {
    let mut results = Vec::new();

    for (page, entry) in &index.pages {
        if page == current_page {
            continue;
        }

        // Collect across ALL sections first, then cap. Early sections fill
        // the cap first; a per-section cap would change which matches survive.
        let mut matches = Vec::new();
        for section in &entry.sections {
            for key in &section.keys {
                let text = translations.resolve(key);
                if text.is_empty() {
                    // Unresolved keys never match.
                    continue;
                }
                let normalized = normalize(text);
                if let Some(snippet) = snippet_around(text, &normalized, query) {
                    matches.push(SectionMatch {
                        text: snippet,
                        context: translations.resolve(&section.title).to_string(),
                        id: section.id.clone(),
                    });
                }
            }
        }

        if !matches.is_empty() {
            matches.truncate(MAX_MATCHES_PER_PAGE);
            results.push(PageMatches {
                page: page.clone(),
                title: translations.resolve(&entry.title).to_string(),
                matches,
            });
        }
    }

    results
}

/// Cut a snippet window from `raw` around the first occurrence of `query` in
/// `normalized`. Returns `None` when the query does not occur.
///
/// The window is `[match - 20, match + query + 40)` in characters, clamped to
/// the raw text. `...` marks a window that does not reach the start or end.
pub fn snippet_around(raw: &str, normalized: &str, query: &str) -> Option<String> {
    let byte_index = normalized.find(query)?;
    let match_index = char_len(&normalized[..byte_index]);
    let raw_len = char_len(raw);

    let start = match_index.saturating_sub(SNIPPET_BEFORE).min(raw_len);
    let end = (match_index + char_len(query) + SNIPPET_AFTER).min(raw_len);

    let window: String = raw.chars().skip(start).take(end - start).collect();
    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&window);
    if end < raw_len {
        snippet.push_str("...");
    }
    Some(snippet)
}
