//! Invariants that hold for arbitrary inputs: normalization laws, truncation
//! caps, the minimum-length gate, and snippet window bounds.

use proptest::prelude::*;

use crate::common;
use lupa::dom::Node;
use lupa::indexer::index_page;
use lupa::search::{search, snippet_around, MAX_CURRENT_PAGE_MATCHES, MAX_MATCHES_PER_PAGE};
use lupa::text::normalize;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like Spanish-flavored strings, accents included.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-záéíóúñü]{2,8}").unwrap()
}

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..8).prop_map(|words| words.join(" "))
}

/// A page whose main region carries arbitrarily many paragraphs.
fn page_strategy() -> impl Strategy<Value = Node> {
    prop::collection::vec(sentence_strategy(), 0..12).prop_map(|sentences| {
        let children = sentences
            .iter()
            .map(|s| Node::text_node("p", s))
            .collect();
        Node::element("main", children)
    })
}

// ============================================================================
// NORMALIZATION
// ============================================================================

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,80}") {
        let once = normalize(&s);
        prop_assert_eq!(&normalize(&once), &once);
    }

    #[test]
    fn normalize_output_is_lowercase_and_trimmed(s in "\\PC{0,80}") {
        let n = normalize(&s);
        prop_assert_eq!(&n, n.trim());
        // A fixed point of to_lowercase, not "no uppercase chars": code
        // points with no lowercase mapping (U+1D540 and friends) pass
        // through normalize unchanged and still report is_uppercase().
        prop_assert_eq!(&n, &n.to_lowercase());
    }

    #[test]
    fn normalize_strips_the_combining_marks_block(s in "\\PC{0,80}") {
        let n = normalize(&s);
        // Bound first: the range literal's braces would break the macro's
        // stringified condition message.
        let clean = !n.chars().any(|c| ('\u{0300}'..='\u{036F}').contains(&c));
        prop_assert!(clean);
    }
}

// ============================================================================
// QUERY ENGINE INVARIANTS
// ============================================================================

proptest! {
    #[test]
    fn truncation_caps_always_hold(mut page in page_strategy(), query in word_strategy()) {
        let items = index_page(&mut page);
        let results = search(
            &query,
            &items,
            Some(&common::site_index()),
            &common::translations_es(),
            "index.html",
        );
        prop_assert!(results.current_page.len() <= MAX_CURRENT_PAGE_MATCHES);
        for page_matches in &results.other_pages {
            prop_assert!(!page_matches.matches.is_empty());
            prop_assert!(page_matches.matches.len() <= MAX_MATCHES_PER_PAGE);
        }
    }

    #[test]
    fn short_queries_always_yield_nothing(mut page in page_strategy(), c in proptest::char::any()) {
        let items = index_page(&mut page);
        let single = c.to_string();
        for q in ["", " ", single.as_str()] {
            if normalize(q).chars().count() >= 2 {
                // A rare decomposing character can pass the gate; skip it.
                continue;
            }
            let results = search(
                q,
                &items,
                Some(&common::site_index()),
                &common::translations_es(),
                "index.html",
            );
            prop_assert!(results.is_empty());
        }
    }

    #[test]
    fn in_page_matches_preserve_document_order(mut page in page_strategy(), query in word_strategy()) {
        let items = index_page(&mut page);
        let results = search(&query, &items, None, &common::translations_es(), "x");
        let positions: Vec<usize> = results
            .current_page
            .iter()
            .map(|m| items.iter().position(|i| i == m).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_returned_item_actually_contains_the_query(
        mut page in page_strategy(),
        query in word_strategy(),
    ) {
        let items = index_page(&mut page);
        let normalized_query = normalize(&query);
        let results = search(&query, &items, None, &common::translations_es(), "x");
        for item in &results.current_page {
            prop_assert!(item.normalized_text.contains(&normalized_query));
        }
    }
}

// ============================================================================
// SNIPPET WINDOW BOUNDS
// ============================================================================

proptest! {
    #[test]
    fn snippet_never_exceeds_window_plus_markers(
        text in sentence_strategy(),
        query in word_strategy(),
    ) {
        let normalized = normalize(&text);
        let normalized_query = normalize(&query);
        prop_assume!(normalized_query.chars().count() >= 2);
        if let Some(snippet) = snippet_around(&text, &normalized, &normalized_query) {
            // Window is at most 20 + |query| + 40, plus two 3-char markers.
            let max = 20 + normalized_query.chars().count() + 40 + 6;
            prop_assert!(snippet.chars().count() <= max);
        }
    }

    #[test]
    fn snippet_of_matching_text_is_some(words in prop::collection::vec(word_strategy(), 1..6)) {
        let text = words.join(" ");
        let normalized = normalize(&text);
        // The first word is guaranteed to occur.
        let query = normalize(&words[0]);
        prop_assert!(snippet_around(&text, &normalized, &query).is_some());
    }
}
