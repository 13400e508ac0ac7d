// SPDX-License-Identifier: Apache-2.0

//! Dynamic indexing of the current page.
//!
//! The indexer walks the page's `main` content region and captures every
//! heading (h2–h4), paragraph, list item, and inline span as an
//! [`IndexedItem`]: anchor id, trimmed raw text, and the normalized form all
//! matching runs against. Elements outside `main` are never indexed.
//!
//! Indexing is wholesale: the caller discards the previous result whenever
//! the displayed text changes (page load, locale switch). Identifiers written
//! back onto the tree persist across passes, so an element that got an id in
//! one pass keeps it in the next.

use std::collections::HashSet;

use crate::dom::Node;
use crate::text::normalize;
use crate::types::IndexedItem;

/// Tags captured by the indexer, in the order the page presents them.
const INDEXED_TAGS: [&str; 6] = ["h2", "h3", "h4", "p", "li", "span"];

/// Tags whose id an anchorless element inherits.
const ENCLOSING_TAGS: [&str; 2] = ["section", "article"];

/// Allocates anchor ids for elements that have none.
///
/// Deterministic and collision-checked: a monotonic counter scoped to the
/// indexing pass, skipping any id already present in the tree. Generated ids
/// are nine characters ("s-0000001"), alphanumeric plus the `s-` prefix, so
/// they are valid URL fragments.
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
    taken: HashSet<String>,
}

impl IdAllocator {
    /// Seed the allocator with every id already present in the tree.
    pub fn for_tree(root: &Node) -> IdAllocator {
        let mut ids = Vec::new();
        root.collect_ids(&mut ids);
        IdAllocator {
            next: 0,
            taken: ids.into_iter().collect(),
        }
    }

    /// Next free generated id.
    pub fn allocate(&mut self) -> String {
        loop {
            self.next += 1;
            let id = format!("s-{:07}", self.next);
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Index the page's main content region.
///
/// Returns items in document order. A page without a `main` region (or an
/// empty one) indexes to nothing; the widget then simply has no in-page
/// results, per the failure-degradation contract.
pub fn index_page(root: &mut Node) -> Vec<IndexedItem> {
    let mut allocator = IdAllocator::for_tree(root);
    let Some(main) = root.find_mut("main") else {
        return Vec::new();
    };
    let mut items = Vec::new();
    walk(main, None, &mut allocator, &mut items);
    items
}

fn walk(
    node: &mut Node,
    enclosing: Option<String>,
    allocator: &mut IdAllocator,
    items: &mut Vec<IndexedItem>,
) {
    if INDEXED_TAGS.contains(&node.tag.as_str()) {
        let id = match (&node.id, &enclosing) {
            (Some(own), _) => own.clone(),
            (None, Some(section)) => section.clone(),
            (None, None) => {
                let id = allocator.allocate();
                node.id = Some(id.clone());
                id
            }
        };
        let text = node.text_content().trim().to_string();
        let normalized_text = normalize(&text);
        items.push(IndexedItem { id, text, normalized_text });
    }

    // The NEAREST section/article wins, even one without an id: an anchorless
    // section shadows an outer anchored one, and its children get generated ids.
    let next_enclosing = if ENCLOSING_TAGS.contains(&node.tag.as_str()) {
        node.id.clone()
    } else {
        enclosing
    };
    for child in &mut node.children {
        walk(child, next_enclosing.clone(), allocator, items);
    }
}
