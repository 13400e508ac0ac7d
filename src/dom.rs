// SPDX-License-Identifier: Apache-2.0

//! A minimal owned page tree: the markup contract at the widget boundary.
//!
//! The widget never talks to a real DOM. Hosts hand it a [`Node`] tree
//! describing the rendered page (tag, optional id, text, children) and the
//! indexer walks it, writing generated identifiers back onto nodes that need
//! an anchor. The tree round-trips through JSON with the same tolerant schema
//! as the rest of the crate: absent fields default to empty.

use serde::{Deserialize, Serialize};

/// One element of the page tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Element tag, lowercase (`"main"`, `"h2"`, `"p"`, ...).
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text carried directly by this element (not its descendants).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Build a node with children, no text of its own.
    pub fn element(tag: &str, children: Vec<Node>) -> Node {
        Node {
            tag: tag.to_string(),
            children,
            ..Node::default()
        }
    }

    /// Build a leaf node carrying text.
    pub fn text_node(tag: &str, text: &str) -> Node {
        Node {
            tag: tag.to_string(),
            text: text.to_string(),
            ..Node::default()
        }
    }

    /// Attach an id (builder style).
    pub fn with_id(mut self, id: &str) -> Node {
        self.id = Some(id.to_string());
        self
    }

    /// First node with the given tag, depth-first, including self.
    pub fn find(&self, tag: &str) -> Option<&Node> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Mutable version of [`Node::find`].
    pub fn find_mut(&mut self, tag: &str) -> Option<&mut Node> {
        if self.tag == tag {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_mut(tag) {
                return Some(found);
            }
        }
        None
    }

    /// First node with the given id, depth-first.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Concatenated text of this node and all descendants, in document order.
    ///
    /// Pieces are joined with a single space; normalization trims the result
    /// anyway, so the exact join character never reaches a comparison.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if !self.text.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Every id present in the tree, in document order.
    pub fn collect_ids(&self, out: &mut Vec<String>) {
        if let Some(id) = &self.id {
            out.push(id.clone());
        }
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}
