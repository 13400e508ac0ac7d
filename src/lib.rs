// SPDX-License-Identifier: Apache-2.0

//! Client-side search for small multilingual static sites.
//!
//! Visitors get live suggestions from two sources as they type: the current
//! page, indexed on the fly, and a prebuilt cross-page index of translation
//! keys resolved through the active locale's table.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌─────────────┐    ┌──────────────┐    ┌───────────┐
//! │  dom.rs  │───▶│ indexer.rs  │───▶│  search.rs   │───▶│ render.rs │
//! │ (page    │    │ (IndexedItem│    │ (result sets,│    │ (panel    │
//! │  tree)   │    │  allocator) │    │  snippets)   │    │  model)   │
//! └──────────┘    └─────────────┘    └──────┬───────┘    └───────────┘
//!                   ▲                       │ reads             ▲
//!                   │       ┌───────────────┴───────┐           │
//!                   │       │ site.rs (cross-page)  │           │
//!                   │       │ i18n.rs (translations)│           │
//!                   │       └───────────────────────┘           │
//!                 ┌─┴────────────────────────────────────────────┴┐
//!                 │       widget.rs (lifecycle controller)        │
//!                 └───────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::rc::Rc;
//! use lupa::dom::Node;
//! use lupa::i18n::Translations;
//! use lupa::widget::{Host, SearchWidget};
//! # use lupa::render::SuggestionPanel;
//! # use std::time::Duration;
//! # struct Shell;
//! # impl Host for Shell {
//! #     fn show_panel(&mut self, _: &SuggestionPanel) {}
//! #     fn teardown_panel(&mut self) {}
//! #     fn scroll_into_view(&mut self, _: &str) {}
//! #     fn flash_focus(&mut self, _: &str, _: Duration) {}
//! #     fn navigate(&mut self, _: &str) {}
//! # }
//!
//! let page = Node::element("main", vec![Node::text_node("h2", "Bienvenido")]);
//! let translations = Rc::new(Translations::default());
//! let mut widget = SearchWidget::new(page, "index.html", None, translations, Shell);
//! widget.handle_input("bienvenido");
//! assert!(widget.panel().is_some());
//! ```
//!
//! Failure never crashes the page: a missing cross-page index, an unresolved
//! translation key, or a page without a content region all degrade to "fewer
//! or no results".

pub mod dom;
pub mod i18n;
pub mod indexer;
pub mod render;
pub mod search;
pub mod site;
pub mod text;
pub mod types;
pub mod widget;

// Re-exports for the common embedding path
pub use dom::Node;
pub use i18n::Translations;
pub use indexer::index_page;
pub use render::{render, SuggestionPanel};
pub use search::search;
pub use site::CrossPageIndex;
pub use text::normalize;
pub use types::{IndexedItem, PageMatches, SearchResultSet, SectionMatch};
pub use widget::{Host, SearchWidget, WidgetState};
