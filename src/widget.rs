// SPDX-License-Identifier: Apache-2.0

//! The lifecycle controller: one widget instance per page.
//!
//! [`SearchWidget`] owns the page tree, the in-page index, and the live
//! panel; the cross-page index and translation table are shared, read-only.
//! Everything runs synchronously inside the event handler that triggered it,
//! so a locale change always finishes its re-index/re-search/re-render before
//! the next keystroke is handled.
//!
//! # State machine
//!
//! ```text
//!          input (len >= 2)
//!   Idle ───────────────────▶ Suggesting ──┐ input (len >= 2)
//!    ▲                            │  ▲     │ locale change
//!    │  input (len < 2), Escape,  │  └─────┘ (re-render)
//!    │  outside click, local jump │
//!    └────────────────────────────┘
//! ```

use std::rc::Rc;
use std::time::Duration;

use tracing::warn;

use crate::dom::Node;
use crate::i18n::Translations;
use crate::indexer::index_page;
use crate::render::{render, SuggestionPanel, Target};
use crate::search::{search, MIN_QUERY_LEN};
use crate::site::CrossPageIndex;
use crate::text::{char_len, normalize};
use crate::types::IndexedItem;

/// How long a jumped-to element keeps its transient focus marker.
pub const FOCUS_MARKER_DURATION: Duration = Duration::from_secs(2);

/// Keyboard events the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Activates the first rendered suggestion, if any.
    Enter,
    /// Dismisses the panel.
    Escape,
}

/// Widget lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetState {
    /// No panel.
    #[default]
    Idle,
    /// Panel shown, with results or the no-results notice.
    Suggesting,
}

/// Side effects the widget asks its host to perform.
///
/// The host is whatever embeds the widget: a browser shell, a test harness.
/// All calls are synchronous; `teardown_panel` must be idempotent (it is
/// called even when no panel exists) and always precedes `show_panel`, so at
/// most one panel ever exists.
pub trait Host {
    /// Materialize the panel next to the search input.
    fn show_panel(&mut self, panel: &SuggestionPanel);
    /// Remove the panel, if one exists.
    fn teardown_panel(&mut self);
    /// Smooth-scroll the element with this id into view, centered.
    fn scroll_into_view(&mut self, id: &str);
    /// Apply a transient focus marker to the element for `duration`.
    fn flash_focus(&mut self, id: &str, duration: Duration);
    /// Ordinary navigation to another page (the page unloads).
    fn navigate(&mut self, href: &str);
}

/// The search widget: an explicit component instance, no ambient globals.
pub struct SearchWidget<H: Host> {
    page: Node,
    current_page: String,
    site: Option<Rc<CrossPageIndex>>,
    translations: Rc<Translations>,
    host: H,
    items: Vec<IndexedItem>,
    panel: Option<SuggestionPanel>,
    state: WidgetState,
    /// Raw query text as typed; re-run verbatim on locale change.
    query: String,
}

impl<H: Host> SearchWidget<H> {
    /// Construct the widget and index the page once.
    ///
    /// `site` is `None` when the cross-page index failed to load; the widget
    /// then serves in-page results only.
    pub fn new(
        page: Node,
        current_page: impl Into<String>,
        site: Option<Rc<CrossPageIndex>>,
        translations: Rc<Translations>,
        host: H,
    ) -> SearchWidget<H> {
        let mut page = page;
        let items = index_page(&mut page);
        if site.is_none() {
            warn!("no cross-page index; search degraded to in-page only");
        }
        SearchWidget {
            page,
            current_page: current_page.into(),
            site,
            translations,
            host,
            items,
            panel: None,
            state: WidgetState::Idle,
            query: String::new(),
        }
    }

    /// The visitor typed; `raw` is the input's full current value.
    pub fn handle_input(&mut self, raw: &str) {
        self.query = raw.to_string();
        if char_len(&normalize(raw)) < MIN_QUERY_LEN {
            self.dismiss();
            return;
        }
        self.run_search();
    }

    /// Enter or Escape inside the search input.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Enter => self.activate_first(),
            Key::Escape => self.dismiss(),
        }
    }

    /// A click landed outside the search form.
    pub fn handle_outside_click(&mut self) {
        if self.state == WidgetState::Suggesting {
            self.dismiss();
        }
    }

    /// The translation table was replaced and the page re-rendered.
    ///
    /// Re-indexes unconditionally; if a panel is up, re-runs the same raw
    /// query so snippets and labels reflect the new locale without retyping.
    pub fn handle_locale_change(&mut self, page: Node, translations: Rc<Translations>) {
        self.page = page;
        self.translations = translations;
        self.items = index_page(&mut self.page);
        if self.state == WidgetState::Suggesting {
            self.run_search();
        }
    }

    /// Activate the entry at `index`, as a click on it would.
    pub fn activate(&mut self, index: usize) {
        let Some(target) = self
            .panel
            .as_ref()
            .and_then(|panel| panel.entries.get(index))
            .map(|entry| entry.target.clone())
        else {
            return;
        };
        match target {
            Target::Local { id } => {
                // Default navigation is suppressed; jump and highlight instead.
                self.host.scroll_into_view(&id);
                self.host.flash_focus(&id, FOCUS_MARKER_DURATION);
                self.dismiss();
            }
            Target::Remote { .. } => {
                self.host.navigate(&target.href());
                self.dismiss();
            }
        }
    }

    /// Tear the widget down: the panel goes away, handlers deregister.
    pub fn detach(&mut self) {
        self.dismiss();
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// The live panel, if one is shown.
    pub fn panel(&self) -> Option<&SuggestionPanel> {
        self.panel.as_ref()
    }

    /// The current in-page index, in document order.
    pub fn items(&self) -> &[IndexedItem] {
        &self.items
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn run_search(&mut self) {
        let results = search(
            &self.query,
            &self.items,
            self.site.as_deref(),
            &self.translations,
            &self.current_page,
        );
        let panel = render(&results, &self.translations);
        self.host.teardown_panel();
        self.host.show_panel(&panel);
        self.panel = Some(panel);
        self.state = WidgetState::Suggesting;
    }

    fn activate_first(&mut self) {
        if self.panel.as_ref().is_some_and(|p| p.first().is_some()) {
            self.activate(0);
        }
    }

    fn dismiss(&mut self) {
        self.host.teardown_panel();
        self.panel = None;
        self.state = WidgetState::Idle;
    }
}
