// SPDX-License-Identifier: Apache-2.0

//! The suggestion panel model.
//!
//! [`render`] turns a result set into a [`SuggestionPanel`]: a flat list of
//! activatable entries, or a localized no-results notice when nothing
//! matched. The panel is pure data; the host materializes it next to the
//! search input and tears it down again through [`crate::widget::Host`]. At
//! most one panel exists at a time; the widget always tears down before
//! showing a new one.

use crate::i18n::Translations;
use crate::types::SearchResultSet;

/// Display text is cut at this many characters (plus a `...` marker).
pub const DISPLAY_TEXT_MAX: usize = 60;

/// Where activating an entry takes the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Anchor on the current page: suppress navigation, smooth-scroll there.
    Local { id: String },
    /// Section of another page: ordinary navigation, the page unloads.
    Remote { page: String, id: String },
}

impl Target {
    /// The href the host should put on the entry's link.
    pub fn href(&self) -> String {
        match self {
            Target::Local { id } => format!("#{}", id),
            Target::Remote { page, id } => format!("{}#{}", page, id),
        }
    }
}

/// One activatable row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub target: Target,
    /// Truncated item text (in-page) or snippet (cross-page).
    pub text: String,
    /// Resolved section title, cross-page entries only.
    pub context: Option<String>,
    /// Small trailing label: "current page" or the owning page's title.
    pub source: String,
}

/// How assistive tech is told about panel changes.
///
/// The panel is always a polite live region: result updates are announced
/// without interrupting the visitor's typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Liveness {
    #[default]
    Polite,
}

/// The transient suggestion panel, anchored to the search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionPanel {
    pub live: Liveness,
    pub entries: Vec<SuggestionEntry>,
    /// Localized "no results" text; set only when `entries` is empty.
    pub notice: Option<String>,
}

impl SuggestionPanel {
    /// The entry Enter activates, if any.
    pub fn first(&self) -> Option<&SuggestionEntry> {
        self.entries.first()
    }
}

/// Materialize a result set into a panel.
///
/// In-page entries come first (labeled with the localized "current page"
/// string), then one entry per cross-page match, each showing its section
/// context and owning page title.
pub fn render(results: &SearchResultSet, translations: &Translations) -> SuggestionPanel {
    if results.is_empty() {
        return SuggestionPanel {
            live: Liveness::Polite,
            entries: Vec::new(),
            notice: Some(translations.resolve("search.noResults").to_string()),
        };
    }

    let current_page_label = translations.resolve("search.currentPage").to_string();
    let mut entries = Vec::with_capacity(results.len());

    for item in &results.current_page {
        entries.push(SuggestionEntry {
            target: Target::Local { id: item.id.clone() },
            text: truncate_display(&item.text),
            context: None,
            source: current_page_label.clone(),
        });
    }

    for page in &results.other_pages {
        for found in &page.matches {
            entries.push(SuggestionEntry {
                target: Target::Remote {
                    page: page.page.clone(),
                    id: found.id.clone(),
                },
                text: found.text.clone(),
                context: Some(found.context.clone()),
                source: page.title.clone(),
            });
        }
    }

    SuggestionPanel {
        live: Liveness::Polite,
        entries,
        notice: None,
    }
}

/// Cut display text at [`DISPLAY_TEXT_MAX`] characters.
fn truncate_display(text: &str) -> String {
    let mut out: String = text.chars().take(DISPLAY_TEXT_MAX).collect();
    if text.chars().count() > DISPLAY_TEXT_MAX {
        out.push_str("...");
    }
    out
}
