// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the lupa CLI.
//!
//! Plain ANSI styling, nothing fancy: suggestion rows the way the widget
//! would render them, dimmed source labels, a bold section context. Respects
//! `NO_COLOR` and turns itself off when stdout is not a TTY.

use std::sync::OnceLock;

use lupa::render::{SuggestionPanel, Target};
use lupa::site::CrossPageIndex;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

static COLOR: OnceLock<bool> = OnceLock::new();

fn color_enabled() -> bool {
    *COLOR.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

fn paint(style: &str, text: &str) -> String {
    if color_enabled() {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// Print a panel the way the widget would show it.
pub fn print_panel(panel: &SuggestionPanel) {
    if let Some(notice) = &panel.notice {
        let notice = if notice.is_empty() { "(no results)" } else { notice };
        println!("{}", paint(DIM, notice));
        return;
    }

    for entry in &panel.entries {
        let href = entry.target.href();
        let marker = match entry.target {
            Target::Local { .. } => "•",
            Target::Remote { .. } => "→",
        };
        match &entry.context {
            Some(context) => println!(
                "{} {} {}  {}  {}",
                paint(CYAN, marker),
                paint(BOLD, context),
                entry.text,
                paint(DIM, &entry.source),
                paint(DIM, &href),
            ),
            None => println!(
                "{} {}  {}  {}",
                paint(CYAN, marker),
                entry.text,
                paint(DIM, &entry.source),
                paint(DIM, &href),
            ),
        }
    }
}

/// Print the page/section/key structure of a cross-page index.
pub fn print_index(index: &CrossPageIndex) {
    println!("{} pages", index.pages.len());
    for (page, entry) in &index.pages {
        println!("{} {}", paint(BOLD, page), paint(DIM, &format!("(title: {})", entry.title)));
        for section in &entry.sections {
            println!(
                "  #{} {} ({} keys)",
                section.id,
                paint(DIM, &section.title),
                section.keys.len()
            );
        }
    }
}
