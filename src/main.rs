use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lupa::dom::Node;
use lupa::i18n::Translations;
use lupa::indexer::index_page;
use lupa::render::render;
use lupa::search::search;
use lupa::site::{page_id_from_path, CrossPageIndex};

mod cli;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Search {
            page,
            index,
            translations,
            page_id,
            query,
        } => run_search(&page, index.as_deref(), &translations, page_id, &query),
        Commands::Inspect { file } => run_inspect(&file),
    }
}

fn run_search(
    page_path: &Path,
    index_path: Option<&Path>,
    translations_path: &Path,
    page_id: Option<String>,
    query: &str,
) -> anyhow::Result<()> {
    let translations: Translations = read_json(translations_path)
        .with_context(|| format!("loading translations from {}", translations_path.display()))?;

    let mut page: Node = read_json(page_path)
        .with_context(|| format!("loading page document from {}", page_path.display()))?;
    if page.find("main").is_none() {
        tracing::warn!("page document has no main content region; nothing to index");
    }

    // Index load failure degrades to in-page-only search, same as the widget.
    let site = match index_path {
        Some(path) => match CrossPageIndex::load(path) {
            Ok(index) => Some(index),
            Err(err) => {
                tracing::warn!(%err, "cross-page index unavailable, searching current page only");
                None
            }
        },
        None => None,
    };

    let current_page =
        page_id.unwrap_or_else(|| page_id_from_path(&page_path.display().to_string()));

    let items = index_page(&mut page);
    let results = search(query, &items, site.as_ref(), &translations, &current_page);
    let panel = render(&results, &translations);
    cli::display::print_panel(&panel);
    Ok(())
}

fn run_inspect(file: &PathBuf) -> anyhow::Result<()> {
    let index = CrossPageIndex::load(file)
        .with_context(|| format!("loading index from {}", file.display()))?;
    cli::display::print_index(&index);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
