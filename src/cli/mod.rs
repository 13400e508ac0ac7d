// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lupa command-line interface.
//!
//! Two subcommands: `search` runs a query the way the widget would (index a
//! page document, load the cross-page index and translation table, print the
//! suggestions), and `inspect` dumps the structure of a cross-page index
//! file. Both exist for authoring and debugging the static site's search
//! data, not for serving visitors.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lupa",
    about = "In-page and cross-page search for small multilingual static sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against a page document and the cross-page index
    Search {
        /// Page document (JSON page tree) standing in for the rendered page
        #[arg(short, long)]
        page: PathBuf,

        /// Cross-page index JSON; searching degrades gracefully without it
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// Translation table JSON for the active locale
        #[arg(short, long)]
        translations: PathBuf,

        /// Page id of the current page (defaults to the page file name)
        #[arg(long)]
        page_id: Option<String>,

        /// Search query
        query: String,
    },

    /// Inspect a cross-page index file
    Inspect {
        /// Cross-page index JSON
        file: PathBuf,
    },
}
