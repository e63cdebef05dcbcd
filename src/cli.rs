//! CLI definitions for pagerect.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// pagerect CLI.
#[derive(Parser)]
#[command(name = "pagerect")]
#[command(about = "Measure element, viewport, window and frame geometry of a Chrome tab")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Remote debugging endpoint, overrides the config file
    #[arg(long, env = "PAGERECT_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which tab to measure.
#[derive(Args, Clone, Debug)]
pub(crate) struct TabArgs {
    /// Attach to this target id instead of the first page
    #[arg(long, conflicts_with = "url")]
    pub target: Option<String>,

    /// Open this URL in a new tab and wait for it to load
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List open tabs and their target ids
    Tabs,

    /// Window state, window and viewport placement, page size and scroll
    Window {
        #[command(flatten)]
        tab: TabArgs,
    },

    /// Corners and points of the first element matching a selector
    Element {
        /// CSS selector
        selector: String,

        #[command(flatten)]
        tab: TabArgs,
    },

    /// Geometry of an out-of-process iframe
    Frame {
        /// CSS selector of the <iframe> element
        selector: String,

        /// CSS selector of an element inside the frame to measure as well
        #[arg(long)]
        inner: Option<String>,

        #[command(flatten)]
        tab: TabArgs,
    },
}
