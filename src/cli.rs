// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// site-mapper does one thing, so there are no subcommands: a single
// positional URL plus a couple of flags.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version = "0.1.0",
    about = "Maps a website's internal link graph and per-page assets",
    long_about = "site-mapper crawls a single website starting from its domain root, \
                  discovers every internally-reachable page, and reports each page's \
                  internal links and referenced static assets (CSS, JS, images)."
)]
pub struct Cli {
    /// The domain root to crawl (e.g., https://example.com)
    ///
    /// Must be a bare domain root - deep links like
    /// https://example.com/docs are rejected before crawling starts
    pub url: String,

    /// Output the site graph as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Per-request fetch timeout in milliseconds
    ///
    /// Applied uniformly to every page fetch in the crawl
    #[arg(long, default_value_t = 5000)]
    pub timeout_ms: u64,
}
