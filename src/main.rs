// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the crawl engine with an HTTP fetcher
// 3. Crawl the domain and collect the Site
// 4. Print the result as a table or JSON
// 5. Exit with proper code (0 = success, 1 = crawl failed)
//
// Everything interesting lives in the crawler and domain modules; this file
// is just the collaborator that hands a URL to the engine and prints what
// comes back.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawler; // src/crawler/ - crawl engine, fetcher, extractor
mod domain; // src/domain/ - Page, PageDetails, Site

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawler::{Crawler, HttpFetcher};
use domain::Site;
use std::time::Duration;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // RUST_LOG=debug site-mapper ... shows per-page crawl progress
    env_logger::init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Print the full error chain (e.g., "crawl failed: timed out
            // fetching https://...") and exit non-zero
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    println!("🔍 Crawling domain: {}", cli.url);

    let fetcher = HttpFetcher::new(Duration::from_millis(cli.timeout_ms))
        .context("failed to set up the HTTP fetcher")?;
    let crawler = Crawler::new(fetcher);

    let site = crawler
        .crawl_domain(&cli.url)
        .await
        .context("crawl failed")?;

    print_site(&site, cli.json)?;
    Ok(())
}

// Prints the site either as a table or JSON
fn print_site(site: &Site, json: bool) -> Result<()> {
    if json {
        // Serialize the whole site graph and print
        let json_output = serde_json::to_string_pretty(site)?;
        println!("{}", json_output);
    } else {
        print_report(site);
    }
    Ok(())
}

// Prints a human-readable per-page report
//
// Page and entry order inside the Site are unordered sets, so everything
// is sorted here for stable, readable output.
fn print_report(site: &Site) {
    let mut pages: Vec<_> = site.pages().iter().collect();
    pages.sort_by_key(|page| page.url().as_str());

    let mut total_links = 0;
    let mut total_assets = 0;

    for page in &pages {
        println!("\n📄 {}", page.url());

        let mut links: Vec<_> = page.details().links().iter().collect();
        links.sort();
        println!("   Links ({}):", links.len());
        for link in &links {
            println!("     {}", link);
        }

        let mut assets: Vec<_> = page.details().assets().iter().collect();
        assets.sort();
        println!("   Assets ({}):", assets.len());
        for asset in &assets {
            println!("     {}", asset);
        }

        total_links += links.len();
        total_assets += assets.len();
    }

    println!("\n📊 Summary for {}:", site.domain());
    println!("   📄 Pages: {}", pages.len());
    println!("   🔗 Links: {}", total_links);
    println!("   🎨 Assets: {}", total_assets);
}
