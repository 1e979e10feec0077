// src/crawler/mod.rs
// =============================================================================
// This module contains the crawl engine and its collaborators.
//
// Submodules:
// - fetch: retrieves a URL over HTTP and parses it into a document
// - scrape: extracts internal links and asset references from a document
// - engine: drives the traversal, dedups pages, assembles the Site
//
// The engine is generic over the DocumentFetcher trait, which is the seam
// that lets tests run the whole traversal against canned documents without
// touching the network.
//
// Rust concepts:
// - Traits: Define capabilities (like interfaces in other languages)
// - Generics: The engine works with any fetcher implementation
// =============================================================================

mod engine;
mod fetch;
mod scrape;

// Re-export public items from submodules
pub use engine::{CrawlError, Crawler};
pub use fetch::{DocumentFetcher, FetchError, HttpFetcher};
