// src/domain/page.rs
// =============================================================================
// This module defines a single crawled page.
//
// A Page is identified by its canonical URL (scheme + host + path, with the
// query string and fragment already stripped by the extractor). Two Pages
// with the same URL are THE SAME page, even if their extracted content
// differs - identity lives in the URL, content is incidental.
//
// A PageDetails holds what we found on the page:
// - links: site-relative internal link paths, already normalized
// - assets: raw src/href values for CSS, JS, and images, kept verbatim
//
// Rust concepts:
// - Manual PartialEq/Hash impls: To control exactly what "equal" means
// - HashSet: Deduplicated, unordered collections
// - Ownership: A Page owns its PageDetails; nothing else can mutate them
// =============================================================================

use serde::Serialize;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use url::Url;

// The links and assets discovered on a single page
//
// Both collections use set semantics: duplicates found in the HTML collapse
// to one entry. Created once by the extractor and never modified after.
#[derive(Debug, Clone, Serialize)]
pub struct PageDetails {
    links: HashSet<String>,
    assets: HashSet<String>,
}

impl PageDetails {
    pub fn new(links: HashSet<String>, assets: HashSet<String>) -> Self {
        Self { links, assets }
    }

    /// The internal link paths found on the page (e.g., "/docs")
    pub fn links(&self) -> &HashSet<String> {
        &self.links
    }

    /// The asset references found on the page (e.g., "/style.css")
    pub fn assets(&self) -> &HashSet<String> {
        &self.assets
    }
}

// A single crawled page: its URL plus what was extracted from it
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    url: Url,
    details: PageDetails,
}

impl Page {
    pub fn new(url: Url, details: PageDetails) -> Self {
        Self { url, details }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn details(&self) -> &PageDetails {
        &self.details
    }
}

// Equality and hashing are defined by the URL string ALONE.
//
// This is the dedup key for the whole crawl: the engine asks "have I seen a
// Page with this URL?" and the answer must not depend on what content the
// page happened to carry. We implement this by hand instead of deriving so
// the key extraction is explicit and can't drift if fields are added.
impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.url.as_str() == other.url.as_str()
    }
}

impl Eq for Page {}

impl Hash for Page {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.as_str().hash(state);
    }
}
