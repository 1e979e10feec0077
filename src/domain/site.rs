// src/domain/site.rs
// =============================================================================
// The final output of a crawl: the domain root plus every page reached.
//
// Site is a terminal value - the engine builds it once, returns it, and
// nothing mutates it afterwards. Equality is structural (same domain, same
// page set) so tests can compare whole crawl results directly.
// =============================================================================

use super::Page;
use serde::Serialize;
use std::collections::HashSet;
use url::Url;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Site {
    domain: Url,
    pages: HashSet<Page>,
}

impl Site {
    pub fn new(domain: Url, pages: HashSet<Page>) -> Self {
        Self { domain, pages }
    }

    /// The domain root the crawl started from
    pub fn domain(&self) -> &Url {
        &self.domain
    }

    /// Every page reached from the domain root, home page included
    pub fn pages(&self) -> &HashSet<Page> {
        &self.pages
    }
}
