// src/domain/mod.rs
// =============================================================================
// This module contains the crawl result data model.
//
// Submodules:
// - page: a single crawled page (its URL, links, and assets)
// - site: the final crawl output (domain root + set of pages)
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod page;
mod site;

// Re-export public items from submodules
// This lets users write `domain::Page` instead of `domain::page::Page`
pub use page::{Page, PageDetails};
pub use site::Site;
