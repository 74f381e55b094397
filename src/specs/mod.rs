// src/specs/mod.rs
//! # Page specs
//!
//! Pure HTML extraction, one module per remote page. A spec knows where the
//! data lives in the markup and turns it into typed rows; it never fetches,
//! caches or writes. Each spec is tested offline against a captured fixture.
//!
//! ```text
//! runner → scrape::collect_drafts → PageSource::fetch → specs::draft::parse_draft_page
//! ```
pub mod draft;
