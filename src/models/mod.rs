// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the crate,
//! organized by their primary purpose.

mod config;
mod page;
mod post;
mod selectors;

// Re-export all public types
pub use config::{Config, HttpConfig, OutputConfig, OutputFormat};
pub use page::Page;
pub use post::{Post, SITE_ROOT};
pub use selectors::ListingSelectors;
