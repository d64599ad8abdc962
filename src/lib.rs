// src/lib.rs

//! hn-scraper Library
//!
//! Fetches Hacker News listing pages and extracts their posts from the
//! served HTML.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, PartialScrape, Result};
pub use models::{Config, HttpConfig, Page, Post};
pub use services::PageScraper;

/// Scrape a single listing page using the default HTTP settings.
///
/// Use `1` for the front page.
pub fn scrape_page(page_number: u32) -> Result<Page> {
    PageScraper::from_config(&HttpConfig::default())?.scrape_page(page_number)
}

/// Scrape every page from `start` to `end`, inclusive, using the default
/// HTTP settings.
///
/// On failure the pages fetched before the failing one are returned inside
/// the [`PartialScrape`] error.
pub fn scrape_pages(start: u32, end: u32) -> std::result::Result<Vec<Page>, PartialScrape> {
    let scraper = PageScraper::from_config(&HttpConfig::default()).map_err(PartialScrape::empty)?;
    scraper.scrape_pages(start, end)
}
