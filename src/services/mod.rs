//! Service layer for the scraper.
//!
//! This module contains the extraction logic:
//! - Page fetching (`PageScraper`)
//! - Post row grouping and extraction (`rows`)
//! - Single-field extractors (`fields`)

pub mod fields;
mod pages;
pub mod rows;

#[cfg(test)]
pub(crate) mod testing;

pub use pages::{LISTING_URL, PageScraper, listing_url};
pub use rows::{PostRows, extract_post, extract_posts, post_row_groups};
