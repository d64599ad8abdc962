// src/services/pages.rs

//! Listing page scraper service.
//!
//! Fetches listing pages one at a time and turns each into a [`Page`].

use chrono::Utc;

use crate::error::{AppError, PartialScrape, Result};
use crate::models::{HttpConfig, Page};
use crate::utils::http::{DocumentSource, HttpSource};

use super::rows::extract_posts;

/// Listing URL without its page number.
pub const LISTING_URL: &str = "https://news.ycombinator.com/news?p=";

/// URL of listing page `page_number`.
pub fn listing_url(page_number: u32) -> String {
    format!("{LISTING_URL}{page_number}")
}

/// Service for scraping listing pages from a document source.
pub struct PageScraper<S = HttpSource> {
    source: S,
}

impl PageScraper<HttpSource> {
    /// Create a scraper that fetches over HTTP.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Ok(Self::new(HttpSource::from_config(config)?))
    }
}

impl<S: DocumentSource> PageScraper<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scrape a single page. Use `1` for the front page.
    ///
    /// Fetch errors are returned unchanged; any row that cannot be extracted
    /// fails the whole page.
    pub fn scrape_page(&self, page_number: u32) -> Result<Page> {
        if page_number < 1 {
            return Err(AppError::invalid_input(
                "page number must be a positive integer",
            ));
        }

        let url = listing_url(page_number);
        log::debug!("Fetching page {} from {}", page_number, url);

        let fetched = self.source.fetch(&url);
        let retrieved_at = Utc::now();
        let document = fetched?;

        let posts = extract_posts(&document.root_element())?;
        log::debug!("Extracted {} posts from page {}", posts.len(), page_number);

        Ok(Page {
            posts,
            number: page_number,
            retrieved_at,
        })
    }

    /// Scrape pages `start..=end` in ascending order, one request at a time.
    ///
    /// Stops at the first failing page. The pages fetched before it are
    /// returned inside the error.
    pub fn scrape_pages(
        &self,
        start: u32,
        end: u32,
    ) -> std::result::Result<Vec<Page>, PartialScrape> {
        if start < 1 || end < 1 {
            return Err(PartialScrape::empty(AppError::invalid_input(
                "page numbers must be positive integers",
            )));
        }
        if start > end {
            return Err(PartialScrape::empty(AppError::invalid_input(
                "starting page number cannot be larger than ending page number",
            )));
        }

        let mut pages = Vec::new();
        for page_number in start..=end {
            match self.scrape_page(page_number) {
                Ok(page) => pages.push(page),
                Err(error) => return Err(PartialScrape { pages, error }),
            }
        }
        Ok(pages)
    }
}
