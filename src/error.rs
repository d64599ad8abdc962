// src/error.rs

//! Unified error handling for the scraper.

use std::fmt;

use thiserror::Error;

use crate::models::Page;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Message carried by every markup mismatch.
pub const UNEXPECTED_FORMAT_MSG: &str = "could not process: page formatted unexpectedly";

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Page number or page range rejected before any request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed or returned a non-success status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Listing markup did not have the expected shape
    #[error("{}", UNEXPECTED_FORMAT_MSG)]
    UnexpectedFormat,

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// A multi-page scrape that stopped early.
///
/// `pages` holds every page fetched before `error` occurred, in page order.
/// Callers that can use incomplete results read them from here.
#[derive(Error, Debug)]
#[error("scraped {count} page(s) before failing: {error}", count = .pages.len())]
pub struct PartialScrape {
    pub pages: Vec<Page>,
    #[source]
    pub error: AppError,
}

impl PartialScrape {
    /// Failure before any page was fetched.
    pub fn empty(error: AppError) -> Self {
        Self {
            pages: Vec::new(),
            error,
        }
    }

    /// Split into the partial pages and the error that stopped the scrape.
    pub fn into_parts(self) -> (Vec<Page>, AppError) {
        (self.pages, self.error)
    }
}

impl From<PartialScrape> for AppError {
    fn from(partial: PartialScrape) -> Self {
        partial.error
    }
}
