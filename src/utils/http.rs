// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::Result;
use crate::models::HttpConfig;

/// Anything that can turn a URL into a parsed HTML document.
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> Result<Html>;
}

/// Create a configured HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?)
}

/// Fetch a page and return the HTML document.
///
/// Non-success status codes are reported as errors.
pub fn fetch_page(client: &Client, url: &str) -> Result<Html> {
    let response = client.get(url).send()?.error_for_status()?;
    let text = response.text()?;
    Ok(Html::parse_document(&text))
}

/// Blocking HTTP document source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a source with a client configured from `config`.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Html> {
        fetch_page(&self.client, url)
    }
}
