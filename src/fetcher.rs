use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::ScrapeError;

/// Fetch-and-parse boundary: retrieve a URL and return a navigable document.
///
/// This is the pipeline's only I/O seam; tests substitute stub
/// implementations serving canned documents.
pub trait DocumentFetcher {
    fn fetch(&self, url: &str) -> Result<Html, ScrapeError>;
}

/// Blocking HTTP fetcher backed by reqwest.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        // Some recipe sites reject reqwest's default user agent
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html, ScrapeError> {
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| ScrapeError::Fetch {
                url: url.to_string(),
                source,
            })?;

        Ok(Html::parse_document(&body))
    }
}
