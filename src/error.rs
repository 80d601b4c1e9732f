use thiserror::Error;

/// Errors that can occur during a scrape run
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to retrieve a document over HTTP
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
