//! Recipe-index scraping for supported origin sites.
//!
//! The pipeline is a lazy stream: index page → category pages → one detail
//! fetch per recipe, each triggered only when the consumer pulls the next
//! record. One fetch is in flight at a time; there is no retry, caching, or
//! rate limiting at this layer.

pub mod error;
pub mod fetcher;
pub mod model;
pub mod sources;

pub use error::ScrapeError;
pub use fetcher::{DocumentFetcher, HttpFetcher};
pub use model::{Recipe, Source};
pub use sources::{AnonymousScraper, Recipes};

/// Scrape every recipe from the anonymous index with the default HTTP
/// fetcher. The stream yields `Err` and ends on the first fetch failure.
pub fn fetch_recipes() -> Result<Recipes<HttpFetcher>, ScrapeError> {
    Ok(AnonymousScraper::new()?.recipes())
}
