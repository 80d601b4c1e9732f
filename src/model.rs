use std::fmt;

use serde::Serialize;

/// Origin site a record was scraped from, for multi-site aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    Anonymous,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Anonymous => write!(f, "ANONYMOUS"),
        }
    }
}

/// One scraped recipe listing.
///
/// `ingredients` and `thumbnail` are always strings, possibly empty, so
/// downstream consumers never branch on presence. `url` stays site-relative
/// exactly as discovered on the category page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub url: String,
    pub ingredients: String,
    pub thumbnail: String,
    pub source: Source,
}
