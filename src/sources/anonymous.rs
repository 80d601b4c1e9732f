//! Scraper for the anonymous vegetarian recipe index.
//!
//! Three stages, all driven lazily from the [`Recipes`] iterator: discover
//! category pages from the main index, enumerate recipe entries on each
//! category page, then fetch each recipe's detail page for ingredients and
//! thumbnail.

use std::collections::{HashSet, VecDeque};

use log::{debug, info, warn};
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::ScrapeError;
use crate::fetcher::{DocumentFetcher, HttpFetcher};
use crate::model::{Recipe, Source};

const MAIN_PAGE_URL: &str = "https://veg.anonymous.org.il/cat12.html";
const BASE_URL: &str = "https://veg.anonymous.org.il/";

/// Category hrefs look like `cat12.html`; matched as a search, so the
/// pattern may sit anywhere inside a longer href.
const CATEGORY_PATTERN: &str = r"cat[0-9]+\.html";

/// A recipe entry found on a category page, not yet fetched.
#[derive(Debug, Clone, PartialEq)]
struct RecipeLink {
    url: String,
    title: String,
}

pub struct AnonymousScraper<F = HttpFetcher> {
    fetcher: F,
    index_url: String,
    base_url: String,
}

impl AnonymousScraper<HttpFetcher> {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self::with_fetcher(HttpFetcher::new()?))
    }
}

impl<F: DocumentFetcher> AnonymousScraper<F> {
    /// Scraper against the real site with a custom fetcher.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self::with_endpoints(fetcher, MAIN_PAGE_URL, BASE_URL)
    }

    /// Scraper against arbitrary endpoints, for exercising the pipeline
    /// against a local server.
    pub fn with_endpoints(
        fetcher: F,
        index_url: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            index_url: index_url.into(),
            base_url: base_url.into(),
        }
    }

    /// Lazy stream of every recipe on the site.
    ///
    /// Nothing is fetched until the first element is pulled; each element
    /// triggers exactly the fetches needed to produce it. The first fetch
    /// failure is yielded as `Err` and ends the stream.
    pub fn recipes(self) -> Recipes<F> {
        Recipes {
            scraper: self,
            categories: None,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Category links are site-relative; prefix the base URL unless the href
    /// already mentions "https" anywhere (crude, but what the site needs).
    fn absolutize(&self, href: &str) -> String {
        if href.contains("https") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }

    fn scrape_recipe(&self, link: RecipeLink) -> Result<Recipe, ScrapeError> {
        info!("recipe: {}", link.url);
        let page = self.fetcher.fetch(&format!("{}{}", self.base_url, link.url))?;

        Ok(Recipe {
            title: link.title,
            url: link.url,
            ingredients: concat_ingredients(&page),
            thumbnail: find_thumbnail(&page).unwrap_or_default(),
            source: Source::Anonymous,
        })
    }
}

/// Distinct category URLs referenced by the main index. The same category is
/// linked from several places, hence the set.
fn category_links(index: &Html) -> HashSet<String> {
    let pattern = Regex::new(CATEGORY_PATTERN).unwrap();
    let hrefs = Selector::parse("[href]").unwrap();

    index
        .select(&hrefs)
        .filter_map(|tag| tag.value().attr("href"))
        .filter(|href| pattern.is_match(href))
        .map(str::to_string)
        .collect()
}

/// Recipe entries on a category page, in document order. Items without a
/// usable link are skipped with a warning rather than aborting the run.
fn recipe_links(category: &Html) -> Vec<RecipeLink> {
    let items = Selector::parse(".subcategoryItem").unwrap();
    let anchors = Selector::parse("a").unwrap();

    let mut links = Vec::new();
    for item in category.select(&items) {
        let Some(anchor) = item.select(&anchors).next() else {
            warn!("subcategory item without a link, skipping");
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            warn!("subcategory item link without an href, skipping");
            continue;
        };
        links.push(RecipeLink {
            url: href.to_string(),
            title: anchor.text().collect::<String>().trim().to_string(),
        });
    }
    links
}

/// Text of every ingredient element, concatenated with no separator; the
/// site's markup carries its own line breaks.
fn concat_ingredients(page: &Html) -> String {
    let ingredients = Selector::parse(".ingredient").unwrap();
    page.select(&ingredients).flat_map(|el| el.text()).collect()
}

fn find_thumbnail(page: &Html) -> Option<String> {
    let container = Selector::parse(".recipe_image").unwrap();
    let images = Selector::parse("img").unwrap();

    let container = page.select(&container).next()?;
    let src = container
        .select(&images)
        .next()
        .and_then(|img| img.value().attr("src"));
    if src.is_none() {
        warn!("recipe image container without an image, no thumbnail");
    }
    src.map(str::to_string)
}

/// Iterator over every recipe on the site, depth-first: one category at a
/// time, recipes within it in document order.
pub struct Recipes<F> {
    scraper: AnonymousScraper<F>,
    categories: Option<std::collections::hash_set::IntoIter<String>>,
    pending: VecDeque<RecipeLink>,
    done: bool,
}

impl<F> Recipes<F> {
    fn abort(&mut self, error: ScrapeError) -> Option<Result<Recipe, ScrapeError>> {
        self.done = true;
        Some(Err(error))
    }
}

impl<F: DocumentFetcher> Iterator for Recipes<F> {
    type Item = Result<Recipe, ScrapeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // The index is fetched on the first pull, not at construction.
        if self.categories.is_none() {
            let index = match self.scraper.fetcher.fetch(&self.scraper.index_url) {
                Ok(document) => document,
                Err(e) => return self.abort(e),
            };
            let links = category_links(&index);
            debug!("{} categories discovered", links.len());
            self.categories = Some(links.into_iter());
        }

        loop {
            if let Some(link) = self.pending.pop_front() {
                return match self.scraper.scrape_recipe(link) {
                    Ok(recipe) => Some(Ok(recipe)),
                    Err(e) => self.abort(e),
                };
            }

            let category = self.categories.as_mut()?.next()?;
            let url = self.scraper.absolutize(&category);
            info!("category: {}", url);
            match self.scraper.fetcher.fetch(&url) {
                Ok(page) => self.pending.extend(recipe_links(&page)),
                Err(e) => return self.abort(e),
            }
        }
    }
}
