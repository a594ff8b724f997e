//! Dataset acquisition: cache file first, paginated search API as fallback.

use crate::error::{DatasetError, Result};
use crate::parser::{restaurants_from_payload, SearchPayload};
use crate::types::Restaurant;
use async_trait::async_trait;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{debug, info};

const SEARCH_URL: &str = "https://api.yelp.com/v3/businesses/search";

/// Anything that can materialize a full restaurant dataset for a city term.
///
/// The pipeline consumes only this trait, so tests can drive it with a
/// scripted source instead of the filesystem or the network.
#[async_trait]
pub trait RestaurantSource: Send + Sync {
    /// Fetch every restaurant for the term. May legitimately return an empty
    /// vector; never returns partial results.
    async fn fetch(&self, term: &str) -> Result<Vec<Restaurant>>;
}

/// Configuration for a `DatasetProvider`.
///
/// The API key is passed in explicitly; nothing in this crate reads global
/// mutable state.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub cache_dir: PathBuf,
    /// Listings per API page. The search endpoint caps this at 50.
    pub page_size: usize,
    /// Total listings to pull from the API. The search endpoint stops
    /// serving past 1000.
    pub max_results: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            cache_dir: PathBuf::from("."),
            page_size: 50,
            max_results: 1000,
        }
    }
}

/// Cache-first dataset provider.
///
/// A term maps to `<cache_dir>/<term>.json` with whitespace collapsed to
/// underscores ("Ann Arbor" → `Ann_Arbor.json`). On a cache miss with an API
/// key configured, the provider pages through the search API, writes the
/// combined payload back to the cache file, and returns the decoded records.
pub struct DatasetProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl DatasetProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn cache_path(&self, term: &str) -> PathBuf {
        let stem: Vec<&str> = term.split_whitespace().collect();
        self.config.cache_dir.join(format!("{}.json", stem.join("_")))
    }

    fn load_cached(&self, path: &PathBuf) -> Result<Vec<Restaurant>> {
        let file = File::open(path)?;
        let payload: SearchPayload = serde_json::from_reader(BufReader::new(file))?;
        restaurants_from_payload(payload)
    }

    async fn fetch_remote(&self, term: &str, api_key: &str) -> Result<SearchPayload> {
        let mut businesses = Vec::new();
        let mut offset = 0;
        while offset < self.config.max_results {
            debug!(term, offset, "requesting search page");
            let limit = self.config.page_size.to_string();
            let offset_param = offset.to_string();
            let response = self
                .client
                .get(SEARCH_URL)
                .header("Authorization", format!("Bearer {api_key}"))
                .query(&[
                    ("term", "food"),
                    ("location", term),
                    ("limit", limit.as_str()),
                    ("offset", offset_param.as_str()),
                ])
                .send()
                .await?
                .error_for_status()?;

            let page: SearchPayload = response.json().await?;
            if page.businesses.is_empty() {
                break;
            }
            businesses.extend(page.businesses);
            offset += self.config.page_size;
        }
        Ok(SearchPayload { businesses })
    }

    fn write_cache(&self, path: &PathBuf, payload: &SearchPayload) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), payload)?;
        Ok(())
    }
}

#[async_trait]
impl RestaurantSource for DatasetProvider {
    async fn fetch(&self, term: &str) -> Result<Vec<Restaurant>> {
        let path = self.cache_path(term.trim());
        if path.exists() {
            info!(path = %path.display(), "loading cached dataset");
            return self.load_cached(&path);
        }

        let api_key = match self.config.api_key.as_deref() {
            Some(key) => key,
            None => {
                return Err(DatasetError::NoDataSource {
                    term: term.to_string(),
                })
            }
        };

        info!(term, "no cache file, fetching from search API");
        let payload = self.fetch_remote(term.trim(), api_key).await?;
        self.write_cache(&path, &payload)?;
        info!(
            term,
            count = payload.businesses.len(),
            "cached fetched dataset"
        );
        restaurants_from_payload(payload)
    }
}
