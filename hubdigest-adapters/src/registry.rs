//! Registry adapter using the Hugging Face Hub listing API.
//!
//! This adapter queries `/api/models` and `/api/datasets` for the newest
//! items carrying a tag, one page per category.
//!
//! ## Query
//!
//! - `sort=createdAt`, `direction=-1`: newest first
//! - `limit`: page size (default 100)
//! - `full=true`: include `createdAt`, `likes`, `downloads`, `description`
//! - `filter`: the tag to narrow results to
//!
//! ## Example
//!
//! ```rust,no_run
//! use hubdigest_adapters::registry::RegistryAdapter;
//! use hubdigest_adapters::ItemSource;
//! use hubdigest_types::Category;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = RegistryAdapter::builder()
//!         .tag("zh")
//!         .page_size(50)
//!         .build()?;
//!
//!     let models = adapter.fetch(Category::Model).await?;
//!     println!("Fetched {} models", models.len());
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use hubdigest_types::{Category, RawCandidate};

use crate::{AdapterError, ItemSource};

/// Default registry API base.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co/api";

/// Default number of items requested per category.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Registry adapter for listing recently created items.
#[derive(Debug, Clone)]
pub struct RegistryAdapter {
    client: Client,
    endpoint: String,
    tag: String,
    page_size: u32,
    description: String,
}

impl RegistryAdapter {
    /// Create a new builder for configuring the adapter.
    pub fn builder() -> RegistryAdapterBuilder {
        RegistryAdapterBuilder::default()
    }

    /// The tag every query is filtered by.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Listing URL for a category.
    fn listing_url(&self, category: Category) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            category.path_segment()
        )
    }

    /// Query parameters sent with every listing request.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sort", "createdAt".to_string()),
            ("direction", "-1".to_string()),
            ("limit", self.page_size.to_string()),
            ("full", "true".to_string()),
            ("filter", self.tag.clone()),
        ]
    }
}

#[async_trait]
impl ItemSource for RegistryAdapter {
    async fn fetch(&self, category: Category) -> Result<Vec<RawCandidate>, AdapterError> {
        let url = self.listing_url(category);
        debug!("Querying {} (tag {}, limit {})", url, self.tag, self.page_size);

        let response = self
            .client
            .get(&url)
            .query(&self.query_params())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AdapterError::Http(format!(
                "API returned status {} for {}",
                response.status(),
                category.plural()
            )));
        }

        let items: Vec<RawCandidate> = response
            .json()
            .await
            .map_err(|e| AdapterError::Parse(e.to_string()))?;

        Ok(items)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for RegistryAdapter.
#[derive(Debug, Default)]
pub struct RegistryAdapterBuilder {
    endpoint: Option<String>,
    tag: Option<String>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
}

impl RegistryAdapterBuilder {
    /// Set the API base (default: "https://huggingface.co/api").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the tag filter (default: "en").
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the number of items requested per category (default: 100).
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the adapter.
    pub fn build(self) -> Result<RegistryAdapter, AdapterError> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hubdigest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdapterError::Connection(e.to_string()))?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let tag = self.tag.unwrap_or_else(|| "en".to_string());
        let description = format!("registry: {} [{}]", endpoint, tag);

        Ok(RegistryAdapter {
            client,
            endpoint,
            tag,
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            description,
        })
    }
}
