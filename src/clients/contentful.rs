//! Contentful Content Delivery API client
//!
//! Resolves a blog entry ID to its `slug` and `title` fields.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{error, info};
use url::Url;

use super::AttributeFetcher;
use crate::core::config::ContentfulConfig;
use crate::core::models::ArticleInfo;
use crate::errors::TweetError;

pub const DELIVERY_API_URL: &str = "https://cdn.contentful.com";

pub struct ContentfulClient {
    http: Client,
    config: ContentfulConfig,
    base_url: String,
}

impl ContentfulClient {
    #[must_use]
    pub fn new(config: ContentfulConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            base_url: DELIVERY_API_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of a single entry, with every path segment percent-encoded.
    pub fn entry_url(&self, id: &str) -> Result<Url, TweetError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TweetError::Config(format!("invalid Contentful base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| TweetError::Config("Contentful base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend([
                "spaces",
                self.config.space_id.as_str(),
                "environments",
                self.config.environment.as_str(),
                "entries",
                id,
            ]);
        Ok(url)
    }
}

/// Reads `fields.slug` and `fields.title` from an entry document.
pub fn article_from_entry(entry: &Value) -> Result<ArticleInfo, TweetError> {
    let field = |name: &str| {
        entry
            .get("fields")
            .and_then(|f| f.get(name))
            .and_then(Value::as_str)
            .ok_or_else(|| TweetError::Cms(format!("entry has no {name} field")))
    };

    let slug = field("slug")?;
    let title = field("title")?;

    ArticleInfo::new(slug, title).map_err(|e| TweetError::Cms(format!("entry {e}")))
}

#[async_trait]
impl AttributeFetcher for ContentfulClient {
    async fn fetch_article(&self, id: &str) -> Result<ArticleInfo, TweetError> {
        let url = self.entry_url(id)?;
        info!(entry_id = %id, "Fetching entry from Contentful");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(|e| TweetError::Cms(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, entry_id = %id, "Contentful lookup failed");
            let message = match response.text().await {
                Ok(body) => format!("Contentful API error ({status}): {body}"),
                Err(e) => format!("Contentful API error ({status}), body unreadable: {e}"),
            };
            return Err(TweetError::Cms(message));
        }

        let entry: Value = response
            .json()
            .await
            .map_err(|e| TweetError::Cms(format!("entry parse: {e}")))?;

        article_from_entry(&entry)
    }
}
