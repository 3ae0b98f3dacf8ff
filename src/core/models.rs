use serde::{Deserialize, Serialize};

use crate::errors::TweetError;

/// Slug and title of the post being announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleInfo {
    pub slug: String,
    pub title: String,
}

impl ArticleInfo {
    /// # Errors
    ///
    /// Returns a validation error naming the first empty field, slug first.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Result<Self, TweetError> {
        let slug = slug.into();
        let title = title.into();

        if slug.is_empty() {
            return Err(TweetError::validation("slug is empty"));
        }
        if title.is_empty() {
            return Err(TweetError::validation("title is empty"));
        }

        Ok(Self { slug, title })
    }
}

/// Body returned to the gateway on 4xx/5xx.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Direct-invocation payload referencing a CMS entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentRef {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub id: String,
}

/// Direct-invocation payload carrying the article itself.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArticlePayload {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
}
