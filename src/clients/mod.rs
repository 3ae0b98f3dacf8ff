//! Client modules for external API interactions

pub mod contentful;
pub mod oauth1;
pub mod twitter;

use async_trait::async_trait;

use crate::core::models::ArticleInfo;
use crate::errors::TweetError;

pub use contentful::ContentfulClient;
pub use twitter::TwitterClient;

/// Creates a text post and returns its identifier.
#[async_trait]
pub trait PostCreator: Send + Sync {
    async fn create_post(&self, text: &str) -> Result<String, TweetError>;
}

/// Looks up an article's slug and title by CMS content ID.
#[async_trait]
pub trait AttributeFetcher: Send + Sync {
    async fn fetch_article(&self, id: &str) -> Result<ArticleInfo, TweetError>;
}
