use std::sync::Arc;

use tracing::info;

use crate::clients::{AttributeFetcher, ContentfulClient, PostCreator, TwitterClient};
use crate::core::config::AppConfig;
use crate::core::message::compose_announcement;
use crate::errors::TweetError;
use crate::input::{ArticleSource, ResolveContext};

/// The pipeline, or the reason it could not be built at process start.
///
/// Handlers report a startup failure on every invocation instead of letting
/// the process exit before the runtime starts polling.
pub type Startup = Result<Announcer, TweetError>;

/// Resolves an article, composes the announcement and posts it.
pub struct Announcer {
    poster: Arc<dyn PostCreator>,
    fetcher: Option<Arc<dyn AttributeFetcher>>,
    blog_url: String,
    api_token: Option<String>,
}

impl Announcer {
    pub fn new(poster: Arc<dyn PostCreator>, blog_url: impl Into<String>) -> Self {
        Self {
            poster,
            fetcher: None,
            blog_url: blog_url.into(),
            api_token: None,
        }
    }

    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn AttributeFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    #[must_use]
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Wires the Twitter client and, when configured, the Contentful client.
    ///
    /// # Errors
    ///
    /// Fails when the Contentful settings are only partially present.
    pub fn from_config(config: &AppConfig) -> Result<Self, TweetError> {
        let poster = Arc::new(TwitterClient::new(config.twitter.clone()));
        let mut announcer = Self::new(poster, config.blog_url.clone());

        if let Some(contentful) = config.contentful()? {
            announcer = announcer.with_fetcher(Arc::new(ContentfulClient::new(contentful)));
        }
        if let Some(token) = &config.api_token {
            announcer = announcer.with_api_token(token.clone());
        }

        Ok(announcer)
    }

    /// Reads the environment and wires the pipeline.
    pub fn from_env() -> Startup {
        let config = AppConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Runs the pipeline once and returns the created post's ID.
    pub async fn announce(&self, source: &dyn ArticleSource) -> Result<String, TweetError> {
        let ctx = ResolveContext {
            fetcher: self.fetcher.as_deref(),
            api_token: self.api_token.as_deref(),
        };

        let article = source.resolve(&ctx).await?;
        info!(slug = %article.slug, "Resolved article");

        let text = compose_announcement(&article, &self.blog_url);
        self.poster.create_post(&text).await
    }
}
