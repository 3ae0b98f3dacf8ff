//! Input resolution
//!
//! Every entry point differs only in where the article comes from. Each
//! source implements [`ArticleSource`] and the pipeline takes it from there.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha1::Sha1;
use tracing::{error, warn};

use crate::clients::AttributeFetcher;
use crate::core::models::{ArticleInfo, ArticlePayload, ContentRef};
use crate::errors::TweetError;

/// What a source may need while resolving.
#[derive(Default, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub fetcher: Option<&'a dyn AttributeFetcher>,
    pub api_token: Option<&'a str>,
}

impl<'a> ResolveContext<'a> {
    fn fetcher(&self) -> Result<&'a dyn AttributeFetcher, TweetError> {
        self.fetcher
            .ok_or_else(|| TweetError::Config("Contentful is not configured".to_string()))
    }
}

#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ArticleInfo, TweetError>;
}

/// `--slug` / `--title` given on the command line.
#[derive(Debug, Clone)]
pub struct FlagSource {
    pub slug: String,
    pub title: String,
}

#[async_trait]
impl ArticleSource for FlagSource {
    async fn resolve(&self, _ctx: &ResolveContext<'_>) -> Result<ArticleInfo, TweetError> {
        ArticleInfo::new(self.slug.clone(), self.title.clone())
    }
}

/// Path parameters of an API Gateway proxy request.
#[derive(Debug, Clone, Default)]
pub struct GatewaySource {
    pub slug: Option<String>,
    pub title: Option<String>,
}

impl GatewaySource {
    /// Reads `pathParameters.slug` and `pathParameters.title` from a proxy event.
    #[must_use]
    pub fn from_event(event: &Value) -> Self {
        let param = |name: &str| {
            event
                .get("pathParameters")
                .and_then(|p| p.get(name))
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };

        Self {
            slug: param("slug"),
            title: param("title"),
        }
    }
}

#[async_trait]
impl ArticleSource for GatewaySource {
    async fn resolve(&self, _ctx: &ResolveContext<'_>) -> Result<ArticleInfo, TweetError> {
        ArticleInfo::new(
            self.slug.clone().unwrap_or_default(),
            self.title.clone().unwrap_or_default(),
        )
    }
}

/// A direct-invocation payload that already carries slug and title.
#[derive(Debug, Clone)]
pub struct ArticlePayloadSource(pub ArticlePayload);

#[async_trait]
impl ArticleSource for ArticlePayloadSource {
    async fn resolve(&self, _ctx: &ResolveContext<'_>) -> Result<ArticleInfo, TweetError> {
        ArticleInfo::new(self.0.slug.clone(), self.0.title.clone())
    }
}

/// A direct-invocation payload naming a CMS entry, guarded by a shared token.
#[derive(Debug, Clone)]
pub struct ContentRefSource(pub ContentRef);

#[async_trait]
impl ArticleSource for ContentRefSource {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ArticleInfo, TweetError> {
        let expected = ctx.api_token.ok_or_else(|| TweetError::missing_env("API_TOKEN"))?;
        if !tokens_match(&self.0.token, expected) {
            warn!("Rejected invocation with mismatched token");
            return Err(TweetError::Unauthorized);
        }

        ContentIdSource {
            id: self.0.id.clone(),
        }
        .resolve(ctx)
        .await
    }
}

/// Compares a presented token with the configured one in constant time.
///
/// Both are MACed under the configured token; the tags are compared with
/// `verify_slice`.
pub fn tokens_match(presented: &str, expected: &str) -> bool {
    let new_mac = || match Hmac::<Sha1>::new_from_slice(expected.as_bytes()) {
        Ok(mac) => Some(mac),
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            None
        }
    };
    let (Some(mut expected_mac), Some(mut presented_mac)) = (new_mac(), new_mac()) else {
        return false;
    };

    expected_mac.update(expected.as_bytes());
    presented_mac.update(presented.as_bytes());
    let expected_tag = expected_mac.finalize().into_bytes();
    presented_mac.verify_slice(&expected_tag).is_ok()
}

/// A CMS entry ID given on the command line. No token check.
#[derive(Debug, Clone)]
pub struct ContentIdSource {
    pub id: String,
}

#[async_trait]
impl ArticleSource for ContentIdSource {
    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<ArticleInfo, TweetError> {
        if self.id.is_empty() {
            return Err(TweetError::validation("id is empty"));
        }
        ctx.fetcher()?.fetch_article(&self.id).await
    }
}
