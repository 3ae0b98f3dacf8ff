use std::env;

use crate::errors::TweetError;

pub const DEFAULT_CONTENTFUL_ENVIRONMENT: &str = "master";

/// OAuth 1.0a user-context credentials for the Twitter API.
#[derive(Debug, Clone)]
pub struct TwitterCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

#[derive(Debug, Clone)]
pub struct ContentfulConfig {
    pub access_token: String,
    pub space_id: String,
    pub environment: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub twitter: TwitterCredentials,
    pub blog_url: String,
    pub contentful_access_token: Option<String>,
    pub contentful_space_id: Option<String>,
    pub contentful_environment: Option<String>,
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, TweetError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TweetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let required = |name: &str| optional(name).ok_or_else(|| TweetError::missing_env(name));

        Ok(Self {
            twitter: TwitterCredentials {
                consumer_key: required("GOTWI_API_KEY")?,
                consumer_secret: required("GOTWI_API_KEY_SECRET")?,
                access_token: required("GOTWI_ACCESS_TOKEN")?,
                access_token_secret: required("GOTWI_ACCESS_TOKEN_SECRET")?,
            },
            blog_url: required("BLOG_URL")?,
            contentful_access_token: optional("CONTENTFUL_ACCESS_TOKEN"),
            contentful_space_id: optional("CONTENTFUL_SPACE_ID"),
            contentful_environment: optional("CONTENTFUL_ENVIRONMENT"),
            api_token: optional("API_TOKEN"),
        })
    }

    /// Returns the CMS settings, or `None` when the CMS is not configured at all.
    ///
    /// # Errors
    ///
    /// Fails when only one of the access token and space ID is set.
    pub fn contentful(&self) -> Result<Option<ContentfulConfig>, TweetError> {
        match (&self.contentful_access_token, &self.contentful_space_id) {
            (None, None) => Ok(None),
            (Some(access_token), Some(space_id)) => Ok(Some(ContentfulConfig {
                access_token: access_token.clone(),
                space_id: space_id.clone(),
                environment: self
                    .contentful_environment
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONTENTFUL_ENVIRONMENT.to_string()),
            })),
            (None, Some(_)) => Err(TweetError::missing_env("CONTENTFUL_ACCESS_TOKEN")),
            (Some(_), None) => Err(TweetError::missing_env("CONTENTFUL_SPACE_ID")),
        }
    }
}
