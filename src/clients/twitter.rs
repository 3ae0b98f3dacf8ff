//! Twitter API v2 client
//!
//! Creates tweets on behalf of the configured account using OAuth 1.0a user
//! context. Each call makes exactly one request; failures are returned as-is.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use super::PostCreator;
use super::oauth1::{self, Nonce};
use crate::core::config::TwitterCredentials;
use crate::errors::TweetError;

pub const CREATE_TWEET_URL: &str = "https://api.twitter.com/2/tweets";

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: CreatedTweet,
}

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    id: String,
}

pub struct TwitterClient {
    http: Client,
    credentials: TwitterCredentials,
    endpoint: String,
}

impl TwitterClient {
    #[must_use]
    pub fn new(credentials: TwitterCredentials) -> Self {
        Self {
            http: Client::new(),
            credentials,
            endpoint: CREATE_TWEET_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Points the client at a different tweet-creation URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Extracts the created tweet's ID from a successful response body.
pub fn parse_created_id(body: &str) -> Result<String, TweetError> {
    let parsed: CreateTweetResponse = serde_json::from_str(body)
        .map_err(|e| TweetError::Twitter(format!("create tweet parse: {e}")))?;
    Ok(parsed.data.id)
}

#[async_trait]
impl PostCreator for TwitterClient {
    async fn create_post(&self, text: &str) -> Result<String, TweetError> {
        let auth_header = oauth1::authorization_header(
            "POST",
            &self.endpoint,
            &[],
            &self.credentials,
            &Nonce::generate(),
        );

        info!(chars = text.chars().count(), "Creating tweet");

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", auth_header)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(%status, "Tweet creation rejected");
            return Err(TweetError::Twitter(format!(
                "Twitter API error ({status}): {body}"
            )));
        }

        let id = parse_created_id(&body)?;
        info!(tweet_id = %id, "Tweet created");
        Ok(id)
    }
}
