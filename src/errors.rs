use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum TweetError {
    /// A required input was missing or empty.
    #[error("{0}")]
    Validation(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Config(String),

    /// CMS lookup failed. The text is passed through unchanged.
    #[error("{0}")]
    Cms(String),

    /// Tweet creation failed. The text is passed through unchanged.
    #[error("{0}")]
    Twitter(String),
}

impl TweetError {
    /// Errors caused by the caller's input rather than by this function or a
    /// downstream service.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, TweetError::Validation(_) | TweetError::Unauthorized)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        TweetError::Validation(message.into())
    }

    pub fn missing_env(name: &str) -> Self {
        TweetError::Config(format!("missing environment variable: {name}"))
    }
}

// Tweet creation is the only call that relies on this; the CMS client maps its
// transport errors explicitly.
impl From<reqwest::Error> for TweetError {
    fn from(error: reqwest::Error) -> Self {
        TweetError::Twitter(error.to_string())
    }
}
