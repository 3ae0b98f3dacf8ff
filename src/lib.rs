//! blog-tweet - announces newly published blog posts on Twitter/X.
//!
//! The crate is deployed as AWS Lambda functions that all run the same
//! pipeline and differ only in where the article comes from:
//! 1. `blog-tweet-api`: API Gateway request with `slug`/`title` path parameters
//! 2. `blog-tweet-invoke`: direct invocation with `{token, id}`, resolved through Contentful
//! 3. `blog-tweet-event`: direct invocation with `{slug, title}`
//!
//! Each binary also runs once from the command line with `--local`.
//!
//! # Example
//!
//! ```no_run
//! use blog_tweet::core::config::AppConfig;
//! use blog_tweet::input::FlagSource;
//! use blog_tweet::pipeline::Announcer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     blog_tweet::setup_local_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let announcer = Announcer::from_config(&config)?;
//!     let source = FlagSource {
//!         slug: "/post/1".to_string(),
//!         title: "Hello".to_string(),
//!     };
//!     let tweet_id = announcer.announce(&source).await?;
//!     println!("posted {tweet_id}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod input;
pub mod invoke;
pub mod local;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG`, defaulting to `info`. Calling this more
/// than once is harmless.
///
/// # Example
///
/// ```
/// blog_tweet::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init();
}

/// Human-readable logging for `--local` runs.
pub fn setup_local_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init();
}
