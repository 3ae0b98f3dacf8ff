//! Local (non-Lambda) execution.
//!
//! Every binary accepts `--local`. Without it the binary hands control to the
//! Lambda runtime; with it the pipeline runs once against flag input, after
//! loading a `.env` file from the working directory. Outcomes are printed to
//! stdout.

use clap::Parser;

use crate::core::config::AppConfig;
use crate::input::{ArticleSource, ContentIdSource, FlagSource};
use crate::pipeline::Announcer;

#[derive(Parser, Debug, Default)]
#[command(about = "Post a new-article announcement tweet")]
pub struct ArticleArgs {
    #[arg(long, help = "Run once locally instead of starting the Lambda runtime")]
    pub local: bool,
    #[arg(long, default_value = "", help = "Article slug for a local run")]
    pub slug: String,
    #[arg(long, default_value = "", help = "Article title for a local run")]
    pub title: String,
}

#[derive(Parser, Debug, Default)]
#[command(about = "Post a new-article announcement tweet for a CMS entry")]
pub struct ContentArgs {
    #[arg(long, help = "Run once locally instead of starting the Lambda runtime")]
    pub local: bool,
    #[arg(long, default_value = "", help = "Contentful entry ID for a local run")]
    pub id: String,
}

impl ArticleArgs {
    /// Returns the local source, `Ok(None)` when running under Lambda, or the
    /// reason a local run cannot proceed.
    pub fn local_source(&self) -> Result<Option<FlagSource>, String> {
        if !self.local {
            return Ok(None);
        }
        if self.slug.is_empty() {
            return Err("local run requires --slug".to_string());
        }
        if self.title.is_empty() {
            return Err("local run requires --title".to_string());
        }
        Ok(Some(FlagSource {
            slug: self.slug.clone(),
            title: self.title.clone(),
        }))
    }
}

impl ContentArgs {
    pub fn local_source(&self) -> Result<Option<ContentIdSource>, String> {
        if !self.local {
            return Ok(None);
        }
        if self.id.is_empty() {
            return Err("local run requires --id".to_string());
        }
        Ok(Some(ContentIdSource {
            id: self.id.clone(),
        }))
    }
}

/// Loads `.env`, builds the pipeline from it and runs `source` once.
pub async fn run_local(source: &dyn ArticleSource) -> anyhow::Result<String> {
    dotenvy::dotenv()?;
    let config = AppConfig::from_env()?;
    let announcer = Announcer::from_config(&config)?;
    Ok(announcer.announce(source).await?)
}

/// Runs locally and prints the outcome. Never fails; a local run has no exit
/// status contract.
pub async fn run_and_report(source: &dyn ArticleSource) {
    match run_local(source).await {
        Ok(tweet_id) => println!("posted tweet {tweet_id}"),
        Err(e) => println!("{e}"),
    }
}
