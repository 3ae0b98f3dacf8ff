//! Direct-invocation handlers.
//!
//! Used when another service invokes the function with a JSON payload instead
//! of going through API Gateway. Success is `null`; a failure, including one
//! from startup, is returned to the runtime so the caller sees the invocation
//! error.

use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use crate::core::models::{ArticlePayload, ContentRef};
use crate::errors::TweetError;
use crate::input::{ArticlePayloadSource, ArticleSource, ContentRefSource};
use crate::pipeline::Startup;

async fn run(startup: &Startup, source: &dyn ArticleSource) -> Result<(), TweetError> {
    let announcer = startup.as_ref().map_err(|e| {
        error!("Pipeline unavailable: {}", e);
        e.clone()
    })?;

    match announcer.announce(source).await {
        Ok(tweet_id) => {
            info!(tweet_id = %tweet_id, "Announcement posted");
            Ok(())
        }
        Err(e) => {
            error!("Announcement failed: {}", e);
            Err(e)
        }
    }
}

/// `{token, id}` payload: checks the token, then looks the entry up in the CMS.
pub async fn handle_content_ref(
    startup: &Startup,
    payload: ContentRef,
) -> Result<(), TweetError> {
    run(startup, &ContentRefSource(payload)).await
}

/// `{slug, title}` payload.
pub async fn handle_article(
    startup: &Startup,
    payload: ArticlePayload,
) -> Result<(), TweetError> {
    run(startup, &ArticlePayloadSource(payload)).await
}

#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn content_ref_handler(
    startup: &Startup,
    event: LambdaEvent<ContentRef>,
) -> Result<(), Error> {
    handle_content_ref(startup, event.payload)
        .await
        .map_err(Error::from)
}

#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn article_handler(
    startup: &Startup,
    event: LambdaEvent<ArticlePayload>,
) -> Result<(), Error> {
    handle_article(startup, event.payload)
        .await
        .map_err(Error::from)
}
