//! API Gateway handler.
//!
//! Reads `slug` and `title` from the request path, posts the announcement and
//! answers with an API Gateway proxy response. Every outcome, including
//! failures, is a response value; the runtime never sees an error.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::response;
use crate::input::GatewaySource;
use crate::pipeline::Startup;

/// Handles one proxy event and returns the response to send back.
///
/// A pipeline that failed to start answers 500 with the startup error.
pub async fn handle_request(startup: &Startup, event: &Value) -> Value {
    let announcer = match startup {
        Ok(announcer) => announcer,
        Err(e) => {
            error!("Pipeline unavailable: {}", e);
            return response::internal_server_error(&e.to_string());
        }
    };

    let source = GatewaySource::from_event(event);

    match announcer.announce(&source).await {
        Ok(tweet_id) => {
            info!(tweet_id = %tweet_id, "Announcement posted");
            response::ok_empty()
        }
        Err(e) => {
            error!(client_error = e.is_client_error(), "Announcement failed: {}", e);
            response::from_error(&e)
        }
    }
}

/// Lambda handler for the API entrypoint.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    startup: &Startup,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_request(startup, &event.payload).await)
}
