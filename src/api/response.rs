//! API Gateway proxy response builders.

use serde_json::{Value, json};
use tracing::error;

use crate::core::models::ErrorResponse;
use crate::errors::TweetError;

pub const BAD_REQUEST: &str = "bad request";
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Returns a 200 OK response with an empty body.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "body": "" })
}

/// Returns a JSON `ErrorResponse` with the given status code.
///
/// Falls back to a bare 500 carrying the serializer's message if the body
/// cannot be encoded.
#[must_use]
pub fn err_response(status_code: u16, error: &str, message: &str) -> Value {
    let body = ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
    };

    match serde_json::to_string(&body) {
        Ok(body) => json!({ "statusCode": status_code, "body": body }),
        Err(e) => {
            error!("Failed to encode error response: {}", e);
            json!({ "statusCode": 500, "body": e.to_string() })
        }
    }
}

#[must_use]
pub fn bad_request(message: &str) -> Value {
    err_response(400, BAD_REQUEST, message)
}

#[must_use]
pub fn internal_server_error(message: &str) -> Value {
    err_response(500, INTERNAL_SERVER_ERROR, message)
}

/// Maps a pipeline error to 400 for caller mistakes, 500 for everything else.
#[must_use]
pub fn from_error(err: &TweetError) -> Value {
    if err.is_client_error() {
        bad_request(&err.to_string())
    } else {
        internal_server_error(&err.to_string())
    }
}
