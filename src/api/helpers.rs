//! Response builders for API Gateway proxy responses.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::SummarizeError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Returns a 200 OK response with `body` serialized as JSON.
#[must_use]
pub fn ok_json<T: Serialize>(body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(body) => json!({
            "statusCode": 200,
            "headers": { "Content-Type": JSON_CONTENT_TYPE },
            "body": body
        }),
        Err(e) => err_response(500, &format!("Failed to serialize response: {e}")),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": JSON_CONTENT_TYPE },
        "body": json!({ "message": message }).to_string()
    })
}

/// Maps a pipeline error to its status code and user-facing message.
#[must_use]
pub fn error_to_response(error: &SummarizeError) -> Value {
    err_response(error.status_code(), &error.user_message())
}
