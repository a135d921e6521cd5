//! API Lambda handler - thin router over the summary pipeline.
//!
//! This module handles:
//! - Routing (`GET …/api/summarize`, everything else is 404)
//! - Query parameter extraction
//! - Mapping pipeline errors to status codes and user-facing messages

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::errors::SummarizeError;
use crate::features::SummaryService;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

pub use self::function_handler as handler;

pub const SUMMARIZE_PATH: &str = "/api/summarize";

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error; every failure is answered with a JSON error body.
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    Ok(respond(AppConfig::from_env(), &event.payload).await)
}

/// Build the service from a loaded configuration and answer one request.
pub async fn respond(config: Result<AppConfig, String>, payload: &Value) -> Value {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return helpers::error_to_response(&SummarizeError::ConfigError(e));
        }
    };

    let service = match SummaryService::new(&config) {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to initialize summary service: {}", e);
            return helpers::error_to_response(&e);
        }
    };

    route_request(&service, payload).await
}

/// Route an API Gateway payload to the matching operation.
#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %Uuid::new_v4()))]
pub async fn route_request(service: &SummaryService, payload: &Value) -> Value {
    let path = parsing::request_path(payload).unwrap_or("/");
    let method = parsing::request_method(payload);
    let xray = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");
    info!(raw_path = %path, method = %method, xray_trace_id = %xray, "Request received");

    if !path.trim_end_matches('/').ends_with(SUMMARIZE_PATH) {
        return helpers::err_response(404, "Not Found");
    }

    if method != "GET" {
        return helpers::err_response(405, "Method Not Allowed");
    }

    let Some(target) = parsing::get_query_param(payload, "url") else {
        return helpers::error_to_response(&SummarizeError::MissingUrl);
    };

    match service.summarize_url(&target).await {
        Ok(summary) => {
            info!(source_url = %summary.source_url, "Summary generated");
            helpers::ok_json(&summary)
        }
        Err(e) => {
            if e.status_code() >= 500 {
                error!("Summarize error: {}", e);
            } else {
                info!("Rejected request: {}", e);
            }
            helpers::error_to_response(&e)
        }
    }
}
