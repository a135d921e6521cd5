use oneurl::api::handler::{respond, route_request};
use oneurl::core::config::AppConfig;
use oneurl::core::models::SummaryResponse;
use oneurl::features::SummaryService;
use serde_json::{Value, json};

/// Routing and validation tests for the API handler.
/// None of these requests reach the network.

fn service() -> SummaryService {
    SummaryService::new(&AppConfig::default()).expect("service builds")
}

fn body_of(response: &Value) -> Value {
    let raw = response["body"].as_str().expect("body is a string");
    serde_json::from_str(raw).expect("body is JSON")
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let payload = json!({ "rawPath": "/favicon.ico", "rawQueryString": "" });
    let response = route_request(&service(), &payload).await;

    assert_eq!(response["statusCode"], 404);
    assert_eq!(body_of(&response)["message"], "Not Found");
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let payload = json!({
        "rawPath": "/api/summarize",
        "requestContext": { "http": { "method": "POST" } }
    });
    let response = route_request(&service(), &payload).await;
    assert_eq!(response["statusCode"], 405);
}

#[tokio::test]
async fn test_missing_url_is_400() {
    let payload = json!({
        "rawPath": "/api/summarize",
        "requestContext": { "http": { "method": "GET" } }
    });
    let response = route_request(&service(), &payload).await;

    assert_eq!(response["statusCode"], 400);
    assert_eq!(body_of(&response)["message"], "URLを指定してください。");
}

#[tokio::test]
async fn test_blank_url_is_400() {
    let payload = json!({
        "rawPath": "/api/summarize",
        "queryStringParameters": { "url": "   " }
    });
    let response = route_request(&service(), &payload).await;

    assert_eq!(response["statusCode"], 400);
    assert_eq!(body_of(&response)["message"], "URLを指定してください。");
}

#[tokio::test]
async fn test_malformed_url_is_400() {
    let payload = json!({
        "path": "/prod/api/summarize",
        "httpMethod": "GET",
        "queryStringParameters": { "url": "not a url" }
    });
    let response = route_request(&service(), &payload).await;

    assert_eq!(response["statusCode"], 400);
    assert_eq!(
        body_of(&response)["message"],
        "正しい形式のURLを入力してください。"
    );
    assert_eq!(
        response["headers"]["Content-Type"],
        "application/json; charset=utf-8"
    );
}

#[tokio::test]
async fn test_non_http_scheme_is_400() {
    let payload = json!({
        "rawPath": "/api/summarize",
        "rawQueryString": "url=file%3A%2F%2F%2Fetc%2Fpasswd"
    });
    let response = route_request(&service(), &payload).await;
    assert_eq!(response["statusCode"], 400);
}

#[tokio::test]
async fn test_bad_config_is_json_500() {
    let config = AppConfig::from_lookup(|key: &str| {
        (key == "SUMMARY_MAX_CHARS").then(|| "zero".to_string())
    });
    assert!(config.is_err());

    let payload = json!({
        "rawPath": "/api/summarize",
        "queryStringParameters": { "url": "https://example.com/" }
    });
    let response = respond(config, &payload).await;

    assert_eq!(response["statusCode"], 500);
    assert_eq!(body_of(&response)["message"], "サマリーの生成に失敗しました。");
    assert_eq!(
        response["headers"]["Content-Type"],
        "application/json; charset=utf-8"
    );
}

#[tokio::test]
async fn test_valid_config_reaches_router() {
    let config = AppConfig::from_lookup(|_: &str| None);
    let payload = json!({ "rawPath": "/nowhere" });
    let response = respond(config, &payload).await;
    assert_eq!(response["statusCode"], 404);
}

#[test]
fn test_summary_response_uses_camel_case() {
    let response = SummaryResponse {
        title: "タイトル".to_string(),
        text: "要約".to_string(),
        source_url: "https://example.com/".to_string(),
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({ "title": "タイトル", "text": "要約", "sourceUrl": "https://example.com/" })
    );
}
