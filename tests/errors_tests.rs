use std::error::Error;
use oneurl::errors::SummarizeError;

#[test]
fn test_summarize_error_implements_error_trait() {
    // Verify SummarizeError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::InvalidUrl("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    let error = SummarizeError::UpstreamStatus(404);
    assert_eq!(format!("{error}"), "Upstream page returned HTTP 404");

    let error = SummarizeError::OpenAIError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = SummarizeError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_status_codes() {
    let cases = [
        (SummarizeError::MissingUrl, 400),
        (SummarizeError::InvalidUrl("x".into()), 400),
        (SummarizeError::UpstreamStatus(404), 502),
        (SummarizeError::UnsupportedContentType("application/pdf".into()), 415),
        (SummarizeError::EmptyBody, 422),
        (SummarizeError::HttpError("timeout".into()), 500),
        (SummarizeError::OpenAIError("x".into()), 500),
        (SummarizeError::ConfigError("x".into()), 500),
    ];
    for (error, status) in cases {
        assert_eq!(error.status_code(), status, "{error}");
    }
}

#[test]
fn test_user_messages_hide_internal_details() {
    let error = SummarizeError::HttpError("dns failure at 10.0.0.1".to_string());
    assert_eq!(error.user_message(), "サマリーの生成に失敗しました。");

    let error = SummarizeError::UpstreamStatus(503);
    assert_eq!(error.user_message(), "ページの取得に失敗しました。(HTTP 503)");

    assert_eq!(
        SummarizeError::MissingUrl.user_message(),
        "URLを指定してください。"
    );
}

#[test]
fn test_summarize_error_from_conversions() {
    let parse_err = url::Url::parse("no scheme").unwrap_err();
    assert!(matches!(
        SummarizeError::from(parse_err),
        SummarizeError::InvalidUrl(_)
    ));

    // We can't easily build a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizeError {
        SummarizeError::from(err)
    }
}
