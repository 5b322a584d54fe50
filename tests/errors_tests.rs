use std::error::Error;

use recap::errors::BotError;

#[test]
fn conversions_classify_and_keep_the_source_message() {
    let err: BotError = anyhow::anyhow!("missing_scope").into();
    assert!(matches!(&err, BotError::ApiError(msg) if msg.contains("missing_scope")));
    assert_eq!(format!("{err}"), "Failed to access Slack API: missing_scope");

    // A malformed Web API body lands on the parse surface.
    let err: BotError = serde_json::from_str::<serde_json::Value>("{not json")
        .unwrap_err()
        .into();
    assert!(matches!(err, BotError::ParseError(_)));
    assert!(format!("{err}").starts_with("Failed to parse Slack payload:"));
}

#[test]
fn each_failure_surface_names_itself() {
    assert_eq!(
        format!("{}", BotError::ApiError("rate_limited".to_string())),
        "Failed to access Slack API: rate_limited"
    );
    assert_eq!(
        format!("{}", BotError::OpenAIError("model overloaded".to_string())),
        "Failed to access OpenAI API: model overloaded"
    );
    assert_eq!(
        format!("{}", BotError::HttpError("connect timeout".to_string())),
        "Failed to send HTTP request: connect timeout"
    );
}

#[test]
fn boxes_as_a_trait_object() {
    let boxed: Box<dyn Error> = Box::new(BotError::HttpError("connect timeout".to_string()));
    assert!(boxed.to_string().contains("connect timeout"));
}

// reqwest errors cannot be constructed directly; this pins the
// conversion at the type level.
#[allow(dead_code)]
fn transport_failures_convert(err: reqwest::Error) -> BotError {
    err.into()
}
