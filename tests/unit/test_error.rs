use etna_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_missing_credentials() {
    let error = AppError::MissingCredentials;
    assert_eq!(
        error.to_string(),
        "missing credentials: no session and no login/password"
    );
}

#[test]
fn test_app_error_display_missing_placeholder() {
    let error = AppError::MissingPlaceholder("login".to_string());
    assert_eq!(error.to_string(), "unresolved placeholder: login");
}

#[test]
fn test_app_error_display_bad_status() {
    let error = AppError::BadStatus {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "boom".to_string(),
    };
    let rendered = error.to_string();
    assert!(rendered.contains("500"));
    assert!(rendered.contains("boom"));
}

#[test]
fn test_app_error_display_max_retries() {
    let error = AppError::MaxRetriesExceeded(6);
    assert_eq!(error.to_string(), "max retries exceeded after 6 attempts");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_json_has_source() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_terminal_variants_have_no_source() {
    assert!(AppError::MissingCredentials.source().is_none());
    assert!(AppError::MaxRetriesExceeded(6).source().is_none());
}
