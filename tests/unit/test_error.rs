use bookmark_client::error::{AppError, Operation};
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_not_authenticated() {
    let error = AppError::NotAuthenticated;
    assert_eq!(error.to_string(), "user not authenticated");
}

#[test]
fn test_app_error_display_configuration_missing() {
    let error = AppError::ConfigurationMissing;
    assert_eq!(error.to_string(), "backend URL not configured");
}

#[test]
fn test_app_error_display_request_failed_includes_status() {
    let error = AppError::RequestFailed {
        operation: Operation::Get,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    };
    assert_eq!(error.to_string(), "get request failed with status 500");
}

#[test]
fn test_app_error_display_request_failed_save() {
    let error = AppError::RequestFailed {
        operation: Operation::Save,
        status: StatusCode::BAD_REQUEST,
    };
    assert!(error.to_string().contains("save"));
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_operation_display_tags() {
    assert_eq!(Operation::Save.to_string(), "save");
    assert_eq!(Operation::Get.to_string(), "get");
    assert_eq!(Operation::Delete.to_string(), "delete");
    assert_eq!(Operation::Count.to_string(), "count");
}

#[test]
fn test_delete_and_get_failures_are_distinguishable() {
    let delete = AppError::RequestFailed {
        operation: Operation::Delete,
        status: StatusCode::NOT_FOUND,
    };
    let get = AppError::RequestFailed {
        operation: Operation::Get,
        status: StatusCode::NOT_FOUND,
    };
    assert_ne!(delete.to_string(), get.to_string());
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

// Note: reqwest::Error cannot be easily constructed in tests.
// The Network conversion is exercised through the service tests.

#[test]
fn test_app_error_source() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let app_error = AppError::Json(serde_error);
    assert!(app_error.source().is_some());

    assert!(AppError::NotAuthenticated.source().is_none());
    assert!(AppError::ConfigurationMissing.source().is_none());
}
