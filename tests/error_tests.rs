//! 错误处理单元测试

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use patient_service::error::AppError;

#[test]
fn test_error_status_codes() {
    assert_eq!(AppError::not_found("patient").status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        AppError::BadRequest("invalid".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(AppError::validation("error").status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        AppError::Config("missing url".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Database(sqlx::Error::RowNotFound).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_config_error_conversion() {
    let err: AppError = config::ConfigError::Message("bad port".to_string()).into();
    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.user_message(), "Configuration error");
}

#[tokio::test]
async fn test_error_response_body() {
    let response = AppError::BadRequest("token is required".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["code"], 400);
    assert_eq!(json["error"]["message"], "token is required");
    assert!(json["error"]["request_id"].is_string());
}

#[tokio::test]
async fn test_server_error_hides_details() {
    let response = AppError::Internal("pool exhausted".to_string()).into_response();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["message"], "Internal server error");
}
