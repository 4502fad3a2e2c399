//! 认证结果载体与请求体测试

use axum::{body::Body, http::Request, http::StatusCode, routing::post, Router};
use http_body_util::BodyExt;
use patient_service::{
    error::{validate_request, AppError},
    models::auth::*,
};
use serde_json::json;
use tower::ServiceExt;

// ==================== AuthResponse ====================

#[test]
fn test_construct_with_values() {
    let resp = AuthResponse::new("abc123", Some(42));

    assert_eq!(resp.token.as_deref(), Some("abc123"));
    assert_eq!(resp.patient_id, Some(42));
}

#[test]
fn test_construct_empty_then_assign() {
    let mut resp = AuthResponse::default();
    assert_eq!(resp.token, None);
    assert_eq!(resp.patient_id, None);

    resp.token = Some("xyz".to_string());
    resp.patient_id = Some(7);

    assert_eq!(resp.token.as_deref(), Some("xyz"));
    assert_eq!(resp.patient_id, Some(7));
}

#[test]
fn test_last_write_wins() {
    let mut resp = AuthResponse::new("old", Some(1));

    resp.token = Some("newer".to_string());
    resp.token = Some("newest".to_string());
    resp.patient_id = Some(2);
    resp.patient_id = Some(3);

    assert_eq!(resp.token.as_deref(), Some("newest"));
    assert_eq!(resp.patient_id, Some(3));
}

#[test]
fn test_values_are_not_normalized() {
    let resp = AuthResponse::new("  Bearer \u{00e9}  ", Some(i64::MIN));
    assert_eq!(resp.token.as_deref(), Some("  Bearer \u{00e9}  "));
    assert_eq!(resp.patient_id, Some(i64::MIN));

    let empty = AuthResponse::new("", None);
    assert_eq!(empty.token.as_deref(), Some(""));
    assert_eq!(empty.patient_id, None);
}

#[test]
fn test_serialize_wire_shape() {
    let value = serde_json::to_value(AuthResponse::new("abc123", Some(42))).unwrap();
    assert_eq!(value, json!({"token": "abc123", "patientId": 42}));
}

#[test]
fn test_serialize_unset_fields_as_null() {
    let value = serde_json::to_value(AuthResponse::default()).unwrap();
    assert_eq!(value, json!({"token": null, "patientId": null}));
}

#[test]
fn test_deserialize_missing_members() {
    let resp: AuthResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
    assert_eq!(resp, AuthResponse::new("abc123", None));

    let resp: AuthResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, AuthResponse::default());
}

#[tokio::test]
async fn test_auth_response_as_handler_output() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async { AuthResponse::new("abc123", Some(42)) }),
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["token"], "abc123");
    assert_eq!(json["patientId"], 42);
}

// ==================== 请求体 ====================

#[test]
fn test_login_request_validation() {
    let req: LoginRequest =
        serde_json::from_str(r#"{"email":"you@example.com","password":"secret"}"#).unwrap();
    assert!(validate_request(&req).is_ok());

    let req: LoginRequest =
        serde_json::from_str(r#"{"email":"not-an-email","password":"secret"}"#).unwrap();
    assert!(matches!(validate_request(&req), Err(AppError::Validation(_))));

    let req: LoginRequest =
        serde_json::from_str(r#"{"email":"you@example.com","password":""}"#).unwrap();
    assert!(validate_request(&req).is_err());
}

#[test]
fn test_register_request_defaults_to_patient_role() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","password":"abcdef"}"#,
    )
    .unwrap();

    assert_eq!(req.role, Role::Patient);
    assert!(validate_request(&req).is_ok());
}

#[test]
fn test_register_request_validation() {
    let req: RegisterRequest = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","password":"abc","role":"DOCTOR"}"#,
    )
    .unwrap();
    assert_eq!(req.role, Role::Doctor);

    let err = validate_request(&req).unwrap_err();
    assert_eq!(err.code(), 400);
    assert!(err.user_message().contains("password"));
}

#[test]
fn test_register_request_rejects_unknown_role() {
    let result: Result<RegisterRequest, _> = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","password":"abcdef","role":"NURSE"}"#,
    );
    assert!(result.is_err());
}
