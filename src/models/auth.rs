//! Authentication-related models

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Authentication result handed back to the client
///
/// Both fields are stored verbatim. The token is opaque here; whoever issues
/// it also validates it. `patient_id` stays `None` when the authenticated
/// account does not resolve to a patient record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub patient_id: Option<i64>,
}

impl AuthResponse {
    pub fn new(token: impl Into<String>, patient_id: Option<i64>) -> Self {
        Self {
            token: Some(token.into()),
            patient_id,
        }
    }
}

impl IntoResponse for AuthResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "请输入有效的邮箱地址"))]
    pub email: String,
    #[validate(length(min = 1, message = "密码不能为空"))]
    pub password: String,
}

/// Account role chosen at registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
    WellnessProvider,
    Admin,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "姓名不能为空"))]
    pub name: String,
    #[validate(email(message = "请输入有效的邮箱地址"))]
    pub email: String,
    #[validate(length(min = 6, message = "密码至少 6 个字符"))]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}
