//! HTTP 处理器模块

pub mod health;

use crate::error::AppError;
use axum::http::Uri;

/// 未匹配路由的兜底处理器
pub async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
