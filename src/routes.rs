//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

use crate::{config::CorsConfig, handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    Router::new()
        .merge(public_routes)
        .fallback(handlers::fallback)
        .layer(RequestBodyLimitLayer::new(state.config.server.request_body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&state.config.cors))
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}

/// 构建 CORS 层
/// 未配置来源时允许任意来源，无法解析的来源会被忽略
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = match &config.allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        }
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
