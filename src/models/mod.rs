//! 数据模型模块
//! 认证结果载体与客户端请求体

pub mod auth;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, Role};
