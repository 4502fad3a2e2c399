//! 患者服务库
//! 认证结果载体以及服务骨架（配置、日志、错误模型、健康检查）

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod shutdown;
pub mod telemetry;
