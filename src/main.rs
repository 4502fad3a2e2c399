//! 患者服务主入口

use patient_service::{
    config::AppConfig, db, handlers::health, middleware::AppState, routes, shutdown::Shutdown,
    telemetry,
};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" => {
                println!("patient-service {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("未知参数: {}", args[1]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    // 加载 .env 文件（开发环境）
    // 按优先级加载：.env.<PATIENT_ENV> 或 .env.local > .env.development > .env
    if let Ok(name) = std::env::var("PATIENT_ENV") {
        dotenv::from_filename(format!(".env.{}", name)).ok();
    } else {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env.development").ok();
        dotenv::dotenv().ok();
    }

    health::set_start_time();

    // 1. 加载配置
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    // 2. 初始化日志
    telemetry::init_telemetry(&config.logging);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Patient service starting...");

    // 3. 数据库连接池
    let db_pool = db::create_pool(&config.database).await?;

    // 4. 构建应用状态与路由
    let app_state = Arc::new(AppState {
        db: db_pool,
        config: config.clone(),
    });
    let app = routes::create_router(app_state);

    // 5. 启动服务器
    let addr = &config.server.addr;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(addr = %addr, "Server listening");

    let shutdown_timeout = Duration::from_secs(config.server.graceful_shutdown_timeout_secs);
    let shutdown = Shutdown::listen();
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown.clone().wait());

    // 收到关闭信号后，超时仍未处理完的请求会被放弃
    tokio::select! {
        result = server.into_future() => result?,
        _ = async {
            shutdown.wait().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            tracing::warn!("Graceful shutdown timeout reached, forcing exit");
        }
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// 打印帮助信息
fn print_help() {
    println!("patient-service {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("用法: patient-service [选项]");
    println!();
    println!("选项:");
    println!("  --version     打印版本信息并退出");
    println!("  --help        打印此帮助信息并退出");
    println!();
    println!("环境变量:");
    println!("  所有配置通过 PATIENT_ 前缀的环境变量完成");
    println!("  例如 PATIENT_DATABASE__URL、PATIENT_SERVER__ADDR、PATIENT_LOGGING__LEVEL");
}
