//! 优雅关闭信号
//! 系统信号只监听一次，通过 watch 通道广播给所有等待方

use std::future::Future;
use tokio::signal;
use tokio::sync::watch;

/// 关闭信号句柄，可克隆后分发给多个等待方
#[derive(Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// 监听 Ctrl+C 与 SIGTERM
    pub fn listen() -> Self {
        Self::from_future(wait_for_signal())
    }

    /// 以任意 future 作为关闭触发源，触发源只会被执行一次
    pub fn from_future<F>(trigger: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (tx, rx) = watch::channel(false);
        tokio::spawn(async move {
            trigger.await;
            let _ = tx.send(true);
        });
        Self { rx }
    }

    /// 等待关闭信号
    pub async fn wait(mut self) {
        // 发送端在未触发时被丢弃，视为永不关闭
        if self.rx.wait_for(|triggered| *triggered).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Terminate signal received, starting graceful shutdown");
        },
    }
}
