//! 日志初始化
//!
//! 供宿主应用在启动时调用；核心库内部只使用 tracing 宏，
//! 不假定任何订阅者已安装

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// 按日志配置安装全局 tracing 订阅者
///
/// `RUST_LOG` 环境变量存在时优先于配置的级别。
/// 已有订阅者安装时静默返回（库不抢占宿主的日志设置）。
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    }
}
