//! 日志初始化
//!
//! 受护指令的日志默认走 `tracing`；这里提供一个开箱即用的
//! 订阅器装配：`RUST_LOG` 环境变量过滤 + `log` 宏桥接。
//! 库代码不应自动初始化全局订阅器，由应用显式调用。

/// 初始化 `tracing` 订阅器（幂等）
///
/// - 环境变量过滤（`RUST_LOG`，默认 `info`）
/// - `log` 宏事件桥接进 `tracing`
///
/// 重复调用是安全的：已初始化时静默返回。
pub fn init_tracing() {
    // log -> tracing 桥接（失败说明已经初始化过）
    let _ = tracing_log::LogTracer::init();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
