//! 统一可观测性模块
//!
//! 提供日志订阅器的统一初始化和 HTTP 追踪中间件。
//! 服务通过单一入口点配置日志，确保一致的输出格式。

pub mod middleware;

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::ObservabilityConfig;

/// 初始化 tracing 日志订阅器
///
/// 环境变量 RUST_LOG 优先于配置文件中的 log_level。
/// log_format 为 "json" 时输出结构化日志，否则为人类可读格式。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    // 构建环境过滤器
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 构建日志层
    let fmt_layer = if config.log_format == "json" {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent_safe() {
        let config = ObservabilityConfig::default();
        // 第一次初始化可能成功也可能因测试进程已有订阅器而失败，
        // 第二次必然失败，两种情况都不应 panic
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
