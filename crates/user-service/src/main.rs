//! 用户数据服务
//!
//! 提供用户查询和批量合成数据生成的 REST API。

use axum::{Json, Router, http::HeaderValue, middleware, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use user_service::{routes, state::AppState};
use usergen_shared::{config::AppConfig, database::Database, observability};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：config/*.toml + USERGEN_ 前缀环境变量
    let config = AppConfig::load("user-service").unwrap_or_default();

    observability::init(&config.observability)?;

    info!("Starting user-service on {}", config.server_addr());

    // 初始化基础设施
    let db = Database::connect(&config.database).await?;
    if config.database.run_migrations {
        db.run_migrations().await?;
    }

    // CORS 配置：通过 USERGEN_CORS_ORIGINS 环境变量控制允许的来源。
    // 默认放开所有来源（与演示场景一致）；生产环境应设置为具体域名。
    let allowed_origins =
        std::env::var("USERGEN_CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let cors = if allowed_origins == "*" {
        if config.is_production() {
            warn!("USERGEN_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        info!("CORS allowed_origins: * (all origins)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        info!("CORS allowed_origins: {}", allowed_origins);
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = AppState::new(db.pool().clone());

    let app = Router::new()
        .merge(routes::api_routes())
        .route("/health", get(health_check))
        .route(
            "/ready",
            get({
                let db_for_ready = db;
                move || readiness_check(db_for_ready.clone())
            }),
        )
        .layer(cors)
        // 可观测性中间件：请求追踪和请求 ID
        .layer(middleware::from_fn(
            observability::middleware::http_tracing,
        ))
        .layer(middleware::from_fn(observability::middleware::request_id))
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// 容器环境通过 SIGTERM 通知进程停止；本地开发通过 Ctrl+C。
/// 收到任一信号后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "user-service"
    }))
}

/// 就绪探针：检查数据库连接是否可用
async fn readiness_check(db: Database) -> Json<serde_json::Value> {
    let db_ok = db.health_check().await.is_ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": "user-service",
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
