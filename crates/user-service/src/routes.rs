//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// 构建用户查询路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::user::root))
        .route("/user/{id}", get(handlers::user::get_user))
        .route("/users", get(handlers::user::list_users))
}

/// 构建批量生成路由
fn generate_routes() -> Router<AppState> {
    Router::new().route(
        "/generate-users/{count}",
        post(handlers::generate::generate_users),
    )
}

/// 构建完整的 API 路由
///
/// 返回所有 API 路由（不含健康检查，由调用方在 main.rs 中挂载）
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(generate_routes())
}
