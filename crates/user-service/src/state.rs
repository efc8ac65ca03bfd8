//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use sqlx::PgPool;

/// Axum 应用共享状态
///
/// 仅持有数据库连接池；各 handler 按需从池中借出连接，
/// 事务期间独占持有，结束后归还。
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL 连接池
    pub pool: PgPool,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
