//! 用户仓储
//!
//! 提供 users 表的数据访问，包含事务性批量写入。

use sqlx::PgPool;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{NewUser, User};

/// 用户仓储
///
/// 批量写入在单个事务中执行：全部成功则提交，任一失败则回滚，
/// 不会留下部分写入的行。事务独占持有一个池内连接，
/// 提交、回滚或出错丢弃时均归还。
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 按 ID 查询单个用户
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, age, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 列出所有用户
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, age, created_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// 统计用户总数
    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }

    /// 事务性批量写入
    ///
    /// 按输入顺序逐条插入，全部成功才提交并返回写入条数；
    /// 任一条插入或最终提交失败，整个事务回滚，存储状态保持调用前原样。
    /// 失败记录的位置仅记入日志，不回传给调用方。
    ///
    /// 不幂等：同一批记录重复调用会追加新行，无去重或 upsert 语义。
    pub async fn insert_batch(&self, records: &[NewUser]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        for (index, record) in records.iter().enumerate() {
            let result = sqlx::query(
                r#"
                INSERT INTO users (name, email, age, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&record.name)
            .bind(&record.email)
            .bind(record.age)
            .bind(record.created_at)
            .execute(&mut *tx)
            .await;

            if let Err(e) = result {
                warn!(failed_index = index, error = %e, "批量插入失败，回滚事务");
                // 显式回滚；即使回滚本身失败，事务 drop 时也会由驱动回滚
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "回滚执行失败");
                }
                return Err(e.into());
            }
        }

        tx.commit().await?;

        info!(count = records.len(), "批量写入提交完成");
        Ok(records.len() as u64)
    }
}
