//! 批量生成 API 处理器
//!
//! 生成 N 条合成用户记录并在单个事务中全量写入。
//! 生成是纯内存计算，写入是全有或全无：任一条失败整批回滚。

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::{
    dto::{ApiResponse, GenerateUsersDto},
    error::UserServiceError,
    generator::UserGenerator,
    repository::UserRepository,
    state::AppState,
};

/// 单次请求允许生成的记录数上限
///
/// 上限防止单个请求占用无界内存和超长事务。
pub const MAX_GENERATE_COUNT: u32 = 10_000;

/// 批量生成合成用户
///
/// POST /generate-users/:count
///
/// count 为 0 合法：生成空批次，事务平凡提交，报告 0 条写入。
/// 负数和非数字路径段由 u32 提取器在进入本函数前拒绝（400）。
/// 重复调用不幂等：每次生成全新随机值并追加写入。
pub async fn generate_users(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> Result<(StatusCode, Json<ApiResponse<GenerateUsersDto>>), UserServiceError> {
    if count > MAX_GENERATE_COUNT {
        return Err(UserServiceError::Validation(format!(
            "count 超出上限: {} > {}",
            count, MAX_GENERATE_COUNT
        )));
    }

    // 先生成后写入，两步严格串行
    let records = UserGenerator::new().generate(count);
    let repo = UserRepository::new(state.pool.clone());
    let created = repo.insert_batch(&records).await?;

    info!(count = created, "Synthetic users created");

    let dto = GenerateUsersDto {
        requested: count,
        created,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            dto,
            format!("{} users created successfully", count),
        )),
    ))
}
