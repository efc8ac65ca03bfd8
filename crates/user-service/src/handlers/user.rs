//! 用户查询 API 处理器
//!
//! 实现根路径问候、单用户查询和全量用户列表

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    dto::{ApiResponse, UserDto},
    error::UserServiceError,
    repository::UserRepository,
    state::AppState,
};

/// 根路径问候
///
/// GET /
pub async fn root() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(serde_json::json!({
        "message": "hello"
    })))
}

/// 按 ID 查询单个用户
///
/// GET /user/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserDto>>, UserServiceError> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_id(id)
        .await?
        .ok_or(UserServiceError::UserNotFound(id))?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// 查询全部用户
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, UserServiceError> {
    let repo = UserRepository::new(state.pool.clone());

    let users: Vec<UserDto> = repo
        .list_all()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok(Json(ApiResponse::success(users)))
}
