//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }

    /// 创建成功响应（自定义消息）
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: message.into(),
            data: Some(data),
        }
    }
}

/// 用户响应 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
        }
    }
}

/// 批量生成结果 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateUsersDto {
    /// 请求生成的记录数
    pub requested: u32,
    /// 实际提交成功的记录数（与 requested 相等，否则整批回滚）
    pub created: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(1);
        assert!(response.success);
        assert_eq!(response.code, "SUCCESS");
        assert_eq!(response.data, Some(1));
    }

    #[test]
    fn test_api_response_custom_message() {
        let response = ApiResponse::success_with_message(
            GenerateUsersDto {
                requested: 5,
                created: 5,
            },
            "5 users created successfully",
        );
        assert_eq!(response.message, "5 users created successfully");
    }

    #[test]
    fn test_response_serialization_camel_case() {
        let dto = GenerateUsersDto {
            requested: 3,
            created: 3,
        };
        let json = serde_json::to_value(ApiResponse::success(dto)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["requested"], 3);
        assert_eq!(json["data"]["created"], 3);
    }

    #[test]
    fn test_user_dto_from_model() {
        let user = User {
            id: 7,
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            age: 30,
            created_at: Utc::now(),
        };
        let dto = UserDto::from(user.clone());
        assert_eq!(dto.id, user.id);
        assert_eq!(dto.email, user.email);
    }
}
