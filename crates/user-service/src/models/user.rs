//! 用户实体模型
//!
//! users 表的类型化投影。读端点不返回无结构的动态行，
//! 统一走这里定义的实体形状。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 生成器允许的最小年龄
pub const MIN_AGE: i32 = 18;
/// 生成器允许的最大年龄
pub const MAX_AGE: i32 = 99;

/// 持久化用户（含数据库分配的主键）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

/// 待写入的用户记录
///
/// 由生成器按值创建，交给批量写入器后要么整体持久化、
/// 要么在回滚时整体丢弃，不存在部分持久化的中间态。
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// 字段是否满足结构约束（非空姓名、含域名的邮箱、年龄在闭区间内）
    pub fn is_structurally_valid(&self) -> bool {
        !self.name.is_empty()
            && self.email.contains('@')
            && self.age >= MIN_AGE
            && self.age <= MAX_AGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewUser {
        NewUser {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            age: 30,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_structurally_valid() {
        assert!(sample().is_structurally_valid());
    }

    #[test]
    fn test_empty_name_invalid() {
        let mut record = sample();
        record.name = String::new();
        assert!(!record.is_structurally_valid());
    }

    #[test]
    fn test_age_bounds() {
        let mut record = sample();
        record.age = MIN_AGE;
        assert!(record.is_structurally_valid());
        record.age = MAX_AGE;
        assert!(record.is_structurally_valid());
        record.age = MIN_AGE - 1;
        assert!(!record.is_structurally_valid());
        record.age = MAX_AGE + 1;
        assert!(!record.is_structurally_valid());
    }

    #[test]
    fn test_user_serialization_camel_case() {
        let user = User {
            id: 1,
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            age: 30,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
