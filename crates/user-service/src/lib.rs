//! 用户数据服务
//!
//! 提供 users 表的查询端点和批量合成数据生成端点。
//!
//! ## 核心功能
//!
//! - **用户查询**：按 ID 查询单个用户、查询全部用户
//! - **批量生成**：一次请求生成 N 条合成用户记录，事务内全量写入，
//!   任一条失败则整批回滚（全有或全无）
//!
//! ## 模块结构
//!
//! - `dto`: 响应的数据传输对象
//! - `models`: 用户实体模型
//! - `generator`: 合成用户记录生成器（纯内存，无 I/O）
//! - `repository`: 数据访问层，包含事务性批量写入
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据访问：sqlx (PostgreSQL)
//! - 合成数据：fake + rand
//! - 序列化：serde (camelCase)

pub mod dto;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;

// 重新导出核心类型
pub use dto::{ApiResponse, GenerateUsersDto, UserDto};
pub use error::{Result, UserServiceError};
pub use generator::UserGenerator;
pub use models::{MAX_AGE, MIN_AGE, NewUser, User};
pub use repository::UserRepository;
