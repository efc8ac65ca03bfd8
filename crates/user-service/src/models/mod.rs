//! 实体模型定义

mod user;

pub use user::{MAX_AGE, MIN_AGE, NewUser, User};
