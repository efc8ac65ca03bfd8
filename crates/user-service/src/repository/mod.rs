//! 数据访问层

mod user_repo;

pub use user_repo::UserRepository;
