//! 数据传输对象定义

mod response;

pub use response::{ApiResponse, GenerateUsersDto, UserDto};
