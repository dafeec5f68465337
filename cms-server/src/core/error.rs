//! 启动与运行期错误
//!
//! 请求级错误使用 `shared::AppError`；这里只覆盖进程级失败。

use shared::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("初始化失败: {0}")]
    Init(#[from] AppError),
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
