//! HTTP 中间件
//!
//! - [`logging`] - 请求日志

pub mod logging;

pub use logging::logging_middleware;
