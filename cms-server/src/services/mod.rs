//! 服务模块
//!
//! - [`upload`] - 菜品图片存储 (写入、读取、尽力删除)

pub mod upload;

pub use upload::{ImageStore, UPLOAD_URL_PREFIX};
