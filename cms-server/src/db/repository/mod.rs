//! Repository Module
//!
//! 每个集合一个仓库；所有操作都通过 [`DbConn`] 执行，受查询超时约束。

pub mod credential;
pub mod menu_item;
pub mod reservation;

pub use credential::CredentialRepository;
pub use menu_item::MenuItemRepository;
pub use reservation::ReservationRepository;

use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::DbConn;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Timed out: {0}")]
    Timeout(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Timeout(msg) => AppError::timeout(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 记录 key 为 snowflake i64 (shared::util::snowflake_id)：
//   - 创建: RecordId::from_table_key("menu_item", key)
//   - 对外: models::record_key(&id) -> "123..."
//   - 解析: models::parse_key("menu_item", "123...")，非法 key 返回 None
//   - 查询中以 $id 绑定 RecordId，不拼接字符串

/// Base repository with a borrowed pool connection
#[derive(Clone, Copy)]
pub struct BaseRepository<'c> {
    conn: &'c DbConn,
}

impl<'c> BaseRepository<'c> {
    pub fn new(conn: &'c DbConn) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &'c DbConn {
        self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_map_to_app_codes() {
        let err: AppError = RepoError::Timeout("query exceeded 5000ms".into()).into();
        assert_eq!(err.code, ErrorCode::TimeoutError);

        let err: AppError = RepoError::Database("disk full".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);

        let err: AppError = RepoError::NotFound("menu_item:1".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
