//! Database Module
//!
//! 嵌入式 SurrealDB：磁盘使用 SurrealKV 引擎，测试使用内存引擎。
//!
//! - [`DbService`] - 打开数据库并定义表结构
//! - [`DbPool`] - 全局连接池 (信号量限流 + 超时)
//! - [`repository`] - 各集合的 CRUD

pub mod models;
pub mod pool;
pub mod repository;
pub mod seed;

pub use pool::{DbConn, DbPool};

use std::path::Path;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, SurrealKv};

const NAMESPACE: &str = "cms";
const DATABASE: &str = "cms";

/// 表结构定义 (幂等)
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS admin_credential SCHEMALESS;
DEFINE INDEX IF NOT EXISTS admin_credential_identifier ON admin_credential FIELDS identifier;
DEFINE TABLE IF NOT EXISTS staff_credential SCHEMALESS;
DEFINE INDEX IF NOT EXISTS staff_credential_identifier ON staff_credential FIELDS identifier;
DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
DEFINE TABLE IF NOT EXISTS reservation SCHEMALESS;
"#;

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `path`
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<SurrealKv>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        tracing::info!(path = %path.display(), "Database opened (SurrealKV)");
        Self::prepare(db).await
    }

    /// In-memory database, used by tests
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        tracing::debug!("Database schema ready");

        Ok(Self { db })
    }
}
