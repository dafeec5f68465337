//! 连接池
//!
//! 嵌入式 SurrealDB 本身是一个共享句柄；连接池负责限制并发操作数，
//! 并为获取连接和每次查询加上超时。处理器在入口获取 [`DbConn`]，
//! guard 被 drop 时归还名额，所有返回路径 (包括错误) 都会释放。

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use super::repository::{RepoError, RepoResult};

/// Process-wide bounded pool over the shared store handle
#[derive(Clone, Debug)]
pub struct DbPool {
    db: Surreal<Db>,
    permits: Arc<Semaphore>,
    max_connections: usize,
    acquire_timeout: Duration,
    query_timeout: Duration,
}

impl DbPool {
    pub fn new(
        db: Surreal<Db>,
        max_connections: usize,
        acquire_timeout: Duration,
        query_timeout: Duration,
    ) -> Self {
        let max_connections = max_connections.max(1);
        Self {
            db,
            permits: Arc::new(Semaphore::new(max_connections)),
            max_connections,
            acquire_timeout,
            query_timeout,
        }
    }

    /// Acquire a connection slot, waiting at most the acquire timeout
    pub async fn acquire(&self) -> RepoResult<DbConn> {
        let permit = tokio::time::timeout(self.acquire_timeout, self.permits.clone().acquire_owned())
            .await
            .map_err(|_| {
                tracing::warn!(
                    max_connections = self.max_connections,
                    timeout_ms = self.acquire_timeout.as_millis() as u64,
                    "Timed out waiting for a database connection"
                );
                RepoError::Timeout("waiting for a database connection".into())
            })?
            .map_err(|_| RepoError::Database("connection pool closed".into()))?;

        Ok(DbConn {
            db: self.db.clone(),
            query_timeout: self.query_timeout,
            _permit: permit,
        })
    }

    /// Round-trip a trivial query through the pool
    pub async fn ping(&self) -> RepoResult<()> {
        let conn = self.acquire().await?;
        conn.run(conn.db().query("RETURN true")).await?.check()?;
        Ok(())
    }

    /// Free slots right now
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    pub fn max_connections(&self) -> usize {
        self.max_connections
    }
}

/// Scoped connection; the slot is returned on drop
pub struct DbConn {
    db: Surreal<Db>,
    query_timeout: Duration,
    _permit: OwnedSemaphorePermit,
}

impl DbConn {
    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Run one store operation under the query timeout
    pub async fn run<F, T>(&self, op: F) -> RepoResult<T>
    where
        F: IntoFuture<Output = Result<T, surrealdb::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, op).await {
            Ok(result) => result.map_err(RepoError::from),
            Err(_) => Err(RepoError::Timeout(format!(
                "query exceeded {}ms",
                self.query_timeout.as_millis()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn pool(max: usize, acquire_ms: u64) -> DbPool {
        let service = DbService::memory().await.unwrap();
        DbPool::new(
            service.db,
            max,
            Duration::from_millis(acquire_ms),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn guard_releases_slot_on_drop() {
        let pool = pool(2, 100).await;
        assert_eq!(pool.available(), 2);
        {
            let _a = pool.acquire().await.unwrap();
            let _b = pool.acquire().await.unwrap();
            assert_eq!(pool.available(), 0);
        }
        assert_eq!(pool.available(), 2);
    }

    #[tokio::test]
    async fn exhausted_pool_times_out() {
        let pool = pool(1, 20).await;
        let _held = pool.acquire().await.unwrap();
        let err = pool.acquire().await.err().unwrap();
        assert!(matches!(err, RepoError::Timeout(_)));
    }

    #[tokio::test]
    async fn zero_max_connections_is_clamped() {
        let pool = pool(0, 20).await;
        assert_eq!(pool.max_connections(), 1);
        assert!(pool.acquire().await.is_ok());
    }

    #[tokio::test]
    async fn ping_round_trips() {
        let pool = pool(1, 100).await;
        pool.ping().await.unwrap();
        assert_eq!(pool.available(), 1);
    }

    #[tokio::test]
    async fn run_executes_query() {
        let pool = pool(1, 100).await;
        let conn = pool.acquire().await.unwrap();
        let mut response = conn.run(conn.db().query("RETURN 1 + 1")).await.unwrap();
        let value: Option<i64> = response.take(0).unwrap();
        assert_eq!(value, Some(2));
    }
}
