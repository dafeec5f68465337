//! Reservation Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::DbConn;
use crate::db::models::{Reservation, ReservationCreate};
use surrealdb::RecordId;

pub const TABLE: &str = "reservation";

pub struct ReservationRepository<'c> {
    base: BaseRepository<'c>,
}

impl<'c> ReservationRepository<'c> {
    pub fn new(conn: &'c DbConn) -> Self {
        Self {
            base: BaseRepository::new(conn),
        }
    }

    /// All reservations in insertion order
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let conn = self.base.conn();
        let mut result = conn
            .run(
                conn.db()
                    .query("SELECT * FROM reservation ORDER BY id ASC"),
            )
            .await?;
        Ok(result.take(0)?)
    }

    /// Insert unconditionally; duplicates become distinct records
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        let id = RecordId::from_table_key(TABLE, shared::util::snowflake_id());
        let conn = self.base.conn();
        let mut result = conn
            .run(
                conn.db()
                    .query("CREATE $id CONTENT $data RETURN AFTER")
                    .bind(("id", id))
                    .bind(("data", data)),
            )
            .await?;
        let created: Vec<Reservation> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }
}
