//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::DbConn;
use crate::db::models::{MenuItem, MenuItemCreate};
use shared::models::MenuItemUpdate;
use surrealdb::RecordId;

pub const TABLE: &str = "menu_item";

pub struct MenuItemRepository<'c> {
    base: BaseRepository<'c>,
}

impl<'c> MenuItemRepository<'c> {
    pub fn new(conn: &'c DbConn) -> Self {
        Self {
            base: BaseRepository::new(conn),
        }
    }

    /// All items in insertion order
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let conn = self.base.conn();
        let mut result = conn
            .run(
                conn.db()
                    .query("SELECT * FROM menu_item ORDER BY id ASC"),
            )
            .await?;
        Ok(result.take(0)?)
    }

    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<MenuItem>> {
        let conn = self.base.conn();
        let mut result = conn
            .run(conn.db().query("SELECT * FROM $id").bind(("id", id.clone())))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
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
        let created: Vec<MenuItem> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Merge the supplied fields; `NotFound` if the record is gone
    pub async fn update(&self, id: &RecordId, patch: MenuItemUpdate) -> RepoResult<MenuItem> {
        let conn = self.base.conn();
        let mut result = conn
            .run(
                conn.db()
                    .query("UPDATE $id MERGE $patch RETURN AFTER")
                    .bind(("id", id.clone()))
                    .bind(("patch", patch)),
            )
            .await?;
        let updated: Vec<MenuItem> = result.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Delete a record, returning it as it was; `None` if it did not exist
    pub async fn delete(&self, id: &RecordId) -> RepoResult<Option<MenuItem>> {
        let conn = self.base.conn();
        let mut result = conn
            .run(
                conn.db()
                    .query("DELETE $id RETURN BEFORE")
                    .bind(("id", id.clone())),
            )
            .await?;
        let deleted: Vec<MenuItem> = result.take(0)?;
        Ok(deleted.into_iter().next())
    }
}
