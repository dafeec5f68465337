//! Credential Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::auth::Role;
use crate::db::DbConn;
use crate::db::models::{Credential, CredentialCreate};
use surrealdb::RecordId;

pub struct CredentialRepository<'c> {
    base: BaseRepository<'c>,
    role: Role,
}

impl<'c> CredentialRepository<'c> {
    pub fn new(conn: &'c DbConn, role: Role) -> Self {
        Self {
            base: BaseRepository::new(conn),
            role,
        }
    }

    /// Records whose identifier equals `identifier` exactly
    pub async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Vec<Credential>> {
        let sql = format!(
            "SELECT * FROM {} WHERE identifier = $identifier",
            self.role.table()
        );
        let conn = self.base.conn();
        let mut result = conn
            .run(conn.db().query(sql).bind(("identifier", identifier.to_string())))
            .await?;
        Ok(result.take(0)?)
    }

    /// Records whose trimmed lowercase identifier equals `folded`
    pub async fn find_by_folded_identifier(&self, folded: &str) -> RepoResult<Vec<Credential>> {
        let sql = format!(
            "SELECT * FROM {} WHERE string::lowercase(string::trim(identifier)) = $folded",
            self.role.table()
        );
        let conn = self.base.conn();
        let mut result = conn
            .run(conn.db().query(sql).bind(("folded", folded.to_string())))
            .await?;
        Ok(result.take(0)?)
    }

    /// Whether the collection holds no credential at all
    pub async fn is_empty(&self) -> RepoResult<bool> {
        let sql = format!("SELECT VALUE id FROM {} LIMIT 1", self.role.table());
        let conn = self.base.conn();
        let mut result = conn.run(conn.db().query(sql)).await?;
        let ids: Vec<RecordId> = result.take(0)?;
        Ok(ids.is_empty())
    }

    pub async fn create(&self, data: CredentialCreate) -> RepoResult<Credential> {
        let id = RecordId::from_table_key(self.role.table(), shared::util::snowflake_id());
        let conn = self.base.conn();
        let mut result = conn
            .run(
                conn.db()
                    .query("CREATE $id CONTENT $data RETURN AFTER")
                    .bind(("id", id))
                    .bind(("data", data)),
            )
            .await?;
        let created: Vec<Credential> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create credential".to_string()))
    }
}
