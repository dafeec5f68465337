//! 初始凭据
//!
//! 启动时为每个角色写入配置中的初始凭据，仅当该角色的集合为空时执行。

use shared::AppResult;

use crate::auth::{self, Role};
use crate::core::config::SeedCredential;
use crate::db::DbPool;
use crate::db::repository::CredentialRepository;

/// Seed one role's collection; returns whether a record was written
pub async fn seed_role(pool: &DbPool, role: Role, seed: Option<&SeedCredential>) -> AppResult<bool> {
    let Some(seed) = seed else {
        tracing::debug!(role = %role, "No seed credential configured");
        return Ok(false);
    };

    let conn = pool.acquire().await?;
    let repo = CredentialRepository::new(&conn, role);
    if !repo.is_empty().await? {
        return Ok(false);
    }

    let data = auth::new_credential(&seed.identifier, &seed.secret).await?;
    repo.create(data).await?;
    tracing::info!(role = %role, identifier = %seed.identifier, "Seeded initial credential");
    Ok(true)
}

/// Seed both roles
pub async fn seed_credentials(
    pool: &DbPool,
    admin: Option<&SeedCredential>,
    staff: Option<&SeedCredential>,
) -> AppResult<()> {
    seed_role(pool, Role::Admin, admin).await?;
    seed_role(pool, Role::Staff, staff).await?;
    Ok(())
}
