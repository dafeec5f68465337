//! 认证模块
//!
//! 无会话的凭据校验，两种角色各有独立的凭据集合：
//! - [`Role`] / [`LoginMode`] - 角色选择
//! - [`password`] - Argon2 哈希
//! - [`CredentialChecker`] - 登录校验流程

pub mod password;
pub mod role;

pub use role::{LoginMode, Role};

use shared::{AppError, AppResult};

use crate::db::DbPool;
use crate::db::models::{Credential, CredentialCreate};
use crate::db::repository::CredentialRepository;

/// Checks identifier/secret pairs against the credential collections
#[derive(Clone, Debug)]
pub struct CredentialChecker {
    pool: DbPool,
}

impl CredentialChecker {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Role-aware check
    ///
    /// Both inputs are folded (trim + lowercase) before the lookup. Only the
    /// role's own collection is searched.
    pub async fn check_role(&self, role: Role, identifier: &str, secret: &str) -> AppResult<bool> {
        let identifier = password::fold(identifier);
        let secret = password::fold(secret);
        if identifier.is_empty() {
            return Ok(false);
        }

        let candidates = {
            let conn = self.pool.acquire().await?;
            CredentialRepository::new(&conn, role)
                .find_by_folded_identifier(&identifier)
                .await?
        };

        let matched = verify_any(candidates, secret, |c| c.folded_hash.clone()).await?;
        if matched {
            tracing::info!(role = %role, identifier = %identifier, "Login succeeded");
        } else {
            tracing::warn!(role = %role, identifier = %identifier, "Login failed - invalid credentials");
        }
        Ok(matched)
    }

    /// Legacy check: exact identifier and secret against the admin collection
    pub async fn check_legacy(&self, identifier: &str, secret: &str) -> AppResult<bool> {
        if identifier.is_empty() {
            return Ok(false);
        }

        let candidates = {
            let conn = self.pool.acquire().await?;
            CredentialRepository::new(&conn, Role::Admin)
                .find_by_identifier(identifier)
                .await?
        };

        let matched = verify_any(candidates, secret.to_string(), |c| c.secret_hash.clone()).await?;
        if !matched {
            tracing::warn!(identifier = %identifier, "Legacy login failed - invalid credentials");
        }
        Ok(matched)
    }
}

/// Verify `secret` against each candidate on the blocking pool
async fn verify_any(
    candidates: Vec<Credential>,
    secret: String,
    hash_of: impl Fn(&Credential) -> String,
) -> AppResult<bool> {
    if candidates.is_empty() {
        return Ok(false);
    }
    let hashes: Vec<String> = candidates.iter().map(hash_of).collect();

    tokio::task::spawn_blocking(move || {
        hashes
            .iter()
            .any(|stored| password::verify_secret(&secret, stored))
    })
    .await
    .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
}

/// Build the insert payload for a new credential (both hashes)
pub async fn new_credential(identifier: &str, secret: &str) -> AppResult<CredentialCreate> {
    let identifier = identifier.trim().to_string();
    let secret = secret.to_string();

    let (secret_hash, folded_hash) = tokio::task::spawn_blocking(move || {
        let exact = password::hash_secret(&secret)?;
        let folded = password::hash_secret(&password::fold(&secret))?;
        Ok::<_, argon2::password_hash::Error>((exact, folded))
    })
    .await
    .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    Ok(CredentialCreate {
        identifier,
        secret_hash,
        folded_hash,
        created_at: shared::util::now_millis(),
    })
}
