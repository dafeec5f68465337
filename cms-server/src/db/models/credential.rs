//! Credential Model
//!
//! admin_credential / staff_credential 共用同一结构。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Stored credential
///
/// Two hashes are kept: `secret_hash` covers the secret exactly as issued,
/// `folded_hash` covers its trimmed lowercase form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: RecordId,
    pub identifier: String,
    #[serde(skip_serializing)]
    pub secret_hash: String,
    #[serde(skip_serializing)]
    pub folded_hash: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Insert payload (hashes already computed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialCreate {
    pub identifier: String,
    pub secret_hash: String,
    pub folded_hash: String,
    pub created_at: i64,
}
