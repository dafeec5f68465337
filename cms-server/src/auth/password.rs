//! Argon2 secret hashing

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Trim and lowercase, the normalisation used by the role-aware login
pub fn fold(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Hash a secret with a fresh salt
pub fn hash_secret(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a secret against a stored PHC string
///
/// A malformed stored hash never verifies.
pub fn verify_secret(secret: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored credential hash is malformed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_secret("password123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_secret("password123", &hash));
        assert!(!verify_secret("Password123", &hash));
    }

    #[test]
    fn salts_differ() {
        assert_ne!(hash_secret("same").unwrap(), hash_secret("same").unwrap());
    }

    #[test]
    fn malformed_hash_fails_closed() {
        assert!(!verify_secret("password123", "password123"));
    }

    #[test]
    fn fold_trims_and_lowercases() {
        assert_eq!(fold("  Admin "), "admin");
    }
}
