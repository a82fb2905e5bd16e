//! Password hashing utilities

use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::domain::{CredentialHasher, DomainError, DomainResult};

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

/// bcrypt-backed [`CredentialHasher`].
///
/// Hashing runs inline on the calling task.
pub struct BcryptHasher;

#[async_trait]
impl CredentialHasher for BcryptHasher {
    async fn hash(&self, plaintext: &str) -> DomainResult<String> {
        hash_password(plaintext).map_err(|e| DomainError::Crypto(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hashed = hash_password("correct horse").unwrap();
        assert_ne!(hashed, "correct horse");
        assert!(verify_password("correct horse", &hashed).unwrap());
        assert!(!verify_password("wrong horse", &hashed).unwrap());
    }

    #[tokio::test]
    async fn hasher_output_is_verifiable() {
        let hashed = BcryptHasher.hash("s3cret").await.unwrap();
        assert!(verify_password("s3cret", &hashed).unwrap());
    }
}
