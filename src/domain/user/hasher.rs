use async_trait::async_trait;

use crate::domain::DomainResult;

/// Hashing strategy for account credentials.
///
/// The service passes plaintext in and stores whatever comes back; the
/// choice of algorithm lives entirely behind this seam.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> DomainResult<String>;
}
