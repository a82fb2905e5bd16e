use async_trait::async_trait;

use super::{NewUser, UserAccount, UserChanges, UserListFilter};
use crate::domain::DomainResult;

/// Persistence contract for user accounts.
///
/// Lookups that miss return `Ok(None)`. `update` and `delete` of a
/// missing id yield `DomainError::NotFound`, and email uniqueness is
/// enforced here so every implementation rejects duplicates the same
/// way.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch by id. Soft-deleted accounts are only visible when
    /// `include_deleted` is set.
    async fn get(&self, id: &str, include_deleted: bool) -> DomainResult<Option<UserAccount>>;

    /// Fetch a live account by exact email.
    async fn get_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>>;

    /// List accounts matching `filter`, ordered by creation time.
    async fn get_list(&self, filter: &UserListFilter) -> DomainResult<Vec<UserAccount>>;

    /// Fetch the live admin account, if one exists.
    async fn get_admin(&self) -> DomainResult<Option<UserAccount>>;

    /// Apply a partial update and return the stored result.
    async fn update(&self, id: &str, changes: UserChanges) -> DomainResult<UserAccount>;

    /// Persist a new account and return it with id and timestamps set.
    async fn create(&self, user: NewUser) -> DomainResult<UserAccount>;

    /// Soft-delete: mark the account deleted at the current instant.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
