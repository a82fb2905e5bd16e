//! Account management service
//!
//! All account business rules live here. Transports (HTTP handlers,
//! CLI commands) should be thin wrappers that delegate to this service.

use std::future::Future;
use std::sync::Arc;

use tracing::info;

use crate::domain::{
    AccountState, AuthenticatedCaller, CreateUserDto, CredentialHasher, DomainError,
    DomainResult, NewUser, UpdateUserDto, UserChanges, UserListFilter, UserStore, UserView,
};

use super::password::{generate_password, GENERATED_PASSWORD_LEN};

/// Outcome of an admin password reset.
#[derive(Debug, Clone)]
pub struct AdminPasswordReset {
    /// The plaintext now in force. Shown to the operator exactly once,
    /// never logged.
    pub password: String,
    /// `true` when the password came from the prompt, `false` when it
    /// was generated.
    pub provided: bool,
}

/// Account service. Orchestrates all user-account use-cases.
///
/// Generic over `S: UserStore` and `H: CredentialHasher` so it stays
/// decoupled from the concrete persistence and crypto layers.
pub struct UserAccountService<S: UserStore, H: CredentialHasher> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S: UserStore, H: CredentialHasher> UserAccountService<S, H> {
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List every account except the caller's own.
    pub async fn list(
        &self,
        caller: &AuthenticatedCaller,
        include_deleted: bool,
    ) -> DomainResult<Vec<UserView>> {
        let filter = UserListFilter {
            exclude_id: Some(caller.id.clone()),
            include_deleted,
            admins_only: false,
        };
        let users = self.store.get_list(&filter).await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }

    /// Get a single account by id.
    pub async fn get_by_id(&self, id: &str, include_deleted: bool) -> DomainResult<UserView> {
        let user = self
            .store
            .get(id, include_deleted)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {} not found", id)))?;
        Ok(UserView::from(user))
    }

    /// Get the caller's own account.
    ///
    /// A caller whose account vanished mid-session gets `BadRequest`,
    /// not `NotFound`.
    pub async fn get_self(&self, caller: &AuthenticatedCaller) -> DomainResult<UserView> {
        let user = self.store.get(&caller.id, false).await?.ok_or_else(|| {
            DomainError::BadRequest("authenticated account no longer exists".into())
        })?;
        Ok(UserView::from(user))
    }

    /// Count accounts matching `filter`.
    pub async fn count(&self, filter: &UserListFilter) -> DomainResult<usize> {
        Ok(self.store.get_list(filter).await?.len())
    }

    // ── Commands ────────────────────────────────────────────────

    /// Apply a partial update to an account.
    ///
    /// Non-admin callers may only touch their own account, and admin
    /// rights can only ever be granted to the caller's own account.
    pub async fn update(
        &self,
        caller: &AuthenticatedCaller,
        request: UpdateUserDto,
    ) -> DomainResult<UserView> {
        if request.id != caller.id && !caller.is_admin {
            return Err(DomainError::Forbidden(
                "not allowed to update another user".into(),
            ));
        }
        if request.is_admin == Some(true) && request.id != caller.id {
            return Err(DomainError::BadRequest(
                "admin rights cannot be granted to another user".into(),
            ));
        }

        let target = self
            .store
            .get(&request.id, false)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {} not found", request.id)))?;

        // A changed email must not collide with a different live account.
        if let Some(email) = &request.email {
            if let Some(owner) = self.store.get_by_email(email).await? {
                if owner.id != target.id {
                    return Err(DomainError::BadRequest("email is already in use".into()));
                }
            }
        }

        let mut changes = UserChanges {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            is_admin: request.is_admin,
            should_change_password: request.should_change_password,
            ..UserChanges::default()
        };
        if let Some(password) = &request.password {
            changes.password_hash = Some(self.hasher.hash(password).await?);
        }

        let updated = self.store.update(&target.id, changes).await?;
        info!(user_id = %updated.id, "account updated");
        Ok(UserView::from(updated))
    }

    /// Create a regular (non-admin) account.
    ///
    /// Refused until an admin account exists; the first account is
    /// bootstrapped out-of-band.
    pub async fn create(&self, request: CreateUserDto) -> DomainResult<UserView> {
        if self.store.get_admin().await?.is_none() {
            return Err(DomainError::BadRequest("no admin account exists yet".into()));
        }

        if request.email.trim().is_empty() {
            return Err(DomainError::BadRequest("email must not be empty".into()));
        }
        if request.password.is_empty() {
            return Err(DomainError::BadRequest("password must not be empty".into()));
        }
        if self.store.get_by_email(&request.email).await?.is_some() {
            return Err(DomainError::BadRequest("email is already in use".into()));
        }

        let password_hash = self.hasher.hash(&request.password).await?;
        let created = self
            .store
            .create(NewUser {
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                is_admin: false,
                should_change_password: true,
            })
            .await?;

        info!(user_id = %created.id, email = %created.email, "account created");
        Ok(UserView::from(created))
    }

    /// Soft-delete an account. Admin only, and never the admin's own.
    pub async fn delete(&self, caller: &AuthenticatedCaller, target_id: &str) -> DomainResult<()> {
        if !caller.is_admin {
            return Err(DomainError::Forbidden("admin rights required".into()));
        }
        if target_id == caller.id {
            return Err(DomainError::Forbidden(
                "the admin account cannot delete itself".into(),
            ));
        }

        let target = self
            .store
            .get(target_id, false)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {} not found", target_id)))?;

        self.store.delete(&target.id).await?;
        info!(user_id = %target.id, "account soft-deleted");
        Ok(())
    }

    /// Bring a soft-deleted account back. Admin only.
    pub async fn restore(
        &self,
        caller: &AuthenticatedCaller,
        target_id: &str,
    ) -> DomainResult<UserView> {
        if !caller.is_admin {
            return Err(DomainError::Forbidden("admin rights required".into()));
        }

        let target = self
            .store
            .get(target_id, true)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {} not found", target_id)))?;

        let restored = self
            .store
            .update(
                &target.id,
                UserChanges {
                    state: Some(AccountState::Active),
                    ..UserChanges::default()
                },
            )
            .await?;
        info!(user_id = %restored.id, "account restored");
        Ok(UserView::from(restored))
    }

    /// Attach a profile image to the caller's own account.
    pub async fn set_profile_image(
        &self,
        caller: &AuthenticatedCaller,
        file_path: &str,
    ) -> DomainResult<UserView> {
        let updated = self
            .store
            .update(
                &caller.id,
                UserChanges {
                    profile_image_path: Some(file_path.to_string()),
                    ..UserChanges::default()
                },
            )
            .await?;
        info!(user_id = %updated.id, "profile image updated");
        Ok(UserView::from(updated))
    }

    /// Path of a user's profile image.
    pub async fn get_profile_image(&self, user_id: &str) -> DomainResult<String> {
        let user = self
            .store
            .get(user_id, false)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {} not found", user_id)))?;
        user.profile_image_path
            .ok_or_else(|| DomainError::NotFound("user has no profile image".into()))
    }

    /// Reset the admin password.
    ///
    /// `ask` supplies a replacement; when it declines (`None`) a random
    /// one is generated. The plaintext is returned exactly once in
    /// [`AdminPasswordReset`] so the operator can read it back.
    pub async fn reset_admin_password<F, Fut>(&self, ask: F) -> DomainResult<AdminPasswordReset>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Option<String>> + Send,
    {
        let admin = self
            .store
            .get_admin()
            .await?
            .ok_or_else(|| DomainError::BadRequest("no admin account exists yet".into()))?;

        let (password, provided) = match ask().await {
            Some(password) => (password, true),
            None => (generate_password(GENERATED_PASSWORD_LEN), false),
        };

        let password_hash = self.hasher.hash(&password).await?;
        self.store
            .update(
                &admin.id,
                UserChanges {
                    password_hash: Some(password_hash),
                    ..UserChanges::default()
                },
            )
            .await?;

        info!(user_id = %admin.id, provided, "admin password reset");
        Ok(AdminPasswordReset { password, provided })
    }
}
