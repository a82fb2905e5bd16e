//! In-memory store implementation

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    AccountState, DomainError, DomainResult, NewUser, UserAccount, UserChanges, UserListFilter,
    UserStore,
};

/// In-memory [`UserStore`] for development and testing.
///
/// Mirrors the database store's contract, including the uniqueness of
/// emails across live *and* soft-deleted accounts.
pub struct InMemoryUserStore {
    users: DashMap<String, UserAccount>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    fn email_taken(&self, email: &str, except_id: Option<&str>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(u.id.as_str()) != except_id)
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: &str, include_deleted: bool) -> DomainResult<Option<UserAccount>> {
        Ok(self
            .users
            .get(id)
            .map(|u| u.clone())
            .filter(|u| include_deleted || !u.is_deleted()))
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email && !u.is_deleted())
            .map(|u| u.clone()))
    }

    async fn get_list(&self, filter: &UserListFilter) -> DomainResult<Vec<UserAccount>> {
        let mut users: Vec<UserAccount> = self
            .users
            .iter()
            .filter(|u| filter.include_deleted || !u.is_deleted())
            .filter(|u| filter.exclude_id.as_deref() != Some(u.id.as_str()))
            .filter(|u| !filter.admins_only || u.is_admin)
            .map(|u| u.clone())
            .collect();

        // DashMap iteration order is arbitrary; keep listings stable.
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn get_admin(&self) -> DomainResult<Option<UserAccount>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.is_admin && !u.is_deleted())
            .map(|u| u.clone()))
    }

    async fn update(&self, id: &str, changes: UserChanges) -> DomainResult<UserAccount> {
        if !self.users.contains_key(id) {
            return Err(DomainError::NotFound(format!("user {} not found", id)));
        }
        // Checked before taking the entry's write guard; `email_taken`
        // iterates the map and must not run under it.
        if let Some(ref email) = changes.email {
            if self.email_taken(email, Some(id)) {
                return Err(DomainError::BadRequest("email is already in use".to_string()));
            }
        }

        let Some(mut user) = self.users.get_mut(id) else {
            return Err(DomainError::NotFound(format!("user {} not found", id)));
        };

        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(first_name) = changes.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            user.last_name = last_name;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(is_admin) = changes.is_admin {
            user.is_admin = is_admin;
        }
        if let Some(flag) = changes.should_change_password {
            user.should_change_password = flag;
        }
        if let Some(path) = changes.profile_image_path {
            user.profile_image_path = Some(path);
        }
        if let Some(state) = changes.state {
            user.state = state;
        }

        Ok(user.clone())
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<UserAccount> {
        if self.email_taken(&new_user.email, None) {
            return Err(DomainError::BadRequest("email is already in use".to_string()));
        }

        let account = UserAccount {
            id: uuid::Uuid::new_v4().to_string(),
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password_hash: new_user.password_hash,
            is_admin: new_user.is_admin,
            should_change_password: new_user.should_change_password,
            profile_image_path: None,
            created_at: Utc::now(),
            state: AccountState::Active,
        };
        self.users.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let Some(mut user) = self.users.get_mut(id) else {
            return Err(DomainError::NotFound(format!("user {} not found", id)));
        };
        user.state = AccountState::Deleted { at: Utc::now() };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, is_admin: bool) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hashed:pw".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            is_admin,
            should_change_password: true,
        }
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("ada@example.com", false)).await.unwrap();

        let fetched = store.get(&created.id, false).await.unwrap().unwrap();
        assert_eq!(fetched.email, "ada@example.com");
        assert!(!fetched.is_deleted());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_even_after_soft_delete() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("ada@example.com", false)).await.unwrap();

        let err = store.create(new_user("ada@example.com", false)).await.unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(_)));

        // The row still exists after a soft delete, so the email stays taken.
        store.delete(&created.id).await.unwrap();
        let err = store.create(new_user("ada@example.com", false)).await.unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(_)));
    }

    #[tokio::test]
    async fn soft_delete_hides_account_from_default_lookups() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("ada@example.com", false)).await.unwrap();

        store.delete(&created.id).await.unwrap();

        assert!(store.get(&created.id, false).await.unwrap().is_none());
        assert!(store.get_by_email("ada@example.com").await.unwrap().is_none());
        assert!(store.get(&created.id, true).await.unwrap().unwrap().is_deleted());
    }

    #[tokio::test]
    async fn update_applies_only_set_fields() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("ada@example.com", false)).await.unwrap();

        let updated = store
            .update(
                &created.id,
                UserChanges {
                    first_name: Some("Grace".to_string()),
                    ..UserChanges::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Grace");
        assert_eq!(updated.email, "ada@example.com");
        assert_eq!(updated.password_hash, "hashed:pw");
    }

    #[tokio::test]
    async fn update_restores_deleted_account() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("ada@example.com", false)).await.unwrap();
        store.delete(&created.id).await.unwrap();

        let restored = store
            .update(
                &created.id,
                UserChanges {
                    state: Some(AccountState::Active),
                    ..UserChanges::default()
                },
            )
            .await
            .unwrap();

        assert!(!restored.is_deleted());
        assert!(store.get(&created.id, false).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_of_missing_account_is_not_found() {
        let store = InMemoryUserStore::new();
        let err = store.update("ghost", UserChanges::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_to_taken_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.create(new_user("ada@example.com", false)).await.unwrap();
        let grace = store.create(new_user("grace@example.com", false)).await.unwrap();

        let err = store
            .update(
                &grace.id,
                UserChanges {
                    email: Some("ada@example.com".to_string()),
                    ..UserChanges::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(_)));

        // Re-submitting the account's own email is not a conflict.
        store
            .update(
                &grace.id,
                UserChanges {
                    email: Some("grace@example.com".to_string()),
                    ..UserChanges::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_admin_ignores_deleted_admins() {
        let store = InMemoryUserStore::new();
        assert!(store.get_admin().await.unwrap().is_none());

        let boss = store.create(new_user("admin@example.com", true)).await.unwrap();
        assert_eq!(store.get_admin().await.unwrap().unwrap().id, boss.id);

        store.delete(&boss.id).await.unwrap();
        assert!(store.get_admin().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_filters_compose() {
        let store = InMemoryUserStore::new();
        let boss = store.create(new_user("admin@example.com", true)).await.unwrap();
        let ada = store.create(new_user("ada@example.com", false)).await.unwrap();
        store.create(new_user("grace@example.com", false)).await.unwrap();
        store.delete(&ada.id).await.unwrap();

        assert_eq!(store.get_list(&UserListFilter::default()).await.unwrap().len(), 2);

        let with_deleted = store
            .get_list(&UserListFilter {
                include_deleted: true,
                ..UserListFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(with_deleted.len(), 3);

        let without_boss = store
            .get_list(&UserListFilter {
                exclude_id: Some(boss.id.clone()),
                ..UserListFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(without_boss.len(), 1);

        let admins = store
            .get_list(&UserListFilter {
                admins_only: true,
                ..UserListFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].id, boss.id);
    }
}
