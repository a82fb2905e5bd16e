//! User-account entity and lifecycle state

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Account lifecycle state.
///
/// An account is either live or soft-deleted, tagged with the instant
/// the deletion happened. Restoring is a transition back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Active,
    Deleted { at: DateTime<Utc> },
}

impl AccountState {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }

    /// Deletion instant, if the account is soft-deleted.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active => None,
            Self::Deleted { at } => Some(*at),
        }
    }
}

/// User account model
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub should_change_password: bool,
    pub profile_image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub state: AccountState,
}

impl UserAccount {
    pub fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }
}

/// Caller-facing projection of a user account.
///
/// Carries everything an account owner may see about themselves; the
/// credential hash stays behind in [`UserAccount`].
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub should_change_password: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<UserAccount> for UserView {
    fn from(account: UserAccount) -> Self {
        Self {
            deleted_at: account.state.deleted_at(),
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            is_admin: account.is_admin,
            should_change_password: account.should_change_password,
            profile_image_path: account.profile_image_path,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account(state: AccountState) -> UserAccount {
        UserAccount {
            id: "u-1".to_string(),
            email: "user@example.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            is_admin: false,
            should_change_password: false,
            profile_image_path: None,
            created_at: Utc::now(),
            state,
        }
    }

    #[test]
    fn active_state_has_no_deletion_instant() {
        assert!(!AccountState::Active.is_deleted());
        assert_eq!(AccountState::Active.deleted_at(), None);
    }

    #[test]
    fn deleted_state_reports_instant() {
        let at = Utc::now();
        let state = AccountState::Deleted { at };
        assert!(state.is_deleted());
        assert_eq!(state.deleted_at(), Some(at));
    }

    #[test]
    fn view_projects_deleted_at_from_state() {
        let at = Utc::now();
        let view = UserView::from(sample_account(AccountState::Deleted { at }));
        assert_eq!(view.deleted_at, Some(at));

        let view = UserView::from(sample_account(AccountState::Active));
        assert_eq!(view.deleted_at, None);
    }

    #[test]
    fn view_serializes_without_credential_fields() {
        let json = serde_json::to_value(UserView::from(sample_account(AccountState::Active)))
            .expect("view serializes");
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert!(keys.contains(&"email"));
        assert!(!keys.contains(&"password"));
        assert!(!keys.contains(&"password_hash"));
    }
}
