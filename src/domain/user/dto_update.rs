use super::AccountState;

/// Caller-supplied partial update targeting the account `id`.
///
/// `None` fields are left untouched. `password` is plaintext here and
/// is hashed by the service before anything reaches a store.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
    pub should_change_password: Option<bool>,
}

/// Store-level partial update.
///
/// `None` fields keep their stored value. `state` transitions the
/// account lifecycle (soft delete and restore both go through here
/// or through `UserStore::delete`).
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
    pub is_admin: Option<bool>,
    pub should_change_password: Option<bool>,
    pub profile_image_path: Option<String>,
    pub state: Option<AccountState>,
}
