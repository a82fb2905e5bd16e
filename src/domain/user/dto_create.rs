/// Caller-supplied fields for a new account.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fully-resolved record handed to the store.
///
/// The password has already been hashed and the policy flags decided
/// by the service; stores persist this verbatim.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub should_change_password: bool,
}
