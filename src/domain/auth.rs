//! Authenticated caller identity

/// Identity of the already-authenticated account driving a request.
///
/// Produced by whatever authentication layer embeds this crate. The
/// account service only inspects it for authorization decisions; it
/// never verifies credentials itself.
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

impl AuthenticatedCaller {
    pub fn new(id: impl Into<String>, email: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            is_admin,
        }
    }
}
