/// Filter applied by list and count queries.
#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    /// Leave this account id out of the results (hides the caller
    /// from their own listing).
    pub exclude_id: Option<String>,
    /// Also return soft-deleted accounts.
    pub include_deleted: bool,
    /// Only accounts holding admin rights.
    pub admins_only: bool,
}
