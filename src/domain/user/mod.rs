//! User-account aggregate
//!
//! Contains the account entity, DTOs, the store contract and the
//! credential-hashing seam.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_list;
mod dto_update;
mod hasher;

// Re-export model types
pub use model::{AccountState, UserAccount, UserView};

// Re-export DTOs
pub use dto_create::{CreateUserDto, NewUser};
pub use dto_list::UserListFilter;
pub use dto_update::{UpdateUserDto, UserChanges};

// Re-export contracts
pub use hasher::CredentialHasher;
pub use repository::UserStore;
