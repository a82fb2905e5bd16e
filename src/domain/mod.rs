//! Domain layer - core business types
//!
//! Pure types and contracts. Nothing in here knows about persistence,
//! hashing algorithms or transports.

pub mod auth;
pub mod error;
pub mod user;

pub use auth::AuthenticatedCaller;
pub use error::{DomainError, DomainResult};
pub use user::{
    AccountState, CreateUserDto, CredentialHasher, NewUser, UpdateUserDto, UserAccount,
    UserChanges, UserListFilter, UserStore, UserView,
};
