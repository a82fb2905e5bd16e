//! # Fotovault Accounts
//!
//! User-account management core for the Fotovault photo platform.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: The account service and its business rules
//! - **infrastructure**: External concerns (database, in-memory store, hashing)
//!
//! Embedding callers wire an auth layer and transport of their own
//! around [`UserAccountService`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export the service and its collaborators for easy access
pub use application::{AdminPasswordReset, UserAccountService};
pub use domain::{
    AccountState, AuthenticatedCaller, CreateUserDto, CredentialHasher, DomainError,
    DomainResult, UpdateUserDto, UserListFilter, UserStore, UserView,
};
pub use infrastructure::{
    ensure_schema, init_database, BcryptHasher, DatabaseConfig, InMemoryUserStore,
    SeaOrmUserStore,
};
