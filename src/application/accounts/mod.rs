//! Accounts module
//!
//! Contains the `UserAccountService` which orchestrates all
//! account-related use-cases.

pub mod password;
pub mod service;

pub use password::{generate_password, GENERATED_PASSWORD_LEN};
pub use service::{AdminPasswordReset, UserAccountService};
