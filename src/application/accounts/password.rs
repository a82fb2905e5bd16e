//! Generated replacement passwords

use rand::{distributions::Alphanumeric, Rng};

/// Length of generated replacement passwords.
pub const GENERATED_PASSWORD_LEN: usize = 24;

/// Random alphanumeric password of `len` characters.
pub fn generate_password(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_password_has_requested_length() {
        assert_eq!(generate_password(GENERATED_PASSWORD_LEN).len(), GENERATED_PASSWORD_LEN);
        assert_eq!(generate_password(8).len(), 8);
    }

    #[test]
    fn generated_password_is_alphanumeric() {
        let password = generate_password(64);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn consecutive_passwords_differ() {
        assert_ne!(generate_password(24), generate_password(24));
    }
}
