//! Login credential record.
//!
//! # Invariants
//! - `password` always holds an obfuscated token, never the plain secret.
//! - `role` is free-form; no authorization is derived from it.

use serde::{Deserialize, Serialize};

/// Role assigned when the caller does not pick one.
pub const DEFAULT_ROLE: &str = "student";

/// Stored login entry for a student or professor email.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub user_id: String,
    /// Token produced by a `CredentialCipher`.
    pub password: String,
    pub role: String,
}

impl Credential {
    pub fn new(
        user_id: impl Into<String>,
        password_token: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password_token.into(),
            role: role.into(),
        }
    }
}

// Keeps tokens out of debug output and logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
