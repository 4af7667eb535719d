//! Login registration and verification.
//!
//! # Invariants
//! - Plain secrets never reach the credential collection or the log.
//! - Reveal failures count as a failed login and are never returned.

use super::Registry;
use crate::model::credential::Credential;
use log::{info, warn};

impl Registry {
    /// Stores an obfuscated credential.
    ///
    /// Uniqueness of `user_id` is not checked; `login` uses the first match.
    pub fn register_user(&mut self, user_id: &str, secret: &str, role: &str) {
        let token = self.cipher.obfuscate(secret);
        self.credentials.push(Credential::new(user_id, token, role));
        info!("event=user_register module=registry status=ok role={role}");
    }

    /// Appends an already-obfuscated credential, as read from storage.
    pub fn insert_credential(&mut self, credential: Credential) {
        self.credentials.push(credential);
    }

    /// Returns whether `secret` matches the first credential for `user_id`.
    pub fn login(&self, user_id: &str, secret: &str) -> bool {
        let Some(credential) = self.credentials.iter().find(|c| c.user_id == user_id) else {
            info!("event=login module=registry status=unknown_user");
            return false;
        };

        match self.cipher.reveal(&credential.password) {
            Ok(stored) if stored == secret => {
                info!(
                    "event=login module=registry status=ok role={}",
                    credential.role
                );
                true
            }
            Ok(_) => {
                info!("event=login module=registry status=rejected");
                false
            }
            Err(err) => {
                warn!(
                    "event=login module=registry status=error error_code=token_reveal_failed error={err}"
                );
                false
            }
        }
    }

    /// Role label of the first credential for `user_id`.
    pub fn role_of(&self, user_id: &str) -> Option<&str> {
        self.credentials
            .iter()
            .find(|c| c.user_id == user_id)
            .map(|c| c.role.as_str())
    }

    pub fn clear_credentials(&mut self) {
        self.credentials.clear();
    }
}
