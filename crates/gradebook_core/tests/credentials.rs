use gradebook_core::{CipherError, Credential, CredentialCipher, Registry, XorCipher};
use std::sync::Arc;

#[test]
fn registered_user_can_log_in() {
    let mut registry = Registry::new();
    registry.register_user("micheal@mycsu.edu", "Welcome12#_", "professor");

    assert!(registry.login("micheal@mycsu.edu", "Welcome12#_"));
    assert!(!registry.login("micheal@mycsu.edu", "welcome12#_"));
    assert!(!registry.login("someone@mycsu.edu", "Welcome12#_"));
    assert_eq!(registry.role_of("micheal@mycsu.edu"), Some("professor"));
}

#[test]
fn stored_password_is_not_plain_text() {
    let mut registry = Registry::new();
    registry.register_user("a@x.edu", "secret-pass", "student");

    let stored = &registry.credentials()[0];
    assert_ne!(stored.password, "secret-pass");
    assert_eq!(
        XorCipher::default().reveal(&stored.password).unwrap(),
        "secret-pass"
    );
    assert!(!format!("{stored:?}").contains(&stored.password));
}

#[test]
fn malformed_token_is_a_login_failure() {
    let mut registry = Registry::new();
    registry.insert_credential(Credential::new("a@x.edu", "%%% not a token %%%", "student"));
    assert!(!registry.login("a@x.edu", "anything"));
}

#[test]
fn first_matching_credential_wins() {
    let mut registry = Registry::new();
    registry.register_user("a@x.edu", "first", "student");
    registry.register_user("a@x.edu", "second", "professor");

    assert!(registry.login("a@x.edu", "first"));
    assert!(!registry.login("a@x.edu", "second"));
    assert_eq!(registry.credentials().len(), 2);
}

struct ReverseCipher;

impl CredentialCipher for ReverseCipher {
    fn obfuscate(&self, secret: &str) -> String {
        secret.chars().rev().collect()
    }

    fn reveal(&self, token: &str) -> Result<String, CipherError> {
        if token.is_empty() {
            return Err(CipherError::TruncatedToken(0));
        }
        Ok(token.chars().rev().collect())
    }
}

#[test]
fn registry_uses_the_injected_cipher() {
    let mut registry = Registry::with_cipher(Arc::new(ReverseCipher));
    registry.register_user("a@x.edu", "abc", "student");

    assert_eq!(registry.credentials()[0].password, "cba");
    assert!(registry.login("a@x.edu", "abc"));
}
