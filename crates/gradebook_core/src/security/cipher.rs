//! Reversible secret obfuscation.
//!
//! Token layout: `base64(iv || xor(plain, key, iv))` where `key` is the SHA-256
//! digest of the application secret and `iv` is 16 fresh random bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Application secret used when none is configured.
pub const DEFAULT_APP_SECRET: &str = "checkmygrade-lab1-secret-key";

const IV_LEN: usize = 16;

/// Errors raised while turning a token back into a secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Token is not valid base64.
    InvalidEncoding(String),
    /// Decoded token is shorter than the IV prefix.
    TruncatedToken(usize),
    /// Revealed bytes are not UTF-8.
    InvalidUtf8,
}

impl Display for CipherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding(message) => write!(f, "token is not valid base64: {message}"),
            Self::TruncatedToken(len) => {
                write!(f, "token too short: {len} bytes, expected at least {IV_LEN}")
            }
            Self::InvalidUtf8 => write!(f, "revealed secret is not valid UTF-8"),
        }
    }
}

impl Error for CipherError {}

/// Two-way transform used to keep plain secrets out of storage.
pub trait CredentialCipher {
    /// Produces a storable token for `secret`.
    fn obfuscate(&self, secret: &str) -> String;
    /// Recovers the secret from a token produced by [`Self::obfuscate`].
    fn reveal(&self, token: &str) -> Result<String, CipherError>;
}

/// XOR obfuscation keyed by a SHA-256 digest and a per-token IV.
#[derive(Clone)]
pub struct XorCipher {
    key: [u8; 32],
}

impl XorCipher {
    pub fn new(app_secret: &str) -> Self {
        let digest = Sha256::digest(app_secret.as_bytes());
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);
        Self { key }
    }

    fn apply(&self, iv: &[u8], data: &[u8]) -> Vec<u8> {
        data.iter()
            .enumerate()
            .map(|(i, byte)| byte ^ self.key[i % self.key.len()] ^ iv[i % iv.len()])
            .collect()
    }
}

impl Default for XorCipher {
    fn default() -> Self {
        Self::new(DEFAULT_APP_SECRET)
    }
}

impl CredentialCipher for XorCipher {
    fn obfuscate(&self, secret: &str) -> String {
        // v4 UUIDs carry 122 random bits, plenty for an obfuscation IV.
        let iv = Uuid::new_v4().into_bytes();
        let mut raw = Vec::with_capacity(IV_LEN + secret.len());
        raw.extend_from_slice(&iv);
        raw.extend(self.apply(&iv, secret.as_bytes()));
        STANDARD.encode(raw)
    }

    fn reveal(&self, token: &str) -> Result<String, CipherError> {
        let raw = STANDARD
            .decode(token.trim())
            .map_err(|err| CipherError::InvalidEncoding(err.to_string()))?;
        if raw.len() < IV_LEN {
            return Err(CipherError::TruncatedToken(raw.len()));
        }
        let (iv, body) = raw.split_at(IV_LEN);
        String::from_utf8(self.apply(iv, body)).map_err(|_| CipherError::InvalidUtf8)
    }
}
