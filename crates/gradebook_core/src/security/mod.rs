//! Credential obfuscation boundary.
//!
//! # Responsibility
//! - Define the cipher contract the registry uses to store and verify login
//!   secrets.
//! - Provide the default XOR-based obfuscation.
//!
//! # Invariants
//! - `reveal(obfuscate(x)) == x` for every string `x`.
//! - The XOR scheme is obfuscation only; it is not encryption.

pub mod cipher;
