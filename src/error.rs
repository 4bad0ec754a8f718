//! Error types for fieldcrypt

use thiserror::Error;

/// Result type alias for field encryption operations
pub type Result<T> = std::result::Result<T, FieldCryptError>;

/// Field encryption error types
///
/// The three externally meaningful kinds are kept distinct so callers can
/// tell "system misconfigured" apart from "data corrupted or tampered".
/// None of them are retryable: each is deterministic for a given input and
/// environment.
#[derive(Error, Debug)]
pub enum FieldCryptError {
    /// Master key missing, undecodable, or the wrong length.
    /// Indicates deployment misconfiguration, not a data problem.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Stored value does not match the expected `iv:tag:ciphertext`
    /// three-segment structure.
    #[error("invalid encrypted data format")]
    Format,

    /// Authentication failed: wrong key, tampering, or corruption.
    /// Deliberately carries no detail about which component failed.
    #[error("decryption failed")]
    Decryption,

    /// Internal AEAD failure during encryption (unreachable with a valid key)
    #[error("encryption failed: {0}")]
    Encryption(String),
}
