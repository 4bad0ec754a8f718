//! String-boundary facade over the cryptographic core
//!
//! [`FieldCipher`] owns the key sourcing and the null-value policy. Plain
//! strings cross this boundary in both directions, so any persistence layer
//! can store the result as an ordinary text column.

use tracing::warn;

use crate::crypto::{self, EncryptedValue, KeyEncoding, MasterKey};
use crate::error::{FieldCryptError, Result};

/// Where the master key comes from on each call
enum KeySource {
    /// Re-read from this environment variable on every operation, so key
    /// rotation via the environment takes effect immediately
    Env { var: String, encoding: KeyEncoding },
    /// Fixed key injected at construction (composition roots, tests)
    Fixed(MasterKey),
}

/// Encrypts and decrypts individual sensitive string fields.
///
/// Stateless apart from the key source; safe to share across threads.
pub struct FieldCipher {
    source: KeySource,
}

impl FieldCipher {
    /// Cipher that resolves its key from the environment variable `var`
    /// on every call. The variable name is the caller's deployment
    /// contract; this crate attaches no meaning to it.
    pub fn from_env(var: impl Into<String>, encoding: KeyEncoding) -> Self {
        Self {
            source: KeySource::Env {
                var: var.into(),
                encoding,
            },
        }
    }

    /// Cipher with an explicitly injected key, bypassing the environment
    pub fn with_key(key: MasterKey) -> Self {
        Self {
            source: KeySource::Fixed(key),
        }
    }

    fn resolve_key(&self) -> Result<MasterKey> {
        match &self.source {
            KeySource::Env { var, encoding } => crypto::load_master_key(var, *encoding),
            KeySource::Fixed(key) => Ok(key.clone()),
        }
    }

    /// Encrypt a field value into an `iv:tag:ciphertext` transport string.
    ///
    /// `None` and `""` both yield `Ok(None)` without touching the key:
    /// absence of data is not itself sensitive. Two calls with identical
    /// plaintext produce different transport strings because a fresh IV is
    /// drawn per call.
    ///
    /// # Errors
    ///
    /// Returns [`FieldCryptError::Configuration`] if the master key is
    /// missing or malformed.
    pub fn encrypt(&self, plaintext: Option<&str>) -> Result<Option<String>> {
        let plaintext = match plaintext {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(None),
        };

        let key = self.resolve_key()?;
        let sealed = crypto::seal(plaintext.as_bytes(), &key)?;
        Ok(Some(sealed.to_string()))
    }

    /// Decrypt a transport string back to the original field value.
    ///
    /// `None` and `""` both yield `Ok(None)`. Otherwise the string is
    /// parsed first, then the key is resolved, then the ciphertext is
    /// authenticated and decrypted.
    ///
    /// # Errors
    ///
    /// - [`FieldCryptError::Format`] if the string is not three non-empty
    ///   hex segments (corrupted storage, or a value that was never
    ///   encrypted).
    /// - [`FieldCryptError::Configuration`] if the master key is missing
    ///   or malformed.
    /// - [`FieldCryptError::Decryption`] if authentication fails - wrong
    ///   key, tampering, or corruption, deliberately undifferentiated.
    pub fn decrypt(&self, stored: Option<&str>) -> Result<Option<String>> {
        let stored = match stored {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(None),
        };

        let value = EncryptedValue::from_string(stored)?;
        let key = self.resolve_key()?;

        let plaintext = crypto::open(&value, &key).map_err(|e| {
            warn!("field decryption failed authentication");
            e
        })?;

        String::from_utf8(plaintext)
            .map(Some)
            .map_err(|_| FieldCryptError::Decryption)
    }
}
