//! Master key loading and generation
//!
//! The key is read from a named environment variable on every call rather
//! than cached, so a rotated key takes effect without a process restart.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::secure_memory::{MasterKey, KEY_LEN};
use crate::error::{FieldCryptError, Result};

/// Textual encoding of the master key in the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    /// Standard base64 with padding (the default)
    #[default]
    Base64,
    /// Lowercase or uppercase hexadecimal
    Hex,
}

impl KeyEncoding {
    fn encode(self, bytes: &[u8]) -> String {
        match self {
            KeyEncoding::Base64 => STANDARD.encode(bytes),
            KeyEncoding::Hex => hex::encode(bytes),
        }
    }

    fn decode(self, encoded: &str) -> Result<Vec<u8>> {
        match self {
            KeyEncoding::Base64 => STANDARD.decode(encoded.trim()).map_err(|_| {
                FieldCryptError::Configuration("master key is not valid base64".to_string())
            }),
            KeyEncoding::Hex => hex::decode(encoded.trim()).map_err(|_| {
                FieldCryptError::Configuration("master key is not valid hex".to_string())
            }),
        }
    }
}

impl std::str::FromStr for KeyEncoding {
    type Err = FieldCryptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "base64" => Ok(KeyEncoding::Base64),
            "hex" => Ok(KeyEncoding::Hex),
            other => Err(FieldCryptError::Configuration(format!(
                "unknown key encoding: {other}"
            ))),
        }
    }
}

/// Load the master key from the environment variable `var`.
///
/// Re-reads the environment on every call; nothing is cached.
///
/// # Errors
///
/// Returns [`FieldCryptError::Configuration`] if the variable is absent or
/// empty ("master key not set"), fails to decode, or decodes to anything
/// other than [`KEY_LEN`] bytes ("invalid key length").
pub fn load_master_key(var: &str, encoding: KeyEncoding) -> Result<MasterKey> {
    let encoded = std::env::var(var).unwrap_or_default();
    if encoded.is_empty() {
        return Err(FieldCryptError::Configuration(
            "master key not set".to_string(),
        ));
    }

    let mut decoded = encoding.decode(&encoded)?;
    let key = MasterKey::from_slice(&decoded);
    decoded.zeroize();
    key
}

/// Generate a fresh 256-bit master key, encoded for storage in an
/// environment variable.
///
/// Draws from the OS CSPRNG; successive calls produce distinct keys.
pub fn generate_master_key(encoding: KeyEncoding) -> String {
    let mut bytes = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut bytes);
    let encoded = encoding.encode(&bytes);
    bytes.zeroize();
    encoded
}
