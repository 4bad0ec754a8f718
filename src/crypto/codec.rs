//! Transport-string codec for encrypted field values
//!
//! Persisted format: `{iv_hex}:{tag_hex}:{ciphertext_hex}`
//! - IV: 12 bytes (96 bits) - standard for GCM
//! - Auth tag: 16 bytes (128 bits)
//! - Ciphertext: variable length, same as the plaintext
//!
//! This exact shape lives in external storage (ordinary text columns), so
//! the separator and segment order are a compatibility contract. Parsing is
//! structural only; cryptographic validity is established by decryption.

use crate::error::{FieldCryptError, Result};

/// Initialization vector length in bytes (96 bits, standard for GCM)
pub const IV_LEN: usize = 12;

/// Authentication tag length in bytes (128 bits)
pub const TAG_LEN: usize = 16;

const SEPARATOR: char = ':';

/// Encrypted field value with IV and auth tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedValue {
    /// Initialization vector, transmitted in the clear
    pub iv: [u8; IV_LEN],
    /// Authentication tag, detached from the ciphertext
    pub tag: [u8; TAG_LEN],
    /// Encrypted ciphertext
    pub ciphertext: Vec<u8>,
}

impl std::fmt::Display for EncryptedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            hex::encode(self.iv),
            hex::encode(self.tag),
            hex::encode(&self.ciphertext)
        )
    }
}

impl EncryptedValue {
    /// Parse from the format: `{iv_hex}:{tag_hex}:{ciphertext_hex}`
    ///
    /// # Errors
    ///
    /// Returns [`FieldCryptError::Format`] unless the string has exactly
    /// three non-empty segments, each valid hex, with the IV and tag
    /// decoding to their fixed lengths.
    pub fn from_string(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(FieldCryptError::Format);
        }

        let iv_bytes = hex::decode(parts[0]).map_err(|_| FieldCryptError::Format)?;
        let tag_bytes = hex::decode(parts[1]).map_err(|_| FieldCryptError::Format)?;
        let ciphertext = hex::decode(parts[2]).map_err(|_| FieldCryptError::Format)?;

        if iv_bytes.len() != IV_LEN || tag_bytes.len() != TAG_LEN {
            return Err(FieldCryptError::Format);
        }

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&iv_bytes);

        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&tag_bytes);

        Ok(Self {
            iv,
            tag,
            ciphertext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncryptedValue {
        EncryptedValue {
            iv: [1u8; IV_LEN],
            tag: [2u8; TAG_LEN],
            ciphertext: vec![3, 4, 5],
        }
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let value = sample();
        let s = value.to_string();
        let parsed = EncryptedValue::from_string(&s).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_display_shape() {
        let s = sample().to_string();
        let parts: Vec<&str> = s.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "01".repeat(IV_LEN));
        assert_eq!(parts[1], "02".repeat(TAG_LEN));
        assert_eq!(parts[2], "030405");
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        assert!(EncryptedValue::from_string("invalid").is_err());
        assert!(EncryptedValue::from_string("invalid:format").is_err());
        assert!(EncryptedValue::from_string("a:b:c:d").is_err());
    }

    #[test]
    fn test_rejects_empty_segments() {
        let iv = "00".repeat(IV_LEN);
        let tag = "00".repeat(TAG_LEN);
        assert!(EncryptedValue::from_string(&format!("{iv}:{tag}:")).is_err());
        assert!(EncryptedValue::from_string(&format!(":{tag}:0a")).is_err());
        assert!(EncryptedValue::from_string("::").is_err());
    }

    #[test]
    fn test_rejects_non_hex() {
        let iv = "00".repeat(IV_LEN);
        let tag = "00".repeat(TAG_LEN);
        let err = EncryptedValue::from_string(&format!("{iv}:{tag}:zz")).unwrap_err();
        assert!(matches!(err, FieldCryptError::Format));
    }

    #[test]
    fn test_rejects_wrong_iv_length() {
        let tag = "00".repeat(TAG_LEN);
        assert!(EncryptedValue::from_string(&format!("0000:{tag}:0a")).is_err());
    }

    #[test]
    fn test_rejects_wrong_tag_length() {
        let iv = "00".repeat(IV_LEN);
        assert!(EncryptedValue::from_string(&format!("{iv}:0000:0a")).is_err());
    }
}
