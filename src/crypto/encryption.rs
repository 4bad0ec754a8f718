//! AES-256-GCM authenticated encryption of individual field values
//!
//! A fresh random 12-byte IV is drawn from the OS CSPRNG for every `seal`
//! call, so identical plaintext under the same key never produces the same
//! output. IV reuse under one key would break both confidentiality and
//! authentication for GCM.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;

use super::codec::{EncryptedValue, IV_LEN, TAG_LEN};
use super::MasterKey;
use crate::error::{FieldCryptError, Result};

/// Encrypt plaintext bytes under `key`, producing IV, detached tag, and
/// ciphertext of the same length as the plaintext.
pub fn seal(plaintext: &[u8], key: &MasterKey) -> Result<EncryptedValue> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| FieldCryptError::Encryption(e.to_string()))?;

    // Fresh random IV per call - never reused with the same key
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    let nonce = Nonce::from_slice(&iv);

    // aes-gcm appends the 16-byte auth tag to the ciphertext
    let mut combined = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| FieldCryptError::Encryption(e.to_string()))?;

    if combined.len() < TAG_LEN {
        return Err(FieldCryptError::Encryption(
            "ciphertext shorter than auth tag".to_string(),
        ));
    }

    let tag_start = combined.len() - TAG_LEN;
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&combined[tag_start..]);
    combined.truncate(tag_start);

    Ok(EncryptedValue {
        iv,
        tag,
        ciphertext: combined,
    })
}

/// Decrypt an [`EncryptedValue`] back to plaintext bytes.
///
/// # Errors
///
/// Returns [`FieldCryptError::Decryption`] on any authentication failure -
/// wrong key, or tampering with IV, tag, or ciphertext. The error carries
/// no detail about which component failed.
pub fn open(value: &EncryptedValue, key: &MasterKey) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| FieldCryptError::Decryption)?;

    let nonce = Nonce::from_slice(&value.iv);

    // Reconstruct ciphertext with tag appended (as expected by aes-gcm)
    let mut combined = Vec::with_capacity(value.ciphertext.len() + TAG_LEN);
    combined.extend_from_slice(&value.ciphertext);
    combined.extend_from_slice(&value.tag);

    cipher
        .decrypt(nonce, combined.as_slice())
        .map_err(|_| FieldCryptError::Decryption)
}
