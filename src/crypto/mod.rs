//! Cryptographic core for at-rest field encryption
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption with a detached tag
//! - The `iv:tag:ciphertext` hex transport codec
//! - Master key loading from the environment and key generation
//! - Secure memory handling with zeroize

mod codec;
mod encryption;
mod keys;
pub(crate) mod secure_memory;

pub use codec::{EncryptedValue, IV_LEN, TAG_LEN};
pub use encryption::{open, seal};
pub use keys::{generate_master_key, load_master_key, KeyEncoding};
pub use secure_memory::{MasterKey, KEY_LEN};
