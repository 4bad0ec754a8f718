//! # fieldcrypt
//!
//! Authenticated at-rest encryption for individual sensitive string fields
//! (configuration secrets, PII) including:
//! - AES-256-GCM with a fresh random 12-byte IV per call
//! - `iv:tag:ciphertext` hex transport strings that store in ordinary text
//!   columns
//! - Master key sourced from an environment variable and re-read on every
//!   call, so rotation takes effect without a restart
//! - 256-bit key generation for provisioning
//!
//! All operations are synchronous and stateless; errors distinguish
//! misconfiguration ([`FieldCryptError::Configuration`]) from corrupted or
//! tampered data ([`FieldCryptError::Format`], [`FieldCryptError::Decryption`]).

pub mod crypto;
pub mod error;
mod cipher;

pub use cipher::FieldCipher;
pub use crypto::{generate_master_key, load_master_key, EncryptedValue, KeyEncoding, MasterKey};
pub use error::{FieldCryptError, Result};
