// ## 📂 File: `src/crypto/types.rs`

//! crypto/types.rs
//! Shared sizes, the nonce-mode selector and the AEAD error type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Long-term key length (bytes).
pub const KEY_LEN_32: usize = 32;

/// Short nonce length ("djb" ChaCha20 layout).
pub const NONCE_LEN_8: usize = 8;

/// Extended nonce length (XChaCha20).
pub const NONCE_LEN_24: usize = 24;

/// Fixed Poly1305 tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Poly1305 one-time key length, taken from the head of keystream block 0.
pub const ONE_TIME_KEY_LEN: usize = 32;

/// ChaCha20 block size (bytes).
pub const KEYSTREAM_BLOCK_LEN: usize = 64;

/// Byte offset in the keystream where payload encryption starts.
/// Block 0 is reserved for the one-time key.
pub const PAYLOAD_OFFSET: u64 = KEYSTREAM_BLOCK_LEN as u64;

/// Largest payload one (key, nonce) pair can carry.
///
/// The cipher runs a 32-bit block counter and block 0 is spent on the
/// one-time key; one more block is held back so the counter never wraps.
pub const MAX_PAYLOAD_LEN: u64 = (u32::MAX as u64 - 1) * KEYSTREAM_BLOCK_LEN as u64;

/// Detached authentication tag.
pub type Tag = [u8; TAG_LEN];

/// Nonce-size variant of the construction.
///
/// The extended variant derives a per-message subkey with HChaCha20 from the
/// first 16 nonce bytes and then runs the short-nonce path on the last 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonceMode {
    /// 8-byte nonce.
    ChaCha20Poly1305,
    /// 24-byte nonce.
    #[default]
    XChaCha20Poly1305,
}

impl NonceMode {
    /// Required nonce length for this mode.
    pub const fn nonce_size(self) -> usize {
        match self {
            NonceMode::ChaCha20Poly1305 => NONCE_LEN_8,
            NonceMode::XChaCha20Poly1305 => NONCE_LEN_24,
        }
    }

    /// Stable lowercase name, identical to the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            NonceMode::ChaCha20Poly1305 => "chacha20poly1305",
            NonceMode::XChaCha20Poly1305 => "xchacha20poly1305",
        }
    }

    pub const fn is_extended(self) -> bool {
        matches!(self, NonceMode::XChaCha20Poly1305)
    }
}

impl fmt::Display for NonceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown nonce mode: {0:?}")]
pub struct ParseNonceModeError(pub String);

impl FromStr for NonceMode {
    type Err = ParseNonceModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(&['-', '_'][..], "");
        match normalized.as_str() {
            "chacha20poly1305" => Ok(NonceMode::ChaCha20Poly1305),
            "xchacha20poly1305" => Ok(NonceMode::XChaCha20Poly1305),
            _ => Err(ParseNonceModeError(s.to_owned())),
        }
    }
}

/// Errors surfaced by the AEAD engine.
///
/// `AuthenticationFailed` is deliberately opaque: it never says which bytes
/// differed or whether the input was merely too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AeadError {
    /// Long-term key is not 32 bytes.
    #[error("invalid key size: expected={expected}, actual={actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    /// Nonce length does not match the instance mode.
    #[error("invalid nonce size: expected={expected}, actual={actual}")]
    InvalidNonceSize { expected: usize, actual: usize },

    /// Tag mismatch, or input shorter than a tag.
    #[error("message authentication failed")]
    AuthenticationFailed,

    /// Payload exceeds the keystream available to a single nonce.
    #[error("message too large: max={max}, actual={actual}")]
    MessageTooLarge { max: u64, actual: u64 },
}

pub type Result<T> = std::result::Result<T, AeadError>;

/// Reject payloads the cipher cannot cover from `PAYLOAD_OFFSET` on.
#[inline]
pub(crate) fn check_payload_len(len: usize) -> Result<()> {
    let actual = len as u64;
    if actual > MAX_PAYLOAD_LEN {
        return Err(AeadError::MessageTooLarge { max: MAX_PAYLOAD_LEN, actual });
    }
    Ok(())
}
