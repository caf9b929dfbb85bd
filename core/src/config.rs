//! config.rs
//! Serde-backed configuration for building an AEAD instance.
//!
//! ```json
//! { "mode": "xchacha20poly1305" }
//! ```
//!
//! `mode` defaults to the extended-nonce variant when omitted; unknown fields
//! are rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::aead::ChaCha20Poly1305Guard;
use crate::crypto::key::ProtectedKey;
use crate::crypto::types::{NonceMode, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AeadConfig {
    #[serde(default)]
    pub mode: NonceMode,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid AEAD config: {0}")]
    Json(#[from] serde_json::Error),
}

impl AeadConfig {
    pub fn new(mode: NonceMode) -> Self {
        Self { mode }
    }

    pub fn from_json(s: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> std::result::Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build an instance over `key` in the configured mode.
    pub fn build<'k, K: ProtectedKey>(&self, key: &'k K) -> Result<ChaCha20Poly1305Guard<'k, K>> {
        ChaCha20Poly1305Guard::with_mode(key, self.mode)
    }
}
