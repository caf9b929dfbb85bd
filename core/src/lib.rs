//! chachapoly-guard
//!
//! ChaCha20-Poly1305 and XChaCha20-Poly1305 AEAD over a borrowed, protected
//! long-term key.
//!
//! ```
//! use chachapoly_guard::prelude::*;
//!
//! # fn main() -> Result<(), AeadError> {
//! let mut raw_key = [7u8; 32];
//! let nonce = [0u8; 24];
//!
//! let key = GuardedKey::from_bytes_wiping(&mut raw_key);
//! assert_eq!(raw_key, [0u8; 32]);
//! let aead = ChaCha20Poly1305Guard::new_x(&key)?;
//!
//! let sealed = aead.seal(&nonce, b"payload", b"header")?;
//! let opened = aead.open(&nonce, &sealed, b"header")?;
//! assert_eq!(opened, b"payload");
//! # Ok(())
//! # }
//! ```
//!
//! Nonce uniqueness per key is the caller's job.

#![forbid(unsafe_code)]

pub mod config;
pub mod crypto;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::AeadConfig;
    pub use crate::crypto::{
        Aead, AeadError, ChaCha20Poly1305Guard, GuardedKey, NonceMode, ProtectedKey, Tag,
    };
    pub use crate::telemetry::{Metered, TelemetryCounters, TelemetrySnapshot};
}
