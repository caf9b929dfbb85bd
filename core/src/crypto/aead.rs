// ## 📂 File: `src/crypto/aead.rs`

//! crypto/aead.rs
//! ChaCha20-Poly1305 / XChaCha20-Poly1305 AEAD over a borrowed protected key.
//!
//! Design notes:
//! - Seal is encrypt-then-MAC, Open is verify-then-decrypt. Plaintext never
//!   reaches a caller-visible buffer before the tag has been checked.
//! - Per message: keystream block 0 yields the Poly1305 key (first 32 bytes,
//!   the rest is discarded), the payload uses the keystream from byte 64 on.
//! - Output layout is `ciphertext || tag`, nothing else.
//! - Nonce-size mismatch is returned as `AeadError::InvalidNonceSize` rather
//!   than aborting the process.
//! - The instance only holds `&K` plus the mode, so it is `Send + Sync`
//!   whenever the key store is `Sync` and can be shared across threads.

use std::fmt;

use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::key::ProtectedKey;
use crate::crypto::keystream::Keystream;
use crate::crypto::tag::{compute_tag, verify_tag};
use crate::crypto::types::{
    check_payload_len, AeadError, NonceMode, Result, Tag, KEY_LEN_32, ONE_TIME_KEY_LEN, TAG_LEN,
};

/// Programmatic AEAD surface.
///
/// `seal_into`/`open_into` append to `dst`; on error `dst` is left exactly as
/// it was passed in.
pub trait Aead {
    /// Required nonce length in bytes.
    fn nonce_size(&self) -> usize;

    /// Bytes added by `seal` (the tag).
    fn overhead(&self) -> usize;

    fn seal_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<()>;

    fn open_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<()>;

    /// Seal into a fresh `ciphertext || tag` buffer.
    fn seal(&self, nonce: &[u8], plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(plaintext.len() + self.overhead());
        self.seal_into(&mut out, nonce, plaintext, associated_data)?;
        Ok(out)
    }

    /// Verify and decrypt into a fresh buffer.
    fn open(&self, nonce: &[u8], ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(ciphertext.len().saturating_sub(self.overhead()));
        self.open_into(&mut out, nonce, ciphertext, associated_data)?;
        Ok(out)
    }
}

/// AEAD instance bound to a borrowed key and a nonce mode. Immutable.
pub struct ChaCha20Poly1305Guard<'k, K: ProtectedKey> {
    key: &'k K,
    mode: NonceMode,
}

impl<'k, K: ProtectedKey> ChaCha20Poly1305Guard<'k, K> {
    /// 8-byte nonce variant.
    pub fn new(key: &'k K) -> Result<Self> {
        Self::with_mode(key, NonceMode::ChaCha20Poly1305)
    }

    /// 24-byte nonce variant.
    pub fn new_x(key: &'k K) -> Result<Self> {
        Self::with_mode(key, NonceMode::XChaCha20Poly1305)
    }

    /// Bind `key` to `mode`. Fails unless the key is exactly 32 bytes.
    pub fn with_mode(key: &'k K, mode: NonceMode) -> Result<Self> {
        if key.len() != KEY_LEN_32 {
            return Err(AeadError::InvalidKeySize { expected: KEY_LEN_32, actual: key.len() });
        }
        debug!(%mode, "aead instance created");
        Ok(Self { key, mode })
    }

    pub fn mode(&self) -> NonceMode {
        self.mode
    }

    /// Tag length; identical for both modes.
    pub const fn tag_size(&self) -> usize {
        TAG_LEN
    }

    /// Encrypt `buf` in place and return the detached tag.
    pub fn seal_in_place_detached(
        &self,
        nonce: &[u8],
        associated_data: &[u8],
        buf: &mut [u8],
    ) -> Result<Tag> {
        let (mut ks, otk) = self.begin(nonce, buf.len())?;
        ks.apply_payload(buf)?;
        Ok(compute_tag(&otk, associated_data, buf))
    }

    /// Verify `tag`, then decrypt `buf` in place.
    ///
    /// On any error `buf` still holds the untouched ciphertext.
    pub fn open_in_place_detached(
        &self,
        nonce: &[u8],
        associated_data: &[u8],
        buf: &mut [u8],
        tag: &[u8],
    ) -> Result<()> {
        let (mut ks, otk) = self.begin(nonce, buf.len())?;
        if !verify_tag(&compute_tag(&otk, associated_data, buf), tag) {
            return Err(AeadError::AuthenticationFailed);
        }
        ks.apply_payload(buf)
    }

    /// Validate inputs, key the cipher and derive this message's Poly1305 key.
    ///
    /// The raw long-term key is only visible inside `with_bytes`; afterwards
    /// it lives solely in the cipher state, which wipes itself on drop.
    fn begin(
        &self,
        nonce: &[u8],
        payload_len: usize,
    ) -> Result<(Keystream, Zeroizing<[u8; ONE_TIME_KEY_LEN]>)> {
        self.check_nonce(nonce)?;
        check_payload_len(payload_len)?;

        let mut ks = self.key.with_bytes(|key| Keystream::new(key, nonce, self.mode))?;
        let otk = ks.one_time_key()?;
        Ok((ks, otk))
    }

    fn check_nonce(&self, nonce: &[u8]) -> Result<()> {
        let expected = self.mode.nonce_size();
        if nonce.len() != expected {
            return Err(AeadError::InvalidNonceSize { expected, actual: nonce.len() });
        }
        Ok(())
    }
}

impl<K: ProtectedKey> Aead for ChaCha20Poly1305Guard<'_, K> {
    fn nonce_size(&self) -> usize {
        self.mode.nonce_size()
    }

    fn overhead(&self) -> usize {
        TAG_LEN
    }

    fn seal_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<()> {
        trace!(mode = %self.mode, pt_len = plaintext.len(), ad_len = associated_data.len(), "seal");

        // Validate before plaintext is copied anywhere.
        self.check_nonce(nonce)?;
        check_payload_len(plaintext.len())?;

        let start = dst.len();
        dst.reserve(plaintext.len() + TAG_LEN);
        dst.extend_from_slice(plaintext);

        match self.seal_in_place_detached(nonce, associated_data, &mut dst[start..]) {
            Ok(tag) => {
                dst.extend_from_slice(&tag);
                Ok(())
            }
            Err(e) => {
                dst[start..].zeroize();
                dst.truncate(start);
                Err(e)
            }
        }
    }

    fn open_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<()> {
        trace!(mode = %self.mode, ct_len = ciphertext.len(), ad_len = associated_data.len(), "open");

        self.check_nonce(nonce)?;
        if ciphertext.len() < TAG_LEN {
            return Err(AeadError::AuthenticationFailed);
        }
        let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_LEN);

        let (mut ks, otk) = self.begin(nonce, body.len())?;
        if !verify_tag(&compute_tag(&otk, associated_data, body), tag) {
            return Err(AeadError::AuthenticationFailed);
        }
        drop(otk);

        let start = dst.len();
        dst.extend_from_slice(body);
        if let Err(e) = ks.apply_payload(&mut dst[start..]) {
            dst[start..].zeroize();
            dst.truncate(start);
            return Err(e);
        }
        Ok(())
    }
}

impl<K: ProtectedKey> Clone for ChaCha20Poly1305Guard<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ProtectedKey> Copy for ChaCha20Poly1305Guard<'_, K> {}

impl<K: ProtectedKey> fmt::Debug for ChaCha20Poly1305Guard<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha20Poly1305Guard")
            .field("mode", &self.mode)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
