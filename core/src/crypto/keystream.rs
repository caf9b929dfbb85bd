// ## 📂 File: `src/crypto/keystream.rs`

//! crypto/keystream.rs
//! Keystream adapter over the `chacha20` crate.
//!
//! Design notes:
//! - Short mode uses the original 64-bit-nonce ChaCha20 (`ChaCha20Legacy`).
//! - Extended mode uses `XChaCha20`; the HChaCha20 subkey step runs inside
//!   the crate and is only invoked here.
//! - Every operation is addressed by an absolute byte offset, so results are a
//!   pure function of (key, nonce, offset, length) regardless of call order.
//! - Cipher state is wiped on drop (`chacha20/zeroize`); raw keystream handed
//!   out by this module is wrapped in `Zeroizing`.

use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use chacha20::{ChaCha20Legacy, Key, LegacyNonce, XChaCha20, XNonce};
use zeroize::Zeroizing;

use crate::crypto::types::{
    AeadError, NonceMode, Result, KEYSTREAM_BLOCK_LEN, KEY_LEN_32, MAX_PAYLOAD_LEN,
    ONE_TIME_KEY_LEN, PAYLOAD_OFFSET,
};

enum Cipher {
    Short(ChaCha20Legacy),
    Extended(XChaCha20),
}

/// Keystream for one (key, nonce) pair.
pub struct Keystream {
    cipher: Cipher,
}

impl Keystream {
    /// Key the stream cipher. Both lengths are validated; nothing here panics.
    pub fn new(key: &[u8], nonce: &[u8], mode: NonceMode) -> Result<Self> {
        if key.len() != KEY_LEN_32 {
            return Err(AeadError::InvalidKeySize { expected: KEY_LEN_32, actual: key.len() });
        }
        if nonce.len() != mode.nonce_size() {
            return Err(AeadError::InvalidNonceSize {
                expected: mode.nonce_size(),
                actual: nonce.len(),
            });
        }

        let key = Key::from_slice(key);
        let cipher = match mode {
            NonceMode::ChaCha20Poly1305 => {
                Cipher::Short(ChaCha20Legacy::new(key, LegacyNonce::from_slice(nonce)))
            }
            NonceMode::XChaCha20Poly1305 => {
                Cipher::Extended(XChaCha20::new(key, XNonce::from_slice(nonce)))
            }
        };
        Ok(Self { cipher })
    }

    /// XOR `buf` in place with the keystream starting at byte `offset`.
    pub fn apply_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<()> {
        let len = buf.len() as u64;

        // Seeking or running past the end of the 32-bit block counter is the
        // only failure the cipher reports.
        let applied = match &mut self.cipher {
            Cipher::Short(c) => c.try_seek(offset).is_ok() && c.try_apply_keystream(buf).is_ok(),
            Cipher::Extended(c) => c.try_seek(offset).is_ok() && c.try_apply_keystream(buf).is_ok(),
        };
        if !applied {
            return Err(AeadError::MessageTooLarge { max: MAX_PAYLOAD_LEN, actual: len });
        }
        Ok(())
    }

    /// Raw keystream block at byte `offset`.
    pub fn block_at(&mut self, offset: u64) -> Result<Zeroizing<[u8; KEYSTREAM_BLOCK_LEN]>> {
        let mut block = Zeroizing::new([0u8; KEYSTREAM_BLOCK_LEN]);
        self.apply_at(offset, &mut block[..])?;
        Ok(block)
    }

    /// Poly1305 key for this message: the first 32 bytes of block 0.
    ///
    /// The other 32 bytes of the block are discarded and wiped with it.
    pub fn one_time_key(&mut self) -> Result<Zeroizing<[u8; ONE_TIME_KEY_LEN]>> {
        let block = self.block_at(0)?;
        let mut key = Zeroizing::new([0u8; ONE_TIME_KEY_LEN]);
        key.copy_from_slice(&block[..ONE_TIME_KEY_LEN]);
        Ok(key)
    }

    /// Encrypt or decrypt a payload in place (keystream from block 1 on).
    pub fn apply_payload(&mut self, buf: &mut [u8]) -> Result<()> {
        self.apply_at(PAYLOAD_OFFSET, buf)
    }
}
