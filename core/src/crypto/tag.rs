// ## 📂 File: `src/crypto/tag.rs`

//! crypto/tag.rs
//! Poly1305 input framing, tag computation and constant-time verification.
//!
//! Frame layout (byte-exact, no block padding):
//!
//! ```text
//! associated_data || le64(len(associated_data)) || ciphertext || le64(len(ciphertext))
//! ```
//!
//! This is the original ChaCha20-Poly1305 layout, not the RFC 8439 one.
//! Ciphertexts only verify across implementations if the order and the
//! absence of padding are kept exactly as written here.

use poly1305::universal_hash::KeyInit;
use poly1305::{Key as PolyKey, Poly1305};
use subtle::ConstantTimeEq;

use crate::crypto::types::{Tag, ONE_TIME_KEY_LEN, TAG_LEN};

const LEN_FIELD: usize = 8;

/// Build the exact byte sequence authenticated by Poly1305.
pub fn frame(associated_data: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut m = Vec::with_capacity(associated_data.len() + ciphertext.len() + 2 * LEN_FIELD);
    m.extend_from_slice(associated_data);
    m.extend_from_slice(&(associated_data.len() as u64).to_le_bytes());
    m.extend_from_slice(ciphertext);
    m.extend_from_slice(&(ciphertext.len() as u64).to_le_bytes());
    m
}

/// Poly1305 tag of an already framed message.
pub fn tag(one_time_key: &[u8; ONE_TIME_KEY_LEN], framed: &[u8]) -> Tag {
    let mac = Poly1305::new(PolyKey::from_slice(one_time_key));
    let digest = mac.compute_unpadded(framed);

    let mut out = [0u8; TAG_LEN];
    out.copy_from_slice(&digest);
    out
}

/// Frame `(associated_data, ciphertext)` and tag it.
#[inline]
pub fn compute_tag(
    one_time_key: &[u8; ONE_TIME_KEY_LEN],
    associated_data: &[u8],
    ciphertext: &[u8],
) -> Tag {
    tag(one_time_key, &frame(associated_data, ciphertext))
}

/// Constant-time tag comparison.
///
/// Time depends only on the (public) lengths, never on where the first
/// differing byte sits. A `received` slice of the wrong length is unequal.
#[inline]
pub fn verify_tag(expected: &Tag, received: &[u8]) -> bool {
    expected[..].ct_eq(received).into()
}
