// ## 📂 File: `src/crypto/key.rs`

//! crypto/key.rs
//! Long-term key storage seam.
//!
//! Design notes:
//! - The engine never owns the long-term key. It borrows a `ProtectedKey` and
//!   reads the raw bytes only inside `with_bytes`, for one Seal/Open call.
//! - `GuardedKey` is the default store: a heap buffer that is wiped on drop,
//!   never cloned, and redacted in `Debug`.
//! - Callers with page-locking or enclave-backed storage implement the trait
//!   themselves; the engine only needs scoped read access.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Scoped read access to secret key bytes.
///
/// Implementations must hand out the same bytes on every call and must not
/// mutate them while an AEAD instance borrows the key.
pub trait ProtectedKey {
    /// Length of the stored secret in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` with the raw key bytes. The slice must not escape `f`.
    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R;
}

/// Heap-held secret that is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct GuardedKey {
    bytes: Box<[u8]>,
}

impl GuardedKey {
    /// Copy `src` into a fresh guarded buffer, then wipe `src`.
    pub fn from_bytes_wiping(src: &mut [u8]) -> Self {
        let key = Self::from_slice(src);
        src.zeroize();
        key
    }

    /// Copy `src` into a fresh guarded buffer. `src` is left as is.
    pub fn from_slice(src: &[u8]) -> Self {
        Self { bytes: src.to_vec().into_boxed_slice() }
    }

    /// Take the contents of `src`, wiping the vector afterwards.
    ///
    /// The bytes are copied into an exact-size allocation so no spare
    /// capacity of the original vector survives unscrubbed.
    pub fn from_vec_wiping(mut src: Vec<u8>) -> Self {
        let key = Self::from_slice(&src);
        src.zeroize();
        key
    }
}

impl ProtectedKey for GuardedKey {
    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes)
    }
}

impl fmt::Debug for GuardedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GuardedKey([REDACTED; {}])", self.bytes.len())
    }
}

impl<const N: usize> ProtectedKey for Zeroizing<[u8; N]> {
    fn len(&self) -> usize {
        N
    }

    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self[..])
    }
}

impl ProtectedKey for Zeroizing<Vec<u8>> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_slice())
    }
}
