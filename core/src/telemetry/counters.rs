// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters collected around Seal/Open calls.
//!
//! Summary: Counts operations and byte volumes. Converted into an immutable
//! `TelemetrySnapshot` when the caller is done.
//!
//! Counters are plain values owned by one caller; parallel callers keep their
//! own and `merge` them afterwards.
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Deterministic counters collected while sealing and opening.
#[derive(Default, Clone, Debug, Encode, Decode, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryCounters {
    pub seals: u64,
    pub opens: u64,
    pub auth_failures: u64,
    pub bytes_plaintext: u64,
    pub bytes_ciphertext: u64,
    pub bytes_overhead: u64,
}

impl TelemetryCounters {
    /// Record one successful seal.
    ///
    /// - `pt_len`: plaintext length
    /// - `overhead_len`: bytes appended by the AEAD (the tag)
    pub fn add_seal(&mut self, pt_len: usize, overhead_len: usize) {
        self.seals += 1;
        self.bytes_plaintext += pt_len as u64;
        self.bytes_ciphertext += (pt_len + overhead_len) as u64;
        self.bytes_overhead += overhead_len as u64;
    }

    /// Record one successful open.
    ///
    /// - `ct_len`: envelope length including the tag
    /// - `overhead_len`: tag length stripped from the envelope
    pub fn add_open(&mut self, ct_len: usize, overhead_len: usize) {
        self.opens += 1;
        self.bytes_plaintext += ct_len.saturating_sub(overhead_len) as u64;
        self.bytes_ciphertext += ct_len as u64;
        self.bytes_overhead += overhead_len as u64;
    }

    /// Record an open that was rejected. No byte counters move.
    pub fn add_auth_failure(&mut self) {
        self.opens += 1;
        self.auth_failures += 1;
    }

    pub fn operations(&self) -> u64 {
        self.seals + self.opens
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.seals += other.seals;
        self.opens += other.opens;
        self.auth_failures += other.auth_failures;

        self.bytes_plaintext += other.bytes_plaintext;
        self.bytes_ciphertext += other.bytes_ciphertext;
        self.bytes_overhead += other.bytes_overhead;
    }

    /// Compact binary form for persisting counters between runs.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::encode_to_vec(self, bincode::config::standard())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let (counters, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(counters)
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
