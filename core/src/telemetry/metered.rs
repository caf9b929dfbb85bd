//! telemetry/metered.rs
//! `Metered<A>`: any `Aead` plus its own counters and stage timer.

use crate::crypto::aead::Aead;
use crate::crypto::types::{AeadError, Result};
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::snapshot::TelemetrySnapshot;
use crate::telemetry::timers::{Stage, TelemetryTimer};

/// Wraps an AEAD and records every call.
///
/// Takes `&mut self`, so each thread owns its own `Metered`; combine results
/// with `TelemetryCounters::merge`.
#[derive(Debug)]
pub struct Metered<A: Aead> {
    inner: A,
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

impl<A: Aead> Metered<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            counters: TelemetryCounters::default(),
            timer: TelemetryTimer::new(),
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn counters(&self) -> &TelemetryCounters {
        &self.counters
    }

    pub fn seal(&mut self, nonce: &[u8], plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let inner = &self.inner;
        let out = self
            .timer
            .time(Stage::Seal, || inner.seal(nonce, plaintext, associated_data))?;
        self.counters.add_seal(plaintext.len(), self.inner.overhead());
        Ok(out)
    }

    pub fn open(&mut self, nonce: &[u8], ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let inner = &self.inner;
        let res = self
            .timer
            .time(Stage::Open, || inner.open(nonce, ciphertext, associated_data));
        match res {
            Ok(_) => self.counters.add_open(ciphertext.len(), self.inner.overhead()),
            Err(AeadError::AuthenticationFailed) => self.counters.add_auth_failure(),
            Err(_) => {}
        }
        res
    }

    /// Snapshot of everything recorded so far.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from(&self.counters, &self.timer)
    }

    /// Stop the clock and hand back the AEAD with the final snapshot.
    pub fn finish(mut self) -> (A, TelemetrySnapshot) {
        self.timer.finish();
        let snapshot = self.snapshot();
        (self.inner, snapshot)
    }
}
