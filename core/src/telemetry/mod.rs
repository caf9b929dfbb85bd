//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for Seal/Open.
//!
//! Nothing here ever sees key material, nonces or plaintext; only lengths,
//! outcomes and durations are recorded.

pub mod counters;
pub mod timers;
pub mod snapshot;
pub mod metered;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
pub use metered::*;
