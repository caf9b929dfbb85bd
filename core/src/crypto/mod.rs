// ## 📂 File: `src/crypto/mod.rs`

pub mod types;
pub mod key;
pub mod keystream;
pub mod tag;
pub mod aead;

pub use types::*;
pub use key::*;
pub use keystream::*;
pub use tag::*;
pub use aead::*;
