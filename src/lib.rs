#![forbid(unsafe_code)]
//! An educational implementation of the Keccak-p permutation family, the
//! sponge construction, and the FIPS 202 SHA3-224/256/384/512 and
//! SHAKE128/256 functions built on it.
//!
//! Two equivalent backends compute the same permutation: [`Backend::BitArray`],
//! a literal 5×5×w bit array that can be traced sub-step by sub-step, and
//! [`Backend::LaneWord`], a 25-lane `u64` representation used by default for
//! speed. Neither is observable through the digest.
//!
//! ```
//! use keccak_sponge::{Input, Sha3_256};
//!
//! let hex = Sha3_256::digest(Input::String("abc")).unwrap();
//! assert_eq!(hex, "3A985DA74FE225B2045C172D6BD390BD855F086E3E9D525B46BFE24511431532");
//! ```

mod codec;
mod error;
mod hasher;
mod sponge;
mod state;
mod trace;

pub use codec::{b2h, h2b};
pub use error::{Error, Result};
pub use hasher::{Backend, Input, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};
pub use trace::TraceFormat;
