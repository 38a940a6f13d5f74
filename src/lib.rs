#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Crypt Num - arbitrary-precision signed integers
//!
//! This crate provides the integer engine underneath elliptic-curve
//! arithmetic, ECDSA and hash/DRBG layers: an immutable sign-magnitude
//! [`BigInt`] with exact add, subtract, multiply, truncating division,
//! exponentiation, modular arithmetic and two's-complement emulated bitwise
//! operations.

// Representation:
// - Magnitude: base 2^32 words, most significant first, no leading zeros
// - Sign: tracked apart from the magnitude; Zero iff the magnitude is empty
// - Sharing: magnitudes sit behind an Arc and are reused, never mutated
//
// Internal algorithms address words least significant first through the
// `WordSeq` trait, so the same loops run over stored values, scratch
// buffers and two's-complement views.

// Core modules
pub mod bigint;
pub mod errors;
pub mod random;
pub mod sign;
pub mod words;

// Operations on BigInt
mod additive;
mod bitwise;
mod buffer;
mod compare;
mod construct;
mod division;
mod export;
mod modular;
mod multiply;
mod ops;
mod pow;
mod shift;

pub use bigint::{constants, BigInt};
pub use errors::NumError;
#[cfg(feature = "rand")]
pub use random::OsEntropy;
pub use random::EntropySource;
pub use sign::Sign;
pub use words::WordSeq;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
