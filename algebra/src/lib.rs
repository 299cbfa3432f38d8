//! Field, curve and group arithmetic for Verkle commitments.
//!
//! The base field `Fp` and scalar field `Fr` of the Bandersnatch curve, the
//! curve itself in affine and extended coordinates, and the prime-order
//! quotient group Banderwagon on which the commitment scheme is built.
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    unused_import_braces,
    trivial_casts,
    unused_mut,
    unused_must_use,
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(
    clippy::op_ref,
    clippy::suspicious_op_assign_impl,
    clippy::upper_case_acronyms
)]

/// Module for the Bandersnatch fields and curve.
pub mod bandersnatch;
/// Module for the Banderwagon prime-order group.
pub mod banderwagon;
/// Module for error handling.
pub mod errors;
/// Module for the prelude.
pub mod prelude;
/// Module for test rngs.
pub mod rand_helper;
/// Module for serialization of scalars and group elements.
pub mod serialization;
/// Module for traits.
pub mod traits;
/// Module for utils.
pub mod utils;

pub use ark_std::{
    borrow, cmp, collections, fmt, hash, iter, marker, ops, rand, One, UniformRand, Zero,
};
