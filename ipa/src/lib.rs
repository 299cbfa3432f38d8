//! Polynomial toolkit, Fiat-Shamir transcript, common reference string,
//! inner product argument and multipoint openings for Verkle commitments.
#![forbid(unsafe_code)]
#![warn(missing_docs, unused, rust_2018_idioms)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for the common reference string.
pub mod crs;
/// Module for errors.
pub mod errors;
/// Module for the inner product argument.
pub mod ipa;
/// Module for vector helpers shared by the protocols.
pub mod math_utils;
/// Module for multipoint openings.
pub mod multiproof;
/// Module for polynomials in monomial and Lagrange form.
pub mod polynomial;
/// Module for the Fiat-Shamir transcript.
pub mod transcript;

pub use crs::CRS;
pub use ipa::{IPAConfig, IpaProof};
pub use multiproof::{MultiProof, ProverQuery, VerifierQuery};
pub use transcript::{Transcript, TranscriptProtocol};
