use crate::prelude::*;
use ark_ed_on_bls12_381_bandersnatch::Fq;
use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

/// The base field of Bandersnatch, which is the scalar field of BLS12-381.
///
/// `p = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001`
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct Fp(pub(crate) Fq);

field_wrapper!(Fp, Fq);
