use crate::prelude::*;
use ark_ed_on_bls12_381_bandersnatch::Fr as BandersnatchFr;
use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

/// The scalar field of Bandersnatch, i.e. the order of the prime subgroup.
///
/// `r = 0x1cfb69d4ca675f520cce760202687600ff8f87007419047174fd06b52876e7e1`
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct Fr(pub(crate) BandersnatchFr);

field_wrapper!(Fr, BandersnatchFr);

impl Fr {
    /// Return `[1, x, x^2, ..., x^(n-1)]`.
    pub fn powers(&self, n: usize) -> Vec<Fr> {
        let mut res = Vec::with_capacity(n);
        let mut cur = Fr::one();
        for _ in 0..n {
            res.push(cur);
            cur.mul_assign(self);
        }
        res
    }
}
