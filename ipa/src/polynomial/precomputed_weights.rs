use crate::errors::{IpaError, Result};
use crate::polynomial::MonomialBasis;
use verkle_algebra::{bandersnatch::Fr, prelude::*};

/// Barycentric data for the domain `0, 1, ..., n - 1`, built once and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecomputedWeights {
    /// The vanishing polynomial `A(X) = ∏ (X - i)`.
    pub vanishing: MonomialBasis,
    /// `A'(i)` for every domain point.
    pub barycentric_weights: Vec<Fr>,
    /// `1 / A'(i)` for every domain point.
    pub inverted_weights: Vec<Fr>,
    /// `1 / d` for `d` in `-(n - 1)..=(n - 1)`, stored at slot `d + n - 1`. The slot of `d = 0` holds zero.
    pub inverted_domain: Vec<Fr>,
}

impl PrecomputedWeights {
    /// Precompute the weights for a domain of `domain_size` points.
    pub fn new(domain_size: usize) -> Self {
        let domain: Vec<Fr> = (0..domain_size as u64).map(Fr::from).collect();
        let vanishing = MonomialBasis::vanishing_poly(&domain);
        let derivative = vanishing.formal_derivative();

        let barycentric_weights: Vec<Fr> = domain.iter().map(|x| derivative.evaluate(x)).collect();
        let inverted_weights = Fr::multi_inverse(&barycentric_weights);

        let diffs: Vec<Fr> = (0..domain_size.saturating_mul(2).saturating_sub(1))
            .map(|slot| Fr::from_i64(slot as i64 - (domain_size as i64 - 1)))
            .collect();
        let inverted_domain = Fr::multi_inverse(&diffs);

        Self {
            vanishing,
            barycentric_weights,
            inverted_weights,
            inverted_domain,
        }
    }

    /// The number of domain points.
    #[inline]
    pub fn domain_size(&self) -> usize {
        self.barycentric_weights.len()
    }

    /// Return `1 / (i - j)` from the table, zero when `i == j`. Both indices must be below `n`.
    #[inline]
    pub(crate) fn inverse_of_difference(&self, i: usize, j: usize) -> Fr {
        self.inverted_domain[i + self.domain_size() - 1 - j]
    }

    /// Return the index of `z` when it is a domain point.
    fn domain_index(&self, z: &Fr) -> Option<usize> {
        let limbs = z.get_little_endian_u64();
        if limbs[1..].iter().any(|l| *l != 0) || limbs[0] >= self.domain_size() as u64 {
            return None;
        }
        Some(limbs[0] as usize)
    }

    /// The vector `b` with `f(z) = Σ b_i·f_i` for any `f` given by its
    /// evaluations `f_i` on the domain.
    ///
    /// For `z` outside the domain `b_i = A(z) / (A'(i)·(z - i))`; inside the
    /// domain `b` is the indicator of `z`.
    pub fn barycentric_coefficients(&self, z: &Fr) -> Vec<Fr> {
        let n = self.domain_size();
        if let Some(index) = self.domain_index(z) {
            let mut coeffs = vec![Fr::zero(); n];
            coeffs[index] = Fr::one();
            return coeffs;
        }

        let diffs: Vec<Fr> = (0..n as u64).map(|i| z.sub(&Fr::from(i))).collect();
        let a_z = diffs.iter().fold(Fr::one(), |acc, d| acc.mul(d));
        Fr::multi_inverse(&diffs)
            .iter()
            .zip(self.inverted_weights.iter())
            .map(|(d_inv, w_inv)| a_z.mul(d_inv).mul(w_inv))
            .collect()
    }

    /// The evaluations of `(f(X) - f(index)) / (X - index)` on the domain.
    ///
    /// The value at `index` itself comes from the derivative weights instead of a division.
    pub fn divide_on_domain(&self, index: usize, f: &[Fr]) -> Result<Vec<Fr>> {
        if f.len() != self.domain_size() {
            return Err(IpaError::DomainMismatch);
        }
        if index >= f.len() {
            return Err(AlgebraError::IndexError.into());
        }

        let y = f[index];
        let mut quotient = vec![Fr::zero(); f.len()];
        for i in (0..f.len()).filter(|i| *i != index) {
            let q = f[i].sub(&y).mul(&self.inverse_of_difference(i, index));
            quotient[i] = q;

            let ratio = self.barycentric_weights[index].mul(&self.inverted_weights[i]);
            quotient[index].sub_assign(&ratio.mul(&q));
        }
        Ok(quotient)
    }

    /// The evaluations of `(f(X) - y) / (X - z)` on the domain, for `z` outside it.
    pub fn divide_outside_domain(&self, f: &[Fr], z: &Fr, y: &Fr) -> Result<Vec<Fr>> {
        if f.len() != self.domain_size() || self.domain_index(z).is_some() {
            return Err(IpaError::DomainMismatch);
        }
        let diffs: Vec<Fr> = (0..f.len() as u64).map(|i| Fr::from(i).sub(z)).collect();
        Ok(Fr::multi_inverse(&diffs)
            .iter()
            .zip(f.iter())
            .map(|(d_inv, f_i)| f_i.sub(y).mul(d_inv))
            .collect())
    }
}
