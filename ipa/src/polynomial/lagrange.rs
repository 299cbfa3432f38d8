use crate::errors::{IpaError, Result};
use crate::math_utils::inner_product;
use crate::polynomial::{MonomialBasis, PrecomputedWeights};
use ark_std::collections::BTreeSet;
use verkle_algebra::{bandersnatch::Fr, prelude::*};

/// A polynomial given by its evaluations over a domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LagrangeBasis {
    /// `values[i]` is the evaluation at `domain[i]`.
    pub values: Vec<Fr>,
    /// The evaluation points.
    pub domain: Vec<Fr>,
}

impl LagrangeBasis {
    /// Evaluations over the domain `0, 1, ..., values.len() - 1`.
    pub fn new(values: Vec<Fr>) -> Self {
        let domain = (0..values.len() as u64).map(Fr::from).collect();
        Self { values, domain }
    }

    /// Evaluations over an explicit domain of distinct points; the two vectors
    /// must have the same length.
    pub fn with_domain(values: Vec<Fr>, domain: Vec<Fr>) -> Result<Self> {
        if values.len() != domain.len() {
            return Err(IpaError::DomainMismatch);
        }
        let distinct: BTreeSet<Vec<u8>> = domain.iter().map(|x| x.to_bytes()).collect();
        if distinct.len() != domain.len() {
            return Err(IpaError::DomainMismatch);
        }
        Ok(Self { values, domain })
    }

    /// Evaluate a coefficient-form polynomial over `0, 1, ..., size - 1`.
    pub fn from_monomial(poly: &MonomialBasis, size: usize) -> Self {
        let values = (0..size as u64).map(|i| poly.evaluate(&Fr::from(i))).collect();
        Self::new(values)
    }

    fn zip_with<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(&Fr, &Fr) -> Fr,
    {
        if self.domain != other.domain {
            return Err(IpaError::DomainMismatch);
        }
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| op(a, b))
            .collect();
        Ok(Self {
            values,
            domain: self.domain.clone(),
        })
    }

    /// Pointwise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.add(b))
    }

    /// Pointwise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.sub(b))
    }

    /// Pointwise product.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.mul(b))
    }

    /// Multiply every evaluation by `s`.
    pub fn scale(&self, s: &Fr) -> Self {
        Self {
            values: self.values.iter().map(|v| v.mul(s)).collect(),
            domain: self.domain.clone(),
        }
    }

    /// The value at the `index`-th domain point.
    pub fn evaluate_in_domain(&self, index: usize) -> Result<Fr> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| AlgebraError::IndexError.into())
    }

    /// Whether the domain is `0, 1, ..., n - 1`.
    fn has_index_domain(&self) -> bool {
        self.domain
            .iter()
            .enumerate()
            .all(|(i, x)| *x == Fr::from(i as u64))
    }

    /// Barycentric evaluation at a point outside the domain.
    ///
    /// `weights` only describe the domain `0..n`, so any other domain is a `DomainMismatch`.
    pub fn evaluate_outside_domain(&self, weights: &PrecomputedWeights, z: &Fr) -> Result<Fr> {
        if weights.domain_size() != self.values.len()
            || !self.has_index_domain()
            || self.domain.contains(z)
        {
            return Err(IpaError::DomainMismatch);
        }
        let coeffs = weights.barycentric_coefficients(z);
        Ok(inner_product(&self.values, &coeffs))
    }

    /// Convert to coefficient form.
    ///
    /// `f(X) = Σ f_i · A(X) / ((X - x_i)·A'(x_i))` with `A` the vanishing
    /// polynomial of the domain.
    pub fn interpolate(&self) -> Result<MonomialBasis> {
        let vanishing = MonomialBasis::vanishing_poly(&self.domain);
        let derivative = vanishing.formal_derivative();

        let denominators: Vec<Fr> = self.domain.iter().map(|x| derivative.evaluate(x)).collect();
        let denominators_inv = Fr::multi_inverse(&denominators);

        let mut res = MonomialBasis::new(vec![Fr::zero(); self.domain.len()]);
        for ((x, value), inv) in self
            .domain
            .iter()
            .zip(self.values.iter())
            .zip(denominators_inv.iter())
        {
            if value.is_zero() {
                continue;
            }
            let divisor = MonomialBasis::new(vec![x.neg(), Fr::one()]);
            let term = vanishing.div(&divisor)?;
            res = res.add(&term.scale(&value.mul(inv)));
        }
        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::LagrangeBasis;
    use crate::errors::IpaError;
    use crate::polynomial::{MonomialBasis, PrecomputedWeights};
    use verkle_algebra::{bandersnatch::Fr, prelude::*};

    fn evals(values: &[u64]) -> LagrangeBasis {
        LagrangeBasis::new(values.iter().map(|v| Fr::from(*v)).collect())
    }

    #[test]
    fn test_pointwise_arithmetic() {
        let a = evals(&[1, 2, 3, 4]);
        let b = evals(&[5, 6, 7, 8]);
        assert_eq!(a.add(&b).unwrap(), evals(&[6, 8, 10, 12]));
        assert_eq!(b.sub(&a).unwrap(), evals(&[4, 4, 4, 4]));
        assert_eq!(a.mul(&b).unwrap(), evals(&[5, 12, 21, 32]));
        assert_eq!(a.scale(&Fr::from(3u32)), evals(&[3, 6, 9, 12]));
        assert_eq!(a.evaluate_in_domain(2).unwrap(), Fr::from(3u32));
        assert_eq!(
            a.evaluate_in_domain(4),
            Err(IpaError::Algebra(AlgebraError::IndexError))
        );
    }

    #[test]
    fn test_domain_mismatch() {
        let a = evals(&[1, 2, 3, 4]);
        let shifted = LagrangeBasis::with_domain(
            a.values.clone(),
            (1u32..=4).map(Fr::from).collect(),
        )
        .unwrap();
        assert_eq!(a.add(&shifted), Err(IpaError::DomainMismatch));
        assert_eq!(a.sub(&evals(&[1, 2])), Err(IpaError::DomainMismatch));
        assert_eq!(a.mul(&shifted), Err(IpaError::DomainMismatch));
        assert_eq!(
            LagrangeBasis::with_domain(a.values.clone(), vec![Fr::zero()]),
            Err(IpaError::DomainMismatch)
        );
    }

    #[test]
    fn test_repeated_nodes() {
        let values = vec![Fr::from(1u32), Fr::from(2u32)];
        assert_eq!(
            LagrangeBasis::with_domain(values.clone(), vec![Fr::one(), Fr::one()]),
            Err(IpaError::DomainMismatch)
        );
        let domain = vec![Fr::from(3u32), Fr::from(9u32), Fr::from(3u32)];
        assert_eq!(
            LagrangeBasis::with_domain(vec![Fr::zero(); 3], domain),
            Err(IpaError::DomainMismatch)
        );
        assert!(LagrangeBasis::with_domain(values, vec![Fr::one(), Fr::from(2u32)]).is_ok());
    }

    #[test]
    fn test_interpolate() {
        // 3 + 2X + X^2 over a shifted domain
        let poly = MonomialBasis::new(vec![Fr::from(3u32), Fr::from(2u32), Fr::from(1u32)]);
        let domain: Vec<Fr> = (5u32..8).map(Fr::from).collect();
        let values = domain.iter().map(|x| poly.evaluate(x)).collect();
        let lagrange = LagrangeBasis::with_domain(values, domain).unwrap();
        assert_eq!(lagrange.interpolate().unwrap(), poly);

        let mut prng = test_rng();
        let random = LagrangeBasis::new((0..32).map(|_| Fr::random(&mut prng)).collect());
        let interpolated = random.interpolate().unwrap();
        for (x, v) in random.domain.iter().zip(random.values.iter()) {
            assert_eq!(interpolated.evaluate(x), *v);
        }
        assert_eq!(LagrangeBasis::from_monomial(&interpolated, 32), random);
    }

    #[test]
    fn test_evaluate_outside_domain() {
        let n = 32;
        let weights = PrecomputedWeights::new(n);
        let mut prng = test_rng();
        let poly = LagrangeBasis::new((0..n).map(|_| Fr::random(&mut prng)).collect());
        let monomial = poly.interpolate().unwrap();

        let z = Fr::random(&mut prng);
        assert_eq!(
            poly.evaluate_outside_domain(&weights, &z).unwrap(),
            monomial.evaluate(&z)
        );
        assert_eq!(
            poly.evaluate_outside_domain(&weights, &Fr::from(7u32)),
            Err(IpaError::DomainMismatch)
        );
        assert_eq!(
            poly.evaluate_outside_domain(&PrecomputedWeights::new(16), &z),
            Err(IpaError::DomainMismatch)
        );
    }

    #[test]
    fn test_evaluate_outside_shifted_domain() {
        // f(X) = X over 5..9
        let domain: Vec<Fr> = (5u32..9).map(Fr::from).collect();
        let poly = LagrangeBasis::with_domain(domain.clone(), domain).unwrap();
        let weights = PrecomputedWeights::new(4);
        assert_eq!(
            poly.evaluate_outside_domain(&weights, &Fr::from(2u32)),
            Err(IpaError::DomainMismatch)
        );
        assert_eq!(
            poly.evaluate_outside_domain(&weights, &Fr::from(100u32)),
            Err(IpaError::DomainMismatch)
        );

        // the same polynomial over 0..4 still evaluates
        let poly = LagrangeBasis::new((0u32..4).map(Fr::from).collect());
        assert_eq!(
            poly.evaluate_outside_domain(&weights, &Fr::from(100u32)).unwrap(),
            Fr::from(100u32)
        );
    }
}
