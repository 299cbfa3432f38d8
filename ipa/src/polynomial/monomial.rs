use crate::errors::{IpaError, Result};
use verkle_algebra::{bandersnatch::Fr, prelude::*};

/// A polynomial in coefficient form, low-order coefficient first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonomialBasis {
    /// Coefficients of the polynomial
    pub coeffs: Vec<Fr>,
}

impl MonomialBasis {
    /// Build a polynomial from its coefficients, low-order coefficient first.
    pub fn new(coeffs: Vec<Fr>) -> Self {
        Self { coeffs }
    }

    /// Return the constant zero polynomial.
    pub fn zero() -> Self {
        Self::new(vec![Fr::zero()])
    }

    /// Return the degree, ignoring high-order zero coefficients.
    /// The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// Evaluate with Horner's method.
    /// # Example
    /// ```
    /// use verkle_ipa::polynomial::MonomialBasis;
    /// use verkle_algebra::bandersnatch::Fr;
    /// // 1 + 2X + 3X^2
    /// let poly = MonomialBasis::new(vec![Fr::from(1u32), Fr::from(2u32), Fr::from(3u32)]);
    /// assert_eq!(poly.evaluate(&Fr::from(2u32)), Fr::from(17u32));
    /// ```
    pub fn evaluate(&self, x: &Fr) -> Fr {
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, c| acc.mul(x).add(c))
    }

    /// Return the formal derivative.
    pub fn formal_derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul(&Fr::from(i as u64)))
            .collect();
        Self::new(coeffs)
    }

    /// Return `∏ (X - x_i)`.
    /// # Example
    /// ```
    /// use verkle_ipa::polynomial::MonomialBasis;
    /// use verkle_algebra::{bandersnatch::Fr, Zero};
    /// let xs: Vec<Fr> = (0u32..4).map(Fr::from).collect();
    /// let z = MonomialBasis::vanishing_poly(&xs);
    /// assert_eq!(z.degree(), 4);
    /// for x in xs.iter() {
    ///     assert!(z.evaluate(x).is_zero());
    /// }
    /// ```
    pub fn vanishing_poly(xs: &[Fr]) -> Self {
        let mut coeffs = Vec::with_capacity(xs.len() + 1);
        coeffs.push(Fr::one());
        for x in xs {
            // multiply the running product by (X - x)
            coeffs.insert(0, Fr::zero());
            for i in 0..coeffs.len() - 1 {
                let shifted = coeffs[i + 1].mul(x);
                coeffs[i].sub_assign(&shifted);
            }
        }
        Self::new(coeffs)
    }

    /// Long division, returning the quotient and the remainder.
    ///
    /// Fails with `DegreeError` when the divisor is longer than the dividend and
    /// with `DivisionByZero` when the leading coefficient of the divisor is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.coeffs.len() > self.coeffs.len() {
            return Err(IpaError::DegreeError);
        }
        let lead = divisor.coeffs.last().ok_or(IpaError::DegreeError)?;
        let lead_inv = lead.inv().map_err(|_| AlgebraError::DivisionByZero)?;

        let mut rem = self.coeffs.clone();
        let diff = self.coeffs.len() - divisor.coeffs.len();
        let mut quotient = vec![Fr::zero(); diff + 1];
        for k in (0..=diff).rev() {
            let q = rem[k + divisor.coeffs.len() - 1].mul(&lead_inv);
            quotient[k] = q;
            for (j, d) in divisor.coeffs.iter().enumerate() {
                let t = d.mul(&q);
                rem[k + j].sub_assign(&t);
            }
        }
        rem.truncate(divisor.coeffs.len() - 1);
        if rem.is_empty() {
            rem.push(Fr::zero());
        }
        Ok((Self::new(quotient), Self::new(rem)))
    }

    /// Long division returning the quotient only; any remainder is discarded.
    pub fn div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Self) -> Self {
        if self.coeffs.is_empty() || other.coeffs.is_empty() {
            return Self::zero();
        }
        let mut coeffs = vec![Fr::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j].add_assign(&a.mul(b));
            }
        }
        Self::new(coeffs)
    }

    /// Add another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = long.coeffs.clone();
        for (c, s) in coeffs.iter_mut().zip(short.coeffs.iter()) {
            c.add_assign(s);
        }
        Self::new(coeffs)
    }

    /// Subtract another polynomial, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let neg = Self::new(other.coeffs.iter().map(|c| c.neg()).collect());
        self.add(&neg)
    }

    /// Multiply every coefficient by `s`.
    pub fn scale(&self, s: &Fr) -> Self {
        Self::new(self.coeffs.iter().map(|c| c.mul(s)).collect())
    }
}
