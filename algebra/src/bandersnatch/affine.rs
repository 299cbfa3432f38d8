use crate::bandersnatch::{
    ExtendedPoint, Fp, Fr, AFFINE_SIGN_FLAG, COEFF_A, COEFF_D, FIELD_ELEMENT_LEN, POINT_LEN,
};
use crate::prelude::*;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ed_on_bls12_381_bandersnatch::EdwardsAffine;

/// A Bandersnatch point `(x, y)` on `a·x² + y² = 1 + d·x²·y²`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct AffinePoint(pub(crate) EdwardsAffine);

impl Default for AffinePoint {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl AffinePoint {
    /// Return the identity `(0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self(EdwardsAffine::zero())
    }

    /// Return the standard generator.
    #[inline]
    pub fn generator() -> Self {
        Self(EdwardsAffine::generator())
    }

    /// Build a point from coordinates without checking the curve equation.
    #[inline]
    pub fn new_unchecked(x: Fp, y: Fp) -> Self {
        Self(EdwardsAffine::new_unchecked(x.0, y.0))
    }

    /// The `x` coordinate.
    #[inline]
    pub fn x(&self) -> Fp {
        Fp(self.0.x)
    }

    /// The `y` coordinate.
    #[inline]
    pub fn y(&self) -> Fp {
        Fp(self.0.y)
    }

    /// Whether `a·x² + y² = 1 + d·x²·y²` holds.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x().square();
        let y2 = self.y().square();
        let lhs = COEFF_A.mul(&x2).add(&y2);
        let rhs = Fp::one().add(&COEFF_D.mul(&x2).mul(&y2));
        lhs == rhs
    }

    /// Return the doubling of the point.
    #[inline]
    pub fn double(&self) -> Self {
        (*self).add(self)
    }

    /// Multiply by a scalar with double-and-add.
    pub fn scalar_mul(&self, scalar: &Fr) -> Self {
        let p = ExtendedPoint::from(*self).scalar_mul(scalar);
        Self(p.0.into_affine())
    }

    /// Recover `y` from `x`: `y² = (1 - a·x²) / (1 - d·x²)`.
    ///
    /// Return the root whose lexicographic ordering matches `choose_largest`,
    /// or `None` when `x` is not the abscissa of a curve point.
    pub fn get_y_coordinate(x: &Fp, choose_largest: bool) -> Option<Fp> {
        let x2 = x.square();
        let num = Fp::one().sub(&COEFF_A.mul(&x2));
        let den = Fp::one().sub(&COEFF_D.mul(&x2));
        let y2 = Scalar::div(&num, &den).ok()?;
        let y = y2.sqrt()?;
        if y.lexicographically_largest() == choose_largest {
            Some(y)
        } else {
            Some(y.neg())
        }
    }

    /// Little-endian `x`, with `0x80` set on the last byte when `y` is lexicographically largest.
    pub fn to_bytes(&self) -> [u8; POINT_LEN] {
        let mut bytes = [0u8; POINT_LEN];
        bytes.copy_from_slice(&self.x().to_bytes());
        if self.y().lexicographically_largest() {
            bytes[FIELD_ELEMENT_LEN - 1] |= AFFINE_SIGN_FLAG;
        }
        bytes
    }

    /// Inverse of [`AffinePoint::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != POINT_LEN {
            return Err(AlgebraError::InvalidEncoding);
        }
        let mut x_bytes = [0u8; FIELD_ELEMENT_LEN];
        x_bytes.copy_from_slice(bytes);
        let choose_largest = x_bytes[FIELD_ELEMENT_LEN - 1] & AFFINE_SIGN_FLAG != 0;
        x_bytes[FIELD_ELEMENT_LEN - 1] &= !AFFINE_SIGN_FLAG;

        let x = Fp::from_bytes(&x_bytes)?;
        let y = Self::get_y_coordinate(&x, choose_largest).ok_or(AlgebraError::InvalidEncoding)?;
        Ok(Self::new_unchecked(x, y))
    }
}

impl<'a> Add<&'a AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self((self.0 + rhs.0).into_affine())
    }
}

impl<'a> Sub<&'a AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self((self.0 - rhs.0).into_affine())
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    /// `(-x, y)`
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new_unchecked(self.x().neg(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use crate::bandersnatch::{AffinePoint, Fp, Fr};
    use crate::prelude::*;

    const GENERATOR_BYTES: &str = "18ae52a26618e7e1658499ad22c0792bf342be7b77113774c5340b2ccc32c129";
    const NEG_GENERATOR_BYTES: &str =
        "e951ad5d98e7181e99d76452e0e343281295e38d90c602bf824892fd86742c4a";

    #[test]
    fn test_generator_encoding() {
        let g = AffinePoint::generator();
        assert!(g.is_on_curve());
        assert_eq!(hex::encode(g.to_bytes()), GENERATOR_BYTES);

        let neg = g.scalar_mul(&Fr::from_i64(-1));
        assert_eq!(neg, g.neg());
        assert_eq!(hex::encode(neg.to_bytes()), NEG_GENERATOR_BYTES);
    }

    #[test]
    fn test_group_laws() {
        let g = AffinePoint::generator();
        assert_eq!(g.add(&g), g.double());
        assert_eq!(g.add(&g.neg()), AffinePoint::identity());
        assert_eq!(g.scalar_mul(&Fr::from(2u32)), g.double());
        assert_eq!(g.scalar_mul(&Fr::from(3u32)).sub(&g), g.double());
        assert_eq!(g.add(&AffinePoint::identity()), g);
        assert!(AffinePoint::identity().is_on_curve());
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut prng = test_rng();
        let g = AffinePoint::generator();
        for _ in 0..8 {
            let p = g.scalar_mul(&Fr::random(&mut prng));
            assert!(p.is_on_curve());
            assert_eq!(AffinePoint::from_bytes(&p.to_bytes()).unwrap(), p);
            assert_eq!(AffinePoint::from_bytes(&p.neg().to_bytes()).unwrap(), p.neg());
        }
        assert_eq!(
            AffinePoint::from_bytes(&[0u8; 31]),
            Err(AlgebraError::InvalidEncoding)
        );
    }

    #[test]
    fn test_sign_flag() {
        let g = AffinePoint::generator();
        let flipped = AffinePoint::new_unchecked(g.x(), g.y().neg());
        assert!(flipped.is_on_curve());
        let bytes = flipped.to_bytes();
        assert_eq!(bytes[31] & 0x80, 0x80);
        assert_eq!(&bytes[..31], &g.to_bytes()[..31]);
        assert_eq!(AffinePoint::from_bytes(&bytes).unwrap(), flipped);
    }

    #[test]
    fn test_get_y_coordinate() {
        let g = AffinePoint::generator();
        let y_small = AffinePoint::get_y_coordinate(&g.x(), false).unwrap();
        let y_large = AffinePoint::get_y_coordinate(&g.x(), true).unwrap();
        assert_eq!(y_small, g.y());
        assert_eq!(y_large, g.y().neg());

        let y = AffinePoint::get_y_coordinate(&Fp::zero(), true).unwrap();
        assert_eq!(y, Fp::one().neg());

        // roughly half of all abscissas have no point on the curve
        let misses = (1u32..64)
            .filter(|i| AffinePoint::get_y_coordinate(&Fp::from(*i), true).is_none())
            .count();
        assert!(misses > 0);
    }

    #[test]
    fn test_off_curve() {
        let p = AffinePoint::new_unchecked(Fp::one(), Fp::one());
        assert!(!p.is_on_curve());
    }
}
