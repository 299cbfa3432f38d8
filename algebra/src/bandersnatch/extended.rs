use crate::bandersnatch::{AffinePoint, Fp, Fr};
use crate::prelude::*;
use ark_ec::{CurveGroup, Group as ArkGroup};
use ark_ed_on_bls12_381_bandersnatch::EdwardsProjective;
use ark_ff::{BigInteger, PrimeField};

/// A Bandersnatch point in extended twisted Edwards coordinates `(X, Y, T, Z)`,
/// with `x = X/Z`, `y = Y/Z` and `T = XY/Z`.
#[derive(Copy, Clone, Debug)]
pub struct ExtendedPoint(pub(crate) EdwardsProjective);

impl Default for ExtendedPoint {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl ExtendedPoint {
    /// Return the identity `(0, 1, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self(EdwardsProjective::zero())
    }

    /// Return the standard generator.
    #[inline]
    pub fn generator() -> Self {
        Self(EdwardsProjective::generator())
    }

    /// Build a point from raw coordinates without any check.
    #[inline]
    pub fn new_unchecked(x: Fp, y: Fp, t: Fp, z: Fp) -> Self {
        Self(EdwardsProjective::new_unchecked(x.0, y.0, t.0, z.0))
    }

    /// The `X` coordinate.
    #[inline]
    pub fn x(&self) -> Fp {
        Fp(self.0.x)
    }

    /// The `Y` coordinate.
    #[inline]
    pub fn y(&self) -> Fp {
        Fp(self.0.y)
    }

    /// The `T` coordinate.
    #[inline]
    pub fn t(&self) -> Fp {
        Fp(self.0.t)
    }

    /// The `Z` coordinate.
    #[inline]
    pub fn z(&self) -> Fp {
        Fp(self.0.z)
    }

    /// Whether this is the identity: `X = 0`, `Y = Z != 0` and `T = 0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Return the doubling of the point.
    #[inline]
    pub fn double(&self) -> Self {
        Self(ArkGroup::double(&self.0))
    }

    /// Multiply by a scalar with double-and-add, most significant bit first.
    pub fn scalar_mul(&self, scalar: &Fr) -> Self {
        let bits = scalar.0.into_bigint().to_bits_be();
        let mut acc = EdwardsProjective::zero();
        for bit in bits.into_iter().skip_while(|b| !b) {
            ArkGroup::double_in_place(&mut acc);
            if bit {
                acc += &self.0;
            }
        }
        Self(acc)
    }

    /// Convert to affine coordinates, failing when `Z = 0`.
    pub fn to_affine(&self) -> Result<AffinePoint> {
        let z_inv = self.z().inv().map_err(|_| AlgebraError::DivisionByZero)?;
        Ok(AffinePoint::new_unchecked(
            self.x().mul(&z_inv),
            self.y().mul(&z_inv),
        ))
    }

    /// Convert a batch of points to affine coordinates with one field inversion.
    pub fn batch_to_affine(points: &[Self]) -> Vec<AffinePoint> {
        let raw: Vec<EdwardsProjective> = points.iter().map(|p| p.0).collect();
        EdwardsProjective::normalize_batch(&raw)
            .into_iter()
            .map(AffinePoint)
            .collect()
    }
}

impl From<AffinePoint> for ExtendedPoint {
    #[inline]
    fn from(p: AffinePoint) -> Self {
        Self(p.0.into())
    }
}

impl PartialEq for ExtendedPoint {
    /// Projective equality: `X1·Z2 == X2·Z1` and `Y1·Z2 == Y2·Z1`.
    fn eq(&self, other: &Self) -> bool {
        self.0.x * other.0.z == other.0.x * self.0.z && self.0.y * other.0.z == other.0.y * self.0.z
    }
}

impl Eq for ExtendedPoint {}

impl<'a> Add<&'a ExtendedPoint> for ExtendedPoint {
    type Output = ExtendedPoint;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Sub<&'a ExtendedPoint> for ExtendedPoint {
    type Output = ExtendedPoint;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<'a> AddAssign<&'a ExtendedPoint> for ExtendedPoint {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        self.0 += rhs.0;
    }
}

impl<'a> Mul<&'a Fr> for ExtendedPoint {
    type Output = ExtendedPoint;

    #[inline]
    fn mul(self, rhs: &Fr) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl Neg for ExtendedPoint {
    type Output = ExtendedPoint;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
