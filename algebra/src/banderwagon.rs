use crate::bandersnatch::{AffinePoint, ExtendedPoint, Fp, Fr, COEFF_A, POINT_LEN};
use crate::hash::{Hash, Hasher};
use crate::prelude::*;
use ark_ec::{CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_ed_on_bls12_381_bandersnatch::{EdwardsAffine, EdwardsProjective};

/// An element of the prime-order group Banderwagon.
///
/// Bandersnatch points are taken modulo the 2-torsion point `(0, -1)`, so
/// `(x, y)` and `(-x, -y)` are the same element. Equality and encoding
/// both work on the equivalence class.
#[derive(Copy, Clone, Debug)]
pub struct Banderwagon(pub(crate) EdwardsProjective);

impl Default for Banderwagon {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Banderwagon {
    fn eq(&self, other: &Self) -> bool {
        let (x1, y1) = (self.0.x, self.0.y);
        let (x2, y2) = (other.0.x, other.0.y);

        // (0, 0) is not a representative of any element
        if (x1.is_zero() && y1.is_zero()) || (x2.is_zero() && y2.is_zero()) {
            return false;
        }

        x1 * y2 == x2 * y1
    }
}

impl Eq for Banderwagon {}

impl Hash for Banderwagon {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state)
    }
}

impl Banderwagon {
    /// Return the identity element.
    #[inline]
    pub fn identity() -> Self {
        Self(EdwardsProjective::zero())
    }

    /// Return the standard generator.
    #[inline]
    pub fn generator() -> Self {
        Self(EdwardsProjective::generator())
    }

    /// Whether `1 - a·x²` is a non-zero square.
    ///
    /// The points whose `x` passes are exactly the points of `2·E`,
    /// which is where every Banderwagon representative lives.
    pub fn subgroup_check(x: &Fp) -> bool {
        let res = Fp::one().sub(&COEFF_A.mul(&x.square()));
        res.legendre() == LegendreSymbol::QuadraticResidue
    }

    /// The big-endian `x` of the representative whose `y` is lexicographically largest.
    pub fn to_bytes(&self) -> [u8; POINT_LEN] {
        Self::affine_to_bytes(&self.0.into_affine())
    }

    fn affine_to_bytes(affine: &EdwardsAffine) -> [u8; POINT_LEN] {
        let x = if Fp(affine.y).lexicographically_largest() {
            Fp(affine.x)
        } else {
            Fp(affine.x).neg()
        };
        let mut bytes = [0u8; POINT_LEN];
        bytes.copy_from_slice(&x.to_bytes_be());
        bytes
    }

    /// Serialize many elements with a single field inversion.
    pub fn batch_to_bytes(points: &[Self]) -> Vec<[u8; POINT_LEN]> {
        let raw: Vec<EdwardsProjective> = points.iter().map(|p| p.0).collect();
        EdwardsProjective::normalize_batch(&raw)
            .iter()
            .map(Self::affine_to_bytes)
            .collect()
    }

    /// Decode the 32-byte big-endian `x` of a representative.
    ///
    /// Fails with `InvalidEncoding` if `x` is not canonical, is not in the
    /// subgroup, or has no point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let x = Fp::from_bytes_be(bytes)?;
        if !Self::subgroup_check(&x) {
            return Err(AlgebraError::InvalidEncoding);
        }
        let y = AffinePoint::get_y_coordinate(&x, true).ok_or(AlgebraError::InvalidEncoding)?;
        Ok(Self::from(AffinePoint::new_unchecked(x, y)))
    }

    /// Map the element into the scalar field as the little-endian bytes of `x/y`, reduced mod `r`.
    ///
    /// `x/y` is the same for both representatives of an element.
    pub fn map_to_scalar_field(&self) -> Fr {
        let y_inv = Fp(self.0.y).inv().unwrap_or_else(|_| Fp::zero());
        let base = Fp(self.0.x).mul(&y_inv);
        Fr::from_bytes_reduced(&base.to_bytes())
    }

    /// [`Banderwagon::map_to_scalar_field`] over many elements with one field inversion.
    pub fn batch_map_to_scalar_field(points: &[Self]) -> Vec<Fr> {
        let ys: Vec<Fp> = points.iter().map(|p| Fp(p.0.y)).collect();
        let y_invs = Fp::multi_inverse(&ys);
        points
            .iter()
            .zip(y_invs.iter())
            .map(|(p, y_inv)| Fr::from_bytes_reduced(&Fp(p.0.x).mul(y_inv).to_bytes()))
            .collect()
    }

    /// Compute `Σ scalars_i · points_i`.
    pub fn msm(points: &[Self], scalars: &[Fr]) -> Result<Self> {
        if points.len() != scalars.len() {
            return Err(AlgebraError::ParameterError);
        }
        Ok(Self::msm_unchecked(points, scalars))
    }

    /// Like [`Banderwagon::msm`], truncating to the shorter input.
    pub fn msm_unchecked(points: &[Self], scalars: &[Fr]) -> Self {
        let raw: Vec<EdwardsProjective> = points.iter().map(|p| p.0).collect();
        let bases = EdwardsProjective::normalize_batch(&raw);
        let scalars_raw: Vec<_> = scalars.iter().map(|s| s.0).collect();
        Self(EdwardsProjective::msm_unchecked(&bases, &scalars_raw))
    }

    /// Return the underlying curve point.
    #[inline]
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint(self.0)
    }
}

impl From<AffinePoint> for Banderwagon {
    #[inline]
    fn from(p: AffinePoint) -> Self {
        Self(p.0.into())
    }
}

impl Group for Banderwagon {
    type ScalarType = Fr;
    const COMPRESSED_LEN: usize = POINT_LEN;

    #[inline]
    fn double(&self) -> Self {
        Self(ArkGroup::double(&self.0))
    }

    #[inline]
    fn get_identity() -> Self {
        Self::identity()
    }

    #[inline]
    fn get_base() -> Self {
        Self::generator()
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self::generator().mul(&Fr::random(rng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl<'a> Add<&'a Banderwagon> for Banderwagon {
    type Output = Banderwagon;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for Banderwagon {
    type Output = Banderwagon;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Sub<&'a Banderwagon> for Banderwagon {
    type Output = Banderwagon;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for Banderwagon {
    type Output = Banderwagon;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<'a> Mul<&'a Fr> for Banderwagon {
    type Output = Banderwagon;

    #[inline]
    fn mul(self, rhs: &Fr) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a> AddAssign<&'a Banderwagon> for Banderwagon {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        self.0 += rhs.0;
    }
}

impl<'a> SubAssign<&'a Banderwagon> for Banderwagon {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Banderwagon {
    type Output = Banderwagon;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum<Banderwagon> for Banderwagon {
    #[inline]
    fn sum<I: Iterator<Item = Banderwagon>>(iter: I) -> Self {
        iter.fold(Self::identity(), Add::add)
    }
}

impl VerkleFromToBytes for Banderwagon {
    fn verkle_to_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn verkle_from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

serialize_deserialize!(Banderwagon);
