use crate::prelude::*;
pub use ark_ff::LegendreSymbol;
use ark_std::fmt::Debug;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + for<'a> From<&'a BigUint>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return a representation of the scalar as a vector of u64 in the little-endian order
    fn get_little_endian_u64(&self) -> Vec<u64>;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to the canonical little-endian bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert to the canonical big-endian bytes
    fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }

    /// Convert from exactly `bytes_len()` little-endian bytes encoding a value below the modulus
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Convert from exactly `bytes_len()` big-endian bytes encoding a value below the modulus
    fn from_bytes_be(bytes: &[u8]) -> Result<Self> {
        let mut le = bytes.to_vec();
        le.reverse();
        Self::from_bytes(&le)
    }

    /// Convert from little-endian bytes of any length, reducing modulo the field size
    fn from_bytes_reduced(bytes: &[u8]) -> Self;

    /// Convert from big-endian bytes of any length, reducing modulo the field size
    fn from_bytes_reduced_be(bytes: &[u8]) -> Self;

    /// Map a signed integer into the field, negative values to `modulus - |v|`
    fn from_i64(value: i64) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 {
            magnitude.neg()
        } else {
            magnitude
        }
    }

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return `self / other`
    fn div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(other.inv()?.mul(self))
    }

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// Return the doubling of the field element
    fn double(&self) -> Self;

    /// Return a square root, or `None` if the element is not a quadratic residue.
    /// Which of the two roots comes back is unspecified.
    fn sqrt(&self) -> Option<Self>;

    /// Return the legendre symbol of the field element
    fn legendre(&self) -> LegendreSymbol;

    /// Whether the canonical residue is greater than `(modulus - 1) / 2`
    fn lexicographically_largest(&self) -> bool;

    /// Invert every element with a single field inversion.
    /// Zeros are left as zeros.
    fn multi_inverse(values: &[Self]) -> Vec<Self>;

    /// Convert into BigUint, often for debug.
    fn into_biguint(self) -> BigUint {
        self.into()
    }
}

/// The trait for group elements
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Serialize
    + Neg<Output = Self>
    + for<'de> Deserialize<'de>
    + Sync
    + Send
{
    /// The scalar type
    type ScalarType: Scalar;

    /// The number of bytes for a compressed representation of a group element
    const COMPRESSED_LEN: usize;

    /// Return the doubling of the group element
    fn double(&self) -> Self;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Return the base element (i.e., 1 * G)
    fn get_base() -> Self;

    /// Return a random element
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Convert to bytes in the compressed representation
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the compressed representation
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;
}

#[cfg(test)]
pub(crate) mod group_tests {
    use crate::prelude::*;

    pub(crate) fn test_scalar_operations<S: Scalar>() {
        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = a.add(&b);
        let d = S::from(100u32);
        assert_eq!(c, d);

        let mut x = S::from(0u32);
        x.add_assign(&a);
        x.add_assign(&b);
        assert_eq!(x, d);

        let a = S::from(10u32);
        let b = S::from(40u32);
        let c = a.mul(&b);
        let d = S::from(400u32);
        assert_eq!(c, d);

        let a = S::from(0xFFFFFFFFu32);
        let b = S::from(1u32);
        let c = a.add(&b);
        let d = S::from(0x100000000u64);
        assert_eq!(c, d);

        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = b.sub(&a);
        let d = S::from(20u32);
        assert_eq!(c, d);

        let a = S::from(40u32);
        let b = a.neg();
        let c = b.add(&a);
        assert_eq!(c, S::zero());

        let a = S::from(40u32);
        let b = a.inv().unwrap();
        let c = b.mul(&a);
        assert_eq!(c, S::one());

        assert_eq!(S::zero().inv(), Err(AlgebraError::NoInverse));

        let a = S::from(400u32);
        let b = S::from(40u32);
        assert_eq!(Scalar::div(&a, &b).unwrap(), S::from(10u32));
        assert_eq!(
            Scalar::div(&a, &S::zero()),
            Err(AlgebraError::DivisionByZero)
        );

        assert_eq!(S::from_i64(-5).add(&S::from(5u32)), S::zero());
        assert_eq!(S::from_i64(7), S::from(7u32));
    }

    pub(crate) fn test_scalar_serialization<S: Scalar>() {
        let mut prng = test_rng();
        for _ in 0..16 {
            let a = S::random(&mut prng);
            let bytes = a.to_bytes();
            assert_eq!(bytes.len(), S::bytes_len());
            assert_eq!(S::from_bytes(&bytes).unwrap(), a);
            assert_eq!(S::from_bytes_be(&a.to_bytes_be()).unwrap(), a);
            assert_eq!(S::from_bytes_reduced(&bytes), a);
            assert_eq!(S::from_bytes_reduced_be(&a.to_bytes_be()), a);
        }

        // the modulus itself is not a canonical encoding
        let mut modulus = S::get_field_size_biguint().to_bytes_le();
        modulus.resize(S::bytes_len(), 0);
        assert_eq!(S::from_bytes(&modulus), Err(AlgebraError::InvalidEncoding));
        assert_eq!(S::from_bytes_reduced(&modulus), S::zero());

        assert_eq!(
            S::from_bytes(&[1u8; 31]),
            Err(AlgebraError::InvalidEncoding)
        );
    }

    pub(crate) fn test_sqrt_and_legendre<S: Scalar>() {
        let mut prng = test_rng();
        let mut residues = 0;
        for _ in 0..32 {
            let a = S::random(&mut prng);
            match a.sqrt() {
                Some(root) => {
                    residues += 1;
                    assert_eq!(root.square(), a);
                    assert_eq!(a.legendre(), LegendreSymbol::QuadraticResidue);
                }
                None => assert_eq!(a.legendre(), LegendreSymbol::QuadraticNonResidue),
            }
            let sq = a.square();
            let root = sq.sqrt().unwrap();
            assert!(root == a || root == a.neg());
        }
        assert!(residues > 0);
        assert_eq!(S::zero().legendre(), LegendreSymbol::Zero);
    }

    pub(crate) fn test_multi_inverse<S: Scalar>() {
        let mut prng = test_rng();
        let mut values: Vec<S> = (0..10).map(|_| S::random(&mut prng)).collect();
        values[3] = S::zero();
        values[7] = S::zero();
        let inverses = S::multi_inverse(&values);
        for (v, inv) in values.iter().zip(inverses.iter()) {
            if v.is_zero() {
                assert!(inv.is_zero());
            } else {
                assert_eq!(*inv, v.inv().unwrap());
            }
        }
        assert!(S::multi_inverse(&[]).is_empty());
        assert_eq!(S::multi_inverse(&[S::zero()]), vec![S::zero()]);
    }

    pub(crate) fn test_lexicographic_order<S: Scalar>() {
        assert!(!S::zero().lexicographically_largest());
        assert!(!S::one().lexicographically_largest());
        assert!(S::one().neg().lexicographically_largest());
        let mut prng = test_rng();
        for _ in 0..16 {
            let a = S::random(&mut prng);
            if !a.is_zero() {
                assert_ne!(a.lexicographically_largest(), a.neg().lexicographically_largest());
            }
        }
    }
}
