/// Implement arithmetic, `Scalar`, byte conversion and serde for a newtype
/// `$name(pub(crate) $inner)` over a 256-bit arkworks prime field.
///
/// The calling module must import `crate::prelude::*`, `num_bigint::BigUint`
/// and `ark_ff::{BigInteger, Field, PrimeField}`.
macro_rules! field_wrapper {
    ($name:ident, $inner:ty) => {
        impl One for $name {
            #[inline]
            fn one() -> Self {
                Self(<$inner>::one())
            }
        }

        impl Zero for $name {
            #[inline]
            fn zero() -> Self {
                Self(<$inner>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += rhs.0;
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= rhs.0;
            }
        }

        impl<'a> Mul<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> MulAssign<&'a $name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &Self) {
                self.0 *= rhs.0;
            }
        }

        impl Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Sum<$name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = $name>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = &'a $name>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(value: u32) -> Self {
                Self::from(value as u64)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(value: u64) -> Self {
                Self(<$inner>::from(value))
            }
        }

        impl Into<BigUint> for $name {
            #[inline]
            fn into(self) -> BigUint {
                self.0.into_bigint().into()
            }
        }

        impl<'a> From<&'a BigUint> for $name {
            #[inline]
            fn from(src: &BigUint) -> Self {
                Self(<$inner>::from(src.clone()))
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
                f.write_str("0x")?;
                for byte in self.to_bytes_be() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl Scalar for $name {
            #[inline]
            fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
                Self(<$inner>::rand(rng))
            }

            #[inline]
            fn get_field_size_biguint() -> BigUint {
                <$inner as PrimeField>::MODULUS.into()
            }

            #[inline]
            fn get_little_endian_u64(&self) -> Vec<u64> {
                self.0.into_bigint().0.to_vec()
            }

            #[inline]
            fn bytes_len() -> usize {
                crate::bandersnatch::FIELD_ELEMENT_LEN
            }

            #[inline]
            fn to_bytes(&self) -> Vec<u8> {
                self.0.into_bigint().to_bytes_le()
            }

            fn from_bytes(bytes: &[u8]) -> Result<Self> {
                let array: &[u8; crate::bandersnatch::FIELD_ELEMENT_LEN] =
                    bytes.try_into().map_err(|_| AlgebraError::InvalidEncoding)?;
                let limbs = u8_le_slice_to_u64_limbs(array);
                <$inner>::from_bigint(ark_ff::BigInt(limbs))
                    .map(Self)
                    .ok_or(AlgebraError::InvalidEncoding)
            }

            #[inline]
            fn from_bytes_reduced(bytes: &[u8]) -> Self {
                Self(<$inner>::from_le_bytes_mod_order(bytes))
            }

            #[inline]
            fn from_bytes_reduced_be(bytes: &[u8]) -> Self {
                Self(<$inner>::from_be_bytes_mod_order(bytes))
            }

            #[inline]
            fn inv(&self) -> Result<Self> {
                self.0.inverse().map(Self).ok_or(AlgebraError::NoInverse)
            }

            #[inline]
            fn square(&self) -> Self {
                Self(self.0.square())
            }

            #[inline]
            fn double(&self) -> Self {
                Self(self.0.double())
            }

            #[inline]
            fn sqrt(&self) -> Option<Self> {
                self.0.sqrt().map(Self)
            }

            #[inline]
            fn legendre(&self) -> LegendreSymbol {
                self.0.legendre()
            }

            #[inline]
            fn lexicographically_largest(&self) -> bool {
                self.0.into_bigint() > <$inner as PrimeField>::MODULUS_MINUS_ONE_DIV_TWO
            }

            fn multi_inverse(values: &[Self]) -> Vec<Self> {
                let mut raw: Vec<$inner> = values.iter().map(|v| v.0).collect();
                ark_ff::batch_inversion(&mut raw);
                raw.into_iter().map(Self).collect()
            }
        }

        impl VerkleFromToBytes for $name {
            fn verkle_to_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }

            fn verkle_from_bytes(bytes: &[u8]) -> Result<Self> {
                Self::from_bytes(bytes)
            }
        }

        crate::serialize_deserialize!($name);
    };
}
