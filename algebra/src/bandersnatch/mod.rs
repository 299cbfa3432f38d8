use ark_ec::twisted_edwards::TECurveConfig;
use ark_ed_on_bls12_381_bandersnatch::BandersnatchConfig;

#[macro_use]
mod field;

mod affine;
mod extended;
mod fp;
mod fr;

pub use affine::*;
pub use extended::*;
pub use fp::*;
pub use fr::*;

/// The number of bytes of a serialized field element, in either field.
pub const FIELD_ELEMENT_LEN: usize = 32;

/// The number of bytes of a serialized point.
pub const POINT_LEN: usize = 32;

/// The flag set in the last byte of an affine point encoding when `y` is lexicographically largest.
pub const AFFINE_SIGN_FLAG: u8 = 0x80;

/// The twisted Edwards coefficient `a = -5`.
pub const COEFF_A: Fp = Fp(BandersnatchConfig::COEFF_A);

/// The twisted Edwards coefficient
/// `d = 45022363124591815672509500913686876175488063829319466900776701791074614335719`.
pub const COEFF_D: Fp = Fp(BandersnatchConfig::COEFF_D);
