use crate::errors::{IpaError, Result};
use crate::polynomial::{LagrangeBasis, DOMAIN_SIZE};
use ark_std::{end_timer, start_timer};
use sha2::{Digest, Sha256};
use verkle_algebra::{
    bandersnatch::{Fp, Fr, POINT_LEN},
    banderwagon::Banderwagon,
    prelude::*,
};

/// The seed the basis points are derived from.
pub const CRS_SEED: &[u8] = b"eth_verkle_oct_2021";

/// SHA-256 of the 256 basis points derived from [`CRS_SEED`], serialized back to back.
pub const CRS_CHECKSUM: [u8; 32] = [
    0x1f, 0xca, 0xea, 0x10, 0xbf, 0x24, 0xf7, 0x50, 0x20, 0x0e, 0x06, 0xfa, 0x47, 0x3c, 0x76, 0xff,
    0x04, 0x68, 0x00, 0x72, 0x91, 0xfa, 0x54, 0x8e, 0x2d, 0x99, 0xf0, 0x9b, 0xa9, 0x25, 0x6f, 0xdb,
];

/// The common reference string: the basis points `G` that polynomials are
/// committed against and the auxiliary point `Q` that carries evaluations.
#[allow(non_snake_case)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CRS {
    /// The number of basis points.
    pub n: usize,
    /// The basis points.
    pub G: Vec<Banderwagon>,
    /// The auxiliary point.
    pub Q: Banderwagon,
}

impl Default for CRS {
    fn default() -> Self {
        CRS::new(DOMAIN_SIZE, CRS_SEED)
    }
}

impl CRS {
    /// Derive `n` basis points from `seed`.
    ///
    /// Candidate `i` hashes `seed || i` (eight bytes, big-endian) with SHA-256,
    /// reduces the digest big-endian into the base field and decodes the
    /// result as a group element. Candidates that do not decode are skipped.
    #[allow(non_snake_case)]
    pub fn new(n: usize, seed: &[u8]) -> Self {
        let timer = start_timer!(|| format!("Generate a reference string of width {}", n));
        let mut G = Vec::with_capacity(n);
        let mut counter = 0u64;
        while G.len() < n {
            let mut hasher = Sha256::new();
            hasher.update(seed);
            hasher.update(counter.to_be_bytes());
            let x = Fp::from_bytes_reduced_be(&hasher.finalize());
            if let Ok(point) = Banderwagon::from_bytes(&x.to_bytes_be()) {
                G.push(point);
            }
            counter += 1;
        }
        end_timer!(timer);

        Self {
            n,
            G,
            Q: Banderwagon::generator(),
        }
    }

    /// Commit to a vector of at most `n` values against the matching prefix of the basis.
    pub fn commit(&self, values: &[Fr]) -> Result<Banderwagon> {
        if values.len() > self.n {
            return Err(IpaError::DegreeError);
        }
        Ok(Banderwagon::msm_unchecked(&self.G[..values.len()], values))
    }

    /// Commit to a polynomial in evaluation form.
    pub fn commit_lagrange_poly(&self, poly: &LagrangeBasis) -> Result<Banderwagon> {
        self.commit(&poly.values)
    }

    /// Update a commitment after the value at `index` changed from `old_value` to `new_value`.
    pub fn update_commitment(
        &self,
        commitment: &Banderwagon,
        index: usize,
        old_value: &Fr,
        new_value: &Fr,
    ) -> Result<Banderwagon> {
        let base = self.G.get(index).ok_or(AlgebraError::IndexError)?;
        let delta = new_value.sub(old_value);
        Ok(commitment.add(&base.mul(&delta)))
    }

    /// SHA-256 of the serialized basis points.
    pub fn checksum(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for bytes in Banderwagon::batch_to_bytes(&self.G) {
            hasher.update(bytes);
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// The basis points followed by `Q`, 32 bytes each.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut points = self.G.clone();
        points.push(self.Q);
        Banderwagon::batch_to_bytes(&points).concat()
    }

    /// Load the default 256-point reference string, checking it against [`CRS_CHECKSUM`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with_checksum(bytes, &CRS_CHECKSUM)
    }

    /// Load a reference string and check its basis against `checksum`.
    ///
    /// Any basis point equal to the generator is rejected.
    #[allow(non_snake_case)]
    pub fn from_bytes_with_checksum(bytes: &[u8], checksum: &[u8; 32]) -> Result<Self> {
        if bytes.len() < 2 * POINT_LEN || bytes.len() % POINT_LEN != 0 {
            return Err(AlgebraError::InvalidEncoding.into());
        }
        let mut points = bytes
            .chunks(POINT_LEN)
            .map(Banderwagon::from_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()?;
        let Q = points.pop().ok_or(AlgebraError::InvalidEncoding)?;

        let crs = Self {
            n: points.len(),
            G: points,
            Q,
        };
        if crs.checksum() != *checksum {
            return Err(IpaError::CrsChecksumMismatch);
        }
        let generator = Banderwagon::generator();
        if crs.G.iter().any(|g| *g == generator) {
            return Err(IpaError::DegenerateCrs);
        }
        Ok(crs)
    }
}
