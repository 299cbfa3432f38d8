use crate::crs::CRS;
use crate::errors::{IpaError, Result};
use crate::math_utils::{fold_points, fold_scalars, inner_product};
use crate::polynomial::PrecomputedWeights;
use crate::transcript::TranscriptProtocol;
use ark_std::{end_timer, start_timer};
use verkle_algebra::{
    bandersnatch::{Fr, FIELD_ELEMENT_LEN, POINT_LEN},
    banderwagon::Banderwagon,
    prelude::*,
};

/// The context shared by provers and verifiers: the reference string and the
/// barycentric weights of its domain.
#[derive(Clone, Debug)]
pub struct IPAConfig {
    /// The common reference string.
    pub crs: CRS,
    /// Weights over the domain `0..crs.n`.
    pub precomputed_weights: PrecomputedWeights,
    num_rounds: usize,
}

impl Default for IPAConfig {
    fn default() -> Self {
        let crs = CRS::default();
        let precomputed_weights = PrecomputedWeights::new(crs.n);
        let num_rounds = crs.n.trailing_zeros() as usize;
        Self {
            crs,
            precomputed_weights,
            num_rounds,
        }
    }
}

impl IPAConfig {
    /// Build the context for a reference string whose width is a power of two.
    pub fn new(crs: CRS) -> Result<Self> {
        let num_rounds = log2_exact(crs.n).ok_or(AlgebraError::ParameterError)? as usize;
        let precomputed_weights = PrecomputedWeights::new(crs.n);
        Ok(Self {
            crs,
            precomputed_weights,
            num_rounds,
        })
    }

    /// The number of evaluation points.
    #[inline]
    pub fn domain_size(&self) -> usize {
        self.crs.n
    }

    /// The number of folding rounds, `log2` of the domain size.
    #[inline]
    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }

    /// Commit to the evaluations of a polynomial over the domain.
    #[inline]
    pub fn commit(&self, values: &[Fr]) -> Result<Banderwagon> {
        self.crs.commit(values)
    }

    /// Evaluate a polynomial given by its evaluations over the domain at any point `z`.
    pub fn evaluate(&self, values: &[Fr], z: &Fr) -> Result<Fr> {
        if values.len() != self.domain_size() {
            return Err(IpaError::DomainMismatch);
        }
        let b = self.precomputed_weights.barycentric_coefficients(z);
        Ok(inner_product(values, &b))
    }
}

/// A proof that a committed polynomial evaluates to a claimed value at a point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpaProof {
    /// The left cross commitments, one per round.
    pub l_vec: Vec<Banderwagon>,
    /// The right cross commitments, one per round.
    pub r_vec: Vec<Banderwagon>,
    /// The fully folded polynomial.
    pub a: Fr,
}

impl IpaProof {
    /// Prove that the polynomial with evaluations `a` over the domain, committed to
    /// as `commitment`, takes the value `Σ a_i·b_i(z)` at `z`.
    #[allow(non_snake_case)]
    pub fn create<T: TranscriptProtocol>(
        transcript: &mut T,
        config: &IPAConfig,
        commitment: &Banderwagon,
        a: &[Fr],
        z: &Fr,
    ) -> Result<IpaProof> {
        if a.len() != config.domain_size() {
            return Err(IpaError::DegreeError);
        }
        let timer = start_timer!(|| format!("Create an inner product proof over {} points", a.len()));
        transcript.domain_sep(b"ipa");

        let mut a = a.to_vec();
        let mut b = config.precomputed_weights.barycentric_coefficients(z);
        let mut G = config.crs.G.clone();
        let y = inner_product(&a, &b);

        transcript.append_point(commitment, b"C");
        transcript.append_scalar(z, b"input point");
        transcript.append_scalar(&y, b"output point");
        let w = transcript.challenge_scalar(b"w");
        let q = config.crs.Q.mul(&w);

        let mut l_vec = Vec::with_capacity(config.num_rounds());
        let mut r_vec = Vec::with_capacity(config.num_rounds());
        while a.len() > 1 {
            let m = a.len() / 2;
            let (a_l, a_r) = a.split_at(m);
            let (b_l, b_r) = b.split_at(m);
            let (g_l, g_r) = G.split_at(m);

            let z_l = inner_product(a_r, b_l);
            let z_r = inner_product(a_l, b_r);
            let c_l = Banderwagon::msm(g_l, a_r)?.add(&q.mul(&z_l));
            let c_r = Banderwagon::msm(g_r, a_l)?.add(&q.mul(&z_r));

            transcript.append_point(&c_l, b"L");
            transcript.append_point(&c_r, b"R");
            l_vec.push(c_l);
            r_vec.push(c_r);

            let x = transcript.challenge_scalar(b"x");
            let x_inv = x.inv()?;

            let next_a = fold_scalars(a_l, a_r, &x);
            let next_b = fold_scalars(b_l, b_r, &x_inv);
            let next_g = fold_points(g_l, g_r, &x_inv);
            a = next_a;
            b = next_b;
            G = next_g;
        }
        end_timer!(timer);

        Ok(IpaProof {
            l_vec,
            r_vec,
            a: a[0],
        })
    }

    /// Check the proof against `commitment`, the point `z` and the claimed value `y`.
    ///
    /// Returns `Ok(false)` for a well-formed proof that does not verify and
    /// `MalformedProof` when the number of rounds does not match the domain.
    pub fn verify<T: TranscriptProtocol>(
        &self,
        transcript: &mut T,
        config: &IPAConfig,
        commitment: &Banderwagon,
        z: &Fr,
        y: &Fr,
    ) -> Result<bool> {
        if self.l_vec.len() != self.r_vec.len() || self.l_vec.len() != config.num_rounds() {
            return Err(IpaError::MalformedProof);
        }
        let timer = start_timer!(|| "Verify an inner product proof");
        transcript.domain_sep(b"ipa");

        let b = config.precomputed_weights.barycentric_coefficients(z);
        transcript.append_point(commitment, b"C");
        transcript.append_scalar(z, b"input point");
        transcript.append_scalar(y, b"output point");
        let w = transcript.challenge_scalar(b"w");
        let q = config.crs.Q.mul(&w);

        let mut challenges = Vec::with_capacity(self.l_vec.len());
        for (l, r) in self.l_vec.iter().zip(self.r_vec.iter()) {
            transcript.append_point(l, b"L");
            transcript.append_point(r, b"R");
            challenges.push(transcript.challenge_scalar(b"x"));
        }
        let challenges_inv = Fr::multi_inverse(&challenges);

        // C + y·q + Σ x_j·L_j + x_j⁻¹·R_j
        let points: Vec<Banderwagon> = self.l_vec.iter().chain(self.r_vec.iter()).copied().collect();
        let scalars: Vec<Fr> = challenges.iter().chain(challenges_inv.iter()).copied().collect();
        let lhs = commitment
            .add(&q.mul(y))
            .add(&Banderwagon::msm(&points, &scalars)?);

        // Folding G and b with x_0⁻¹, ..., x_{k-1}⁻¹ weights the i-th entry by the
        // product of x_j⁻¹ over the bits of i, round 0 owning the top bit.
        let mut s = vec![Fr::one()];
        for x_inv in challenges_inv.iter().rev() {
            let scaled: Vec<Fr> = s.iter().map(|v| v.mul(x_inv)).collect();
            s.extend(scaled);
        }
        let g0 = Banderwagon::msm(&config.crs.G, &s)?;
        let b0 = inner_product(&b, &s);

        let rhs = g0.mul(&self.a).add(&q.mul(&self.a.mul(&b0)));
        end_timer!(timer);
        Ok(lhs == rhs)
    }

    /// Serialize as `L_0..L_{k-1} || R_0..R_{k-1} || a`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let points: Vec<Banderwagon> = self.l_vec.iter().chain(self.r_vec.iter()).copied().collect();
        let mut bytes = Banderwagon::batch_to_bytes(&points).concat();
        bytes.extend_from_slice(&self.a.to_bytes());
        bytes
    }

    /// Inverse of [`IpaProof::to_bytes`]; the number of rounds follows from the length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < FIELD_ELEMENT_LEN || (bytes.len() - FIELD_ELEMENT_LEN) % (2 * POINT_LEN) != 0
        {
            return Err(IpaError::MalformedProof);
        }
        let rounds = (bytes.len() - FIELD_ELEMENT_LEN) / (2 * POINT_LEN);
        let (point_bytes, a_bytes) = bytes.split_at(2 * rounds * POINT_LEN);

        let mut l_vec = point_bytes
            .chunks(POINT_LEN)
            .map(Banderwagon::from_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()?;
        let r_vec = l_vec.split_off(rounds);
        let a = Fr::from_bytes(a_bytes)?;
        Ok(IpaProof { l_vec, r_vec, a })
    }
}

impl VerkleFromToBytes for IpaProof {
    fn verkle_to_bytes(&self) -> Vec<u8> {
        self.to_bytes()
    }

    fn verkle_from_bytes(bytes: &[u8]) -> core::result::Result<Self, AlgebraError> {
        Self::from_bytes(bytes).map_err(|e| match e {
            IpaError::Algebra(e) => e,
            _ => AlgebraError::InvalidEncoding,
        })
    }
}

verkle_algebra::serialize_deserialize!(IpaProof);

#[cfg(test)]
mod test {
    use super::{IPAConfig, IpaProof};
    use crate::crs::{CRS, CRS_SEED};
    use crate::errors::IpaError;
    use crate::math_utils::inner_product;
    use crate::transcript::{Transcript, TranscriptProtocol};
    use verkle_algebra::{bandersnatch::Fr, banderwagon::Banderwagon, prelude::*};

    lazy_static::lazy_static! {
        static ref CONFIG: IPAConfig = IPAConfig::default();
    }

    fn test_poly() -> Vec<Fr> {
        (0..256u64).map(|i| Fr::from(i % 32 + 1)).collect()
    }

    #[test]
    fn test_create_and_verify() {
        let config = &*CONFIG;
        let poly = test_poly();
        let commitment = config.commit(&poly).unwrap();
        assert_eq!(
            hex::encode(commitment.to_bytes()),
            "1b9dff8f5ebbac250d291dfe90e36283a227c64b113c37f1bfb9e7a743cdb128"
        );

        let z = Fr::from(2101u32);
        let mut prover_transcript = Transcript::new(b"test");
        let proof = IpaProof::create(&mut prover_transcript, config, &commitment, &poly, &z).unwrap();
        assert_eq!(proof.l_vec.len(), 8);
        assert_eq!(
            hex::encode(prover_transcript.challenge_scalar(b"state").to_bytes()),
            "0a81881cbfd7d7197a54ebd67ed6a68b5867f3c783706675b34ece43e85e7306"
        );

        let y = config.evaluate(&poly, &z).unwrap();
        let mut verifier_transcript = Transcript::new(b"test");
        assert!(proof
            .verify(&mut verifier_transcript, config, &commitment, &z, &y)
            .unwrap());
        assert_eq!(
            hex::encode(verifier_transcript.challenge_scalar(b"state").to_bytes()),
            "0a81881cbfd7d7197a54ebd67ed6a68b5867f3c783706675b34ece43e85e7306"
        );
    }

    #[test]
    fn test_wrong_claims_fail() {
        let config = &*CONFIG;
        let mut prng = test_rng();
        let poly: Vec<Fr> = (0..256).map(|_| Fr::random(&mut prng)).collect();
        let commitment = config.commit(&poly).unwrap();
        let z = Fr::random(&mut prng);
        let y = config.evaluate(&poly, &z).unwrap();

        let proof = IpaProof::create(&mut Transcript::new(b"t"), config, &commitment, &poly, &z).unwrap();
        assert!(proof
            .verify(&mut Transcript::new(b"t"), config, &commitment, &z, &y)
            .unwrap());

        let wrong_y = y.add(&Fr::one());
        assert!(!proof
            .verify(&mut Transcript::new(b"t"), config, &commitment, &z, &wrong_y)
            .unwrap());
        let wrong_z = z.add(&Fr::one());
        assert!(!proof
            .verify(&mut Transcript::new(b"t"), config, &commitment, &wrong_z, &y)
            .unwrap());
        let wrong_c = commitment.add(&Banderwagon::generator());
        assert!(!proof
            .verify(&mut Transcript::new(b"t"), config, &wrong_c, &z, &y)
            .unwrap());
        assert!(!proof
            .verify(&mut Transcript::new(b"other"), config, &commitment, &z, &y)
            .unwrap());
    }

    #[test]
    fn test_in_domain_opening() {
        let config = &*CONFIG;
        let poly = test_poly();
        let commitment = config.commit(&poly).unwrap();
        let z = Fr::from(40u32);
        let y = config.evaluate(&poly, &z).unwrap();
        assert_eq!(y, Fr::from(9u32));

        let proof = IpaProof::create(&mut Transcript::new(b"t"), config, &commitment, &poly, &z).unwrap();
        assert!(proof
            .verify(&mut Transcript::new(b"t"), config, &commitment, &z, &y)
            .unwrap());
    }

    #[test]
    fn test_small_domain() {
        let config = IPAConfig::new(CRS::new(8, CRS_SEED)).unwrap();
        assert_eq!(config.num_rounds(), 3);
        let poly: Vec<Fr> = (1u32..=8).map(Fr::from).collect();
        let commitment = config.commit(&poly).unwrap();
        let z = Fr::from(100u32);
        let b = config.precomputed_weights.barycentric_coefficients(&z);
        let y = inner_product(&poly, &b);

        let proof = IpaProof::create(&mut Transcript::new(b"t"), &config, &commitment, &poly, &z).unwrap();
        assert!(proof
            .verify(&mut Transcript::new(b"t"), &config, &commitment, &z, &y)
            .unwrap());
        // f(X) = X + 1
        assert_eq!(y, Fr::from(101u32));

        // width 1 skips the folding rounds entirely
        let single = IPAConfig::new(CRS::new(1, CRS_SEED)).unwrap();
        let commitment = single.commit(&[Fr::from(5u32)]).unwrap();
        let z = Fr::from(3u32);
        let y = single.evaluate(&[Fr::from(5u32)], &z).unwrap();
        let proof = IpaProof::create(&mut Transcript::new(b"t"), &single, &commitment, &[Fr::from(5u32)], &z)
            .unwrap();
        assert!(proof.l_vec.is_empty());
        assert!(proof
            .verify(&mut Transcript::new(b"t"), &single, &commitment, &z, &y)
            .unwrap());
    }

    #[test]
    fn test_config_rejections() {
        assert_eq!(
            IPAConfig::new(CRS::new(6, CRS_SEED)).err(),
            Some(IpaError::Algebra(AlgebraError::ParameterError))
        );
        let poly: Vec<Fr> = (0..16u32).map(Fr::from).collect();
        let commitment = CONFIG.commit(&poly).unwrap();
        assert_eq!(
            IpaProof::create(&mut Transcript::new(b"t"), &CONFIG, &commitment, &poly, &Fr::one()),
            Err(IpaError::DegreeError)
        );
    }

    #[test]
    fn test_malformed_proof() {
        let config = &*CONFIG;
        let poly = test_poly();
        let commitment = config.commit(&poly).unwrap();
        let z = Fr::from(2101u32);
        let y = config.evaluate(&poly, &z).unwrap();
        let proof = IpaProof::create(&mut Transcript::new(b"t"), config, &commitment, &poly, &z).unwrap();

        let mut short = proof.clone();
        short.l_vec.pop();
        short.r_vec.pop();
        assert_eq!(
            short.verify(&mut Transcript::new(b"t"), config, &commitment, &z, &y),
            Err(IpaError::MalformedProof)
        );

        let mut unbalanced = proof;
        unbalanced.r_vec.pop();
        assert_eq!(
            unbalanced.verify(&mut Transcript::new(b"t"), config, &commitment, &z, &y),
            Err(IpaError::MalformedProof)
        );
    }

    #[test]
    fn test_serialization() {
        let config = &*CONFIG;
        let poly = test_poly();
        let commitment = config.commit(&poly).unwrap();
        let z = Fr::from(2101u32);
        let proof = IpaProof::create(&mut Transcript::new(b"t"), config, &commitment, &poly, &z).unwrap();

        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), 8 * 64 + 32);
        assert_eq!(IpaProof::from_bytes(&bytes).unwrap(), proof);
        assert_eq!(
            IpaProof::from_bytes(&bytes[1..]),
            Err(IpaError::MalformedProof)
        );
        assert_eq!(IpaProof::from_bytes(&[]), Err(IpaError::MalformedProof));

        // a non-canonical scalar
        let mut bad_scalar = bytes.clone();
        let len = bad_scalar.len();
        bad_scalar[len - 32..].copy_from_slice(&[0xff; 32]);
        assert_eq!(
            IpaProof::from_bytes(&bad_scalar),
            Err(IpaError::Algebra(AlgebraError::InvalidEncoding))
        );

        let json = serde_json::to_string(&proof).unwrap();
        assert_eq!(serde_json::from_str::<IpaProof>(&json).unwrap(), proof);
        let bin = bincode::serialize(&proof).unwrap();
        assert_eq!(bincode::deserialize::<IpaProof>(&bin).unwrap(), proof);
    }
}
