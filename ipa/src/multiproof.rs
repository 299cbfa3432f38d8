use crate::errors::{IpaError, Result};
use crate::ipa::{IPAConfig, IpaProof};
use crate::polynomial::LagrangeBasis;
use crate::transcript::TranscriptProtocol;
use ark_std::{collections::BTreeMap, end_timer, start_timer};
use verkle_algebra::{
    bandersnatch::{Fr, POINT_LEN},
    banderwagon::Banderwagon,
    prelude::*,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An opening the prover knows: the polynomial behind `commitment` takes the
/// value `result` at the domain point `point`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverQuery {
    /// The commitment to `poly`.
    pub commitment: Banderwagon,
    /// The polynomial in evaluation form over the whole domain.
    pub poly: LagrangeBasis,
    /// The index of the evaluation point in the domain.
    pub point: usize,
    /// The evaluation `poly(point)`.
    pub result: Fr,
}

/// An opening claim the verifier checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierQuery {
    /// The commitment to the polynomial.
    pub commitment: Banderwagon,
    /// The index of the evaluation point in the domain.
    pub point: usize,
    /// The claimed evaluation.
    pub result: Fr,
}

impl From<&ProverQuery> for VerifierQuery {
    fn from(query: &ProverQuery) -> Self {
        VerifierQuery {
            commitment: query.commitment,
            point: query.point,
            result: query.result,
        }
    }
}

impl From<ProverQuery> for VerifierQuery {
    fn from(query: ProverQuery) -> Self {
        VerifierQuery::from(&query)
    }
}

/// A single proof for many openings, possibly of different polynomials at different points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiProof {
    /// The opening of `h - g` at the challenge point.
    pub ipa: IpaProof,
    /// The commitment to `g`, the random combination of the quotients.
    pub d: Banderwagon,
}

fn append_queries<'a, T, I>(transcript: &mut T, queries: I)
where
    T: TranscriptProtocol,
    I: Iterator<Item = (&'a Banderwagon, usize, &'a Fr)>,
{
    for (commitment, point, result) in queries {
        transcript.append_point(commitment, b"C");
        transcript.append_scalar(&Fr::from(point as u64), b"z");
        transcript.append_scalar(result, b"y");
    }
}

/// `1 / (t - z_i)` for every query point.
fn inverse_distances(t: &Fr, points: &[usize]) -> Vec<Fr> {
    let distances: Vec<Fr> = points.iter().map(|z| t.sub(&Fr::from(*z as u64))).collect();
    Fr::multi_inverse(&distances)
}

#[cfg(feature = "parallel")]
fn quotients(config: &IPAConfig, queries: &[ProverQuery]) -> Result<Vec<Vec<Fr>>> {
    queries
        .par_iter()
        .map(|q| {
            config
                .precomputed_weights
                .divide_on_domain(q.point, &q.poly.values)
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn quotients(config: &IPAConfig, queries: &[ProverQuery]) -> Result<Vec<Vec<Fr>>> {
    queries
        .iter()
        .map(|q| {
            config
                .precomputed_weights
                .divide_on_domain(q.point, &q.poly.values)
        })
        .collect()
}

/// Accumulate `Σ coeff_i·v_i` into a vector of the domain size.
fn combine(size: usize, coeffs: &[Fr], vectors: &[&[Fr]]) -> Vec<Fr> {
    let mut acc = vec![Fr::zero(); size];
    for (coeff, v) in coeffs.iter().zip(vectors.iter()) {
        for (a, x) in acc.iter_mut().zip(v.iter()) {
            a.add_assign(&x.mul(coeff));
        }
    }
    acc
}

impl MultiProof {
    /// Prove every query at once.
    ///
    /// With `q_i` the quotient of `f_i` at `z_i` and `r`, `t` transcript
    /// challenges, `g = Σ r^i·q_i` and `h = Σ r^i·f_i / (t - z_i)`; the proof
    /// commits to `g` and opens `h - g` at `t`.
    pub fn open<T: TranscriptProtocol>(
        transcript: &mut T,
        config: &IPAConfig,
        queries: &[ProverQuery],
    ) -> Result<MultiProof> {
        let n = config.domain_size();
        if queries.iter().any(|q| q.poly.values.len() != n) {
            return Err(IpaError::DomainMismatch);
        }
        let timer = start_timer!(|| format!("Open {} queries", queries.len()));
        transcript.domain_sep(b"multiproof");
        append_queries(
            transcript,
            queries.iter().map(|q| (&q.commitment, q.point, &q.result)),
        );

        let r = transcript.challenge_scalar(b"r");
        let powers_of_r = r.powers(queries.len());

        let quotients = quotients(config, queries)?;
        let quotient_refs: Vec<&[Fr]> = quotients.iter().map(|q| q.as_slice()).collect();
        let g = combine(n, &powers_of_r, &quotient_refs);
        let d = config.commit(&g)?;
        transcript.append_point(&d, b"D");

        let t = transcript.challenge_scalar(b"t");
        let points: Vec<usize> = queries.iter().map(|q| q.point).collect();
        let coeffs: Vec<Fr> = inverse_distances(&t, &points)
            .iter()
            .zip(powers_of_r.iter())
            .map(|(d_inv, r_i)| d_inv.mul(r_i))
            .collect();
        let poly_refs: Vec<&[Fr]> = queries.iter().map(|q| q.poly.values.as_slice()).collect();
        let h = combine(n, &coeffs, &poly_refs);
        let e = config.commit(&h)?;
        transcript.append_point(&e, b"E");

        let h_minus_g: Vec<Fr> = h.iter().zip(g.iter()).map(|(h_i, g_i)| h_i.sub(g_i)).collect();
        let ipa = IpaProof::create(transcript, config, &e.sub(&d), &h_minus_g, &t)?;
        end_timer!(timer);

        Ok(MultiProof { ipa, d })
    }

    /// Check the proof against the queries.
    ///
    /// Queries sharing a commitment are merged into one term of the final multi-scalar multiplication.
    pub fn check<T: TranscriptProtocol>(
        &self,
        transcript: &mut T,
        config: &IPAConfig,
        queries: &[VerifierQuery],
    ) -> Result<bool> {
        let timer = start_timer!(|| format!("Check {} queries", queries.len()));
        transcript.domain_sep(b"multiproof");
        append_queries(
            transcript,
            queries.iter().map(|q| (&q.commitment, q.point, &q.result)),
        );

        let r = transcript.challenge_scalar(b"r");
        let powers_of_r = r.powers(queries.len());
        transcript.append_point(&self.d, b"D");
        let t = transcript.challenge_scalar(b"t");

        let points: Vec<usize> = queries.iter().map(|q| q.point).collect();
        let coeffs: Vec<Fr> = inverse_distances(&t, &points)
            .iter()
            .zip(powers_of_r.iter())
            .map(|(d_inv, r_i)| d_inv.mul(r_i))
            .collect();

        // g2(t) = Σ r^i·y_i / (t - z_i)
        let g2_t = coeffs
            .iter()
            .zip(queries.iter())
            .fold(Fr::zero(), |acc, (c, q)| acc.add(&c.mul(&q.result)));

        let commitments: Vec<Banderwagon> = queries.iter().map(|q| q.commitment).collect();
        let mut grouped: BTreeMap<[u8; POINT_LEN], (Banderwagon, Fr)> = BTreeMap::new();
        for ((key, commitment), coeff) in Banderwagon::batch_to_bytes(&commitments)
            .into_iter()
            .zip(commitments.iter())
            .zip(coeffs.iter())
        {
            let entry = grouped.entry(key).or_insert((*commitment, Fr::zero()));
            entry.1.add_assign(coeff);
        }
        let (msm_points, msm_scalars): (Vec<Banderwagon>, Vec<Fr>) = grouped.into_values().unzip();
        let e = Banderwagon::msm(&msm_points, &msm_scalars)?;
        transcript.append_point(&e, b"E");

        let res = self
            .ipa
            .verify(transcript, config, &e.sub(&self.d), &t, &g2_t);
        end_timer!(timer);
        res
    }

    /// Serialize as `D || ipa`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.d.to_bytes().to_vec();
        bytes.extend_from_slice(&self.ipa.to_bytes());
        bytes
    }

    /// Inverse of [`MultiProof::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < POINT_LEN {
            return Err(IpaError::MalformedProof);
        }
        let (d_bytes, ipa_bytes) = bytes.split_at(POINT_LEN);
        let d = Banderwagon::from_bytes(d_bytes)?;
        let ipa = IpaProof::from_bytes(ipa_bytes)?;
        Ok(MultiProof { ipa, d })
    }
}

impl VerkleFromToBytes for MultiProof {
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

verkle_algebra::serialize_deserialize!(MultiProof);
