use sha2::{Digest, Sha256};
use verkle_algebra::{bandersnatch::Fr, banderwagon::Banderwagon, prelude::*};

/// A Fiat-Shamir transcript that hashes its whole buffer with SHA-256 on every challenge.
///
/// A transcript is owned by a single prover or verifier for the length of one proof.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    state: Vec<u8>,
}

impl Transcript {
    /// Start a transcript for the protocol named `label`.
    pub fn new(label: &[u8]) -> Self {
        Self {
            state: label.to_vec(),
        }
    }
}

/// The operations the provers and verifiers need from a transcript.
pub trait TranscriptProtocol {
    /// Write `label` followed by `data`.
    fn append_bytes(&mut self, data: &[u8], label: &[u8]);

    /// Write a scalar in its canonical little-endian encoding.
    fn append_scalar(&mut self, scalar: &Fr, label: &[u8]);

    /// Write a group element in its canonical encoding.
    fn append_point(&mut self, point: &Banderwagon, label: &[u8]);

    /// Write `label` on its own, separating protocol stages.
    fn domain_sep(&mut self, label: &[u8]);

    /// Derive a challenge from everything written so far.
    ///
    /// The buffer is then reset and reseeded with the challenge itself, so
    /// later challenges depend on every earlier one.
    fn challenge_scalar(&mut self, label: &[u8]) -> Fr;
}

impl TranscriptProtocol for Transcript {
    fn append_bytes(&mut self, data: &[u8], label: &[u8]) {
        self.state.extend_from_slice(label);
        self.state.extend_from_slice(data);
    }

    fn append_scalar(&mut self, scalar: &Fr, label: &[u8]) {
        self.append_bytes(&scalar.to_bytes(), label);
    }

    fn append_point(&mut self, point: &Banderwagon, label: &[u8]) {
        self.append_bytes(&point.to_bytes(), label);
    }

    fn domain_sep(&mut self, label: &[u8]) {
        self.state.extend_from_slice(label);
    }

    fn challenge_scalar(&mut self, label: &[u8]) -> Fr {
        self.domain_sep(label);
        let digest = Sha256::digest(&self.state);
        let challenge = Fr::from_bytes_reduced(&digest);
        self.state.clear();
        self.append_scalar(&challenge, label);
        challenge
    }
}
