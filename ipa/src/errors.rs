use ark_std::{error, fmt};
use verkle_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, IpaError>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum IpaError {
    /// Algebra error
    Algebra(AlgebraError),
    /// Lagrange polynomials over different domains, or an evaluation point inside the domain.
    DomainMismatch,
    /// The number of folding rounds in a proof does not match the domain.
    MalformedProof,
    /// The polynomial does not fit the width of the reference string.
    DegreeError,
    /// A loaded reference string does not hash to the expected digest.
    CrsChecksumMismatch,
    /// A loaded reference string contains the generator as a basis point.
    DegenerateCrs,
}

impl fmt::Display for IpaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use IpaError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            DomainMismatch => f.write_str("Evaluation domains do not match."),
            MalformedProof => f.write_str("Malformed proof."),
            DegreeError => f.write_str(
                "The polynomial does not match the width of the common reference string.",
            ),
            CrsChecksumMismatch => f.write_str("Common reference string checksum mismatch."),
            DegenerateCrs => f.write_str("Common reference string contains the generator."),
        }
    }
}

impl error::Error for IpaError {}

impl From<AlgebraError> for IpaError {
    fn from(e: AlgebraError) -> IpaError {
        IpaError::Algebra(e)
    }
}
