mod lagrange;
mod monomial;
mod precomputed_weights;

pub use lagrange::LagrangeBasis;
pub use monomial::MonomialBasis;
pub use precomputed_weights::PrecomputedWeights;

/// The number of evaluation points in a Verkle node.
pub const DOMAIN_SIZE: usize = 256;
