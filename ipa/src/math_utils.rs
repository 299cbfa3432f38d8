use verkle_algebra::{bandersnatch::Fr, banderwagon::Banderwagon, prelude::*};

/// Return `Σ a_i·b_i` over the common prefix of `a` and `b`.
pub fn inner_product(a: &[Fr], b: &[Fr]) -> Fr {
    a.iter()
        .zip(b.iter())
        .fold(Fr::zero(), |acc, (x, y)| acc.add(&x.mul(y)))
}

/// Return `l_i + x·r_i`.
pub fn fold_scalars(l: &[Fr], r: &[Fr], x: &Fr) -> Vec<Fr> {
    l.iter().zip(r.iter()).map(|(a, b)| a.add(&b.mul(x))).collect()
}

/// Return `l_i + x·r_i`.
pub fn fold_points(l: &[Banderwagon], r: &[Banderwagon], x: &Fr) -> Vec<Banderwagon> {
    l.iter().zip(r.iter()).map(|(a, b)| a.add(&b.mul(x))).collect()
}
