use ndarray::Array1;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;

/// Draw one value per `(low, high)` pair, each uniform over its own closed
/// interval. Degenerate pairs with `low == high` are allowed and yield that
/// value; pairs with `low > high` must be rejected by the caller first
/// (`Domain::new` does) and are undefined here.
pub fn random_vector<R: Rng>(bounds: &[(f64, f64)], rng: &mut R) -> Array1<f64> {
    bounds
        .iter()
        .map(|&(low, high)| rng.sample(Uniform::new_inclusive(low, high)))
        .collect()
}

/// One labeled example drawn from a domain.
///
/// Patterns are transient: the training loop samples a fresh one per
/// iteration and nothing holds onto them across iterations.
#[derive(Debug, Clone)]
pub struct Pattern<L> {
    /// Raw feature vector, always inside the bounds of the region it was
    /// drawn from.
    pub vector: Array1<f64>,
    /// Label of that region.
    pub class_label: L,
    /// 0-based position of the label in the domain's enumeration order.
    pub class_number: usize,
    /// `class_number` rescaled into [0, 1] for use as a sigmoid target.
    pub class_norm: f64,
}
