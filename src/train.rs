//! Online training loop over domain-sampled patterns.

use ndarray_rand::rand::Rng;

use crate::domain::{denormalize_class_index, Domain};
use crate::network::Network;
use crate::optimizer::GradientDescent;
use crate::{Error, Result};

/// Iterations between progress reports.
const REPORT_WINDOW: usize = 100;

/// Builder for a training run: hidden/output layer sizes plus the two knobs
/// of online gradient descent.
pub struct Trainer {
    layer_sizes: Vec<usize>,
    learning_rate: f64,
    iterations: usize,
}

impl Trainer {
    /// Start from `layer_sizes` (hidden layers first, single output node
    /// last) with a learning rate of 0.3 and 1000 iterations.
    pub fn new(layer_sizes: &[usize]) -> Self {
        Self {
            layer_sizes: layer_sizes.to_vec(),
            learning_rate: 0.3,
            iterations: 1000,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run the online loop: sample one pattern per iteration and push it
    /// through forward, backward, gradient accumulation and a weight step.
    ///
    /// Every pattern is drawn fresh from `domain`, so there is no epoch or
    /// dataset; progress is reported through `tracing` as the number of
    /// correctly classified samples per window of 100 iterations.
    pub fn train<L, R>(&self, domain: &Domain<L>, rng: &mut R) -> Result<Network>
    where
        L: Clone,
        R: Rng,
    {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "learning rate {} is not positive",
                self.learning_rate
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidParameter(
                "iteration count must be positive".to_string(),
            ));
        }

        let mut network = Network::random(domain.dimensions(), &self.layer_sizes, rng)?;
        let optimizer = GradientDescent::new(self.learning_rate);

        let mut correct = 0;
        for iteration in 0..self.iterations {
            let pattern = domain.sample(rng);

            let output = network.forward(pattern.vector.view());
            if denormalize_class_index(output, domain.class_count()) == pattern.class_number {
                correct += 1;
            }

            network.backward(pattern.class_norm);
            network.accumulate_gradients(pattern.vector.view());
            optimizer.step(&mut network);

            if (iteration + 1) % REPORT_WINDOW == 0 {
                tracing::debug!(
                    "iteration={}, correct={}/{}",
                    iteration + 1,
                    correct,
                    REPORT_WINDOW
                );
                correct = 0;
            }
        }
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Error;

    use ndarray_rand::rand::{rngs::StdRng, SeedableRng};

    fn two_region_domain() -> Domain<&'static str> {
        Domain::new(vec![
            ("A", vec![(0.0, 0.4999999), (0.0, 0.4999999)]),
            ("B", vec![(0.5, 1.0), (0.5, 1.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_nonpositive_learning_rates() {
        let domain = two_region_domain();
        for bad in [0.0, -0.3, f64::NAN] {
            let mut rng = StdRng::seed_from_u64(0);
            let result = Trainer::new(&[4, 1]).learning_rate(bad).train(&domain, &mut rng);
            assert!(matches!(result, Err(Error::InvalidParameter(_))), "accepted {bad}");
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        let domain = two_region_domain();
        let mut rng = StdRng::seed_from_u64(0);
        let result = Trainer::new(&[4, 1]).iterations(0).train(&domain, &mut rng);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn surfaces_topology_errors() {
        let domain = two_region_domain();
        let mut rng = StdRng::seed_from_u64(0);
        let result = Trainer::new(&[4, 2]).train(&domain, &mut rng);
        assert!(matches!(result, Err(Error::InvalidTopology(_))));
    }

    #[test]
    fn builds_a_network_of_the_requested_shape() {
        let domain = two_region_domain();
        let mut rng = StdRng::seed_from_u64(7);
        let network = Trainer::new(&[4, 1]).iterations(50).train(&domain, &mut rng).unwrap();

        assert_eq!(2, network.n_inputs());
        let sizes: Vec<usize> = network.layers().iter().map(|layer| layer.len()).collect();
        assert_eq!(vec![4, 1], sizes);
    }
}
