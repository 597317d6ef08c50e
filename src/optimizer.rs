//! Weight update from accumulated gradients.

use ndarray::Zip;

use crate::network::Network;

/// Fixed-step gradient descent over every weight in a network.
///
/// Gradients are stored with the sign of the error signal (target minus
/// output), so stepping means adding `learning_rate * gradient` to each
/// weight, bias slots included.
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    /// Apply one step to every node, consuming the gradients written by the
    /// last [`Network::accumulate_gradients`] call.
    pub fn step(&self, network: &mut Network) {
        for layer in &mut network.layers {
            for node in &mut layer.nodes {
                Zip::from(&mut node.weights)
                    .and(&node.gradient)
                    .for_each(|w, g| *w += self.learning_rate * g);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::assert_rel_eq_arr1;
    use crate::network::{Layer, Network};

    use approx::assert_relative_eq;
    use ndarray::arr1;

    fn single_node_network(weights: [f64; 3]) -> Network {
        Network::from_layers(2, vec![Layer::from_weights(vec![arr1(&weights)])]).unwrap()
    }

    #[test]
    fn step_adds_scaled_gradients() {
        let mut network = single_node_network([0.2, 0.2, 0.2]);
        network.layers[0].nodes[0].gradient = arr1(&[0.1, -0.5, 100.0]);

        GradientDescent::new(1.0).step(&mut network);

        let node = &network.layers()[0].nodes[0];
        assert_rel_eq_arr1!(node.weights, arr1(&[0.2 + 0.1, 0.2 - 0.5, 0.2 + 100.0]));
    }

    #[test]
    fn learning_rate_scales_the_step() {
        let mut network = single_node_network([0.0, 0.0, 0.0]);
        network.layers[0].nodes[0].gradient = arr1(&[1.0, 1.0, 1.0]);

        let optimizer = GradientDescent::new(0.25);
        optimizer.step(&mut network);
        optimizer.step(&mut network);

        assert_rel_eq_arr1!(
            network.layers()[0].nodes[0].weights,
            arr1(&[0.5, 0.5, 0.5])
        );
    }

    #[test]
    fn full_cycle_moves_the_output_toward_the_target() {
        let mut network = Network::from_layers(
            2,
            vec![
                Layer::from_weights(vec![arr1(&[0.2, 0.2, 0.2]), arr1(&[0.3, 0.3, 0.3])]),
                Layer::from_weights(vec![arr1(&[0.4, 0.4, 0.4])]),
            ],
        )
        .unwrap();
        let input = arr1(&[0.1, 0.1]);

        let before = network.forward(input.view());
        network.backward(1.0);
        network.accumulate_gradients(input.view());
        GradientDescent::new(0.3).step(&mut network);
        let after = network.forward(input.view());

        assert!(after > before, "step left the output at {after} (was {before})");
    }
}
