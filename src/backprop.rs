//! Backward error propagation and per-weight gradient accumulation.
//!
//! Both passes reuse the `output` values the forward pass stored on each
//! node, so they only make sense immediately after [`Network::forward`] on
//! the same pattern.

use ndarray::ArrayView1;

use crate::activation::sigmoid_derivative;
use crate::network::Network;

impl Network {
    /// Write the error signal of every node: output layer first, from the
    /// distance to `target_norm`; then each hidden layer in reverse order,
    /// from the weighted sum of the signals one layer downstream.
    ///
    /// Node `j`'s share of a downstream node `m`'s signal is
    /// `m.weights[j] * m.delta` — nodes consume the previous layer's outputs
    /// in node order, so position `j` of a downstream weight vector belongs
    /// to upstream node `j`, and `j` stays below the bias slot because the
    /// upstream layer has `m.weights.len() - 1` nodes.
    pub fn backward(&mut self, target_norm: f64) {
        for k in (0..self.layers.len()).rev() {
            let (current, downstream) = self.layers.split_at_mut(k + 1);
            let layer = &mut current[k];
            match downstream.first() {
                None => {
                    for node in &mut layer.nodes {
                        node.delta =
                            (target_norm - node.output) * sigmoid_derivative(node.output);
                    }
                }
                Some(next) => {
                    for (j, node) in layer.nodes.iter_mut().enumerate() {
                        let backpropagated: f64 =
                            next.nodes.iter().map(|m| m.weights[j] * m.delta).sum();
                        node.delta = backpropagated * sigmoid_derivative(node.output);
                    }
                }
            }
        }
    }

    /// Overwrite every node's gradient with `delta * input` per weight slot;
    /// the bias slot sees a fixed input of 1. Inputs are the values the
    /// forward pass consumed — the raw pattern vector for layer 0, the
    /// previous layer's stored outputs after that — so this must run after
    /// both `forward` and `backward` on the same pattern.
    pub fn accumulate_gradients(&mut self, input: ArrayView1<f64>) {
        assert_eq!(input.len(), self.n_inputs(), "input size mismatch");

        let mut inputs = input.to_owned();
        for layer in &mut self.layers {
            for node in &mut layer.nodes {
                for (i, &input_i) in inputs.iter().enumerate() {
                    node.gradient[i] = node.delta * input_i;
                }
                node.gradient[inputs.len()] = node.delta;
            }
            inputs = layer.outputs();
        }
    }
}
