use ndarray::{s, Array1, ArrayView1};
use ndarray_rand::rand::Rng;

use crate::activation::sigmoid;
use crate::data::random_vector;
use crate::domain::{denormalize_class_index, Domain};
use crate::{Error, Result};

/// A single computational unit: a weight vector plus the scratch state the
/// forward, backward, and accumulation passes write into.
///
/// The scratch fields (`activation`, `output`, `delta`, `gradient`) are
/// recomputed on every pass and never carry meaning across iterations.
#[derive(Debug, Clone)]
pub struct Node {
    /// `n_inputs + 1` weights; the final entry is the bias, multiplying a
    /// fixed input of 1.
    pub weights: Array1<f64>,
    /// Pre-transfer weighted sum from the last forward pass.
    pub activation: f64,
    /// Post-transfer value from the last forward pass.
    pub output: f64,
    /// Backpropagated error signal from the last backward pass.
    pub delta: f64,
    /// Per-weight gradient estimate from the last accumulation pass.
    pub gradient: Array1<f64>,
}

impl Node {
    /// Node consuming `n_inputs` values, every weight (bias included) drawn
    /// uniformly from (-0.5, 0.5).
    pub fn random<R: Rng>(n_inputs: usize, rng: &mut R) -> Self {
        Self::with_weights(random_vector(&vec![(-0.5, 0.5); n_inputs + 1], rng))
    }

    /// Node over explicit weights (bias last), scratch state zeroed.
    pub fn with_weights(weights: Array1<f64>) -> Self {
        let gradient = Array1::zeros(weights.len());
        Self {
            weights,
            activation: 0.0,
            output: 0.0,
            delta: 0.0,
            gradient,
        }
    }

    /// Number of inputs this node consumes.
    pub fn n_inputs(&self) -> usize {
        self.weights.len() - 1
    }

    /// Weighted sum of `inputs` plus the bias weight.
    pub fn activate(&self, inputs: ArrayView1<f64>) -> f64 {
        let n = self.n_inputs();
        self.weights.slice(s![..n]).dot(&inputs) + self.weights[n]
    }
}

/// An ordered group of nodes sharing the same input source.
#[derive(Debug, Clone)]
pub struct Layer {
    pub nodes: Vec<Node>,
}

impl Layer {
    /// Layer of `size` randomly initialized nodes, each consuming
    /// `n_inputs` values.
    pub fn random<R: Rng>(size: usize, n_inputs: usize, rng: &mut R) -> Self {
        Self {
            nodes: (0..size).map(|_| Node::random(n_inputs, rng)).collect(),
        }
    }

    /// Layer over explicit per-node weight vectors, in node order.
    pub fn from_weights(weights: Vec<Array1<f64>>) -> Self {
        Self {
            nodes: weights.into_iter().map(Node::with_weights).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `output` of every node, in node order. This is the input vector the
    /// next layer consumes, which is why downstream weight vectors index
    /// upstream nodes by position.
    pub fn outputs(&self) -> Array1<f64> {
        self.nodes.iter().map(|node| node.output).collect()
    }

    fn forward(&mut self, inputs: ArrayView1<f64>) {
        for node in &mut self.nodes {
            node.activation = node.activate(inputs);
            node.output = sigmoid(node.activation);
        }
    }
}

/// Layered feedforward network with a single output node.
///
/// Layer 0 consumes the raw input vector; every later layer consumes the
/// previous layer's outputs. The shape is validated once at construction, so
/// the passes themselves never re-check it.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) layers: Vec<Layer>,
    n_inputs: usize,
}

impl Network {
    /// Fresh network with small random weights.
    ///
    /// `layer_sizes` lists every layer's node count in order, e.g. `[4, 1]`
    /// for one hidden layer of four nodes feeding the output node.
    pub fn random<R: Rng>(n_inputs: usize, layer_sizes: &[usize], rng: &mut R) -> Result<Self> {
        validate_shape(n_inputs, layer_sizes)?;

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut inputs = n_inputs;
        for &size in layer_sizes {
            layers.push(Layer::random(size, inputs, rng));
            inputs = size;
        }
        Ok(Self { layers, n_inputs })
    }

    /// Network over caller-supplied layers.
    ///
    /// Checks the same shape rules as [`Network::random`] plus the weight
    /// invariant — every node carries exactly `inputs + 1` weights for its
    /// layer's input count — so a malformed node is rejected here, never
    /// discovered mid-forward-pass.
    pub fn from_layers(n_inputs: usize, layers: Vec<Layer>) -> Result<Self> {
        let sizes = layers.iter().map(Layer::len).collect::<Vec<_>>();
        validate_shape(n_inputs, &sizes)?;

        let mut inputs = n_inputs;
        for (k, layer) in layers.iter().enumerate() {
            for (j, node) in layer.nodes.iter().enumerate() {
                if node.weights.len() != inputs + 1 {
                    return Err(Error::InvalidTopology(format!(
                        "layer {} node {} has {} weights, expected {}",
                        k,
                        j,
                        node.weights.len(),
                        inputs + 1
                    )));
                }
            }
            inputs = layer.len();
        }
        Ok(Self { layers, n_inputs })
    }

    /// Raw input dimension layer 0 consumes.
    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    /// Layers in forward order; the last one is the output layer.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Push `input` through every layer and return the output node's
    /// transferred value, a number in (0, 1).
    ///
    /// Side effect: rewrites `activation` and `output` on every node.
    pub fn forward(&mut self, input: ArrayView1<f64>) -> f64 {
        assert_eq!(input.len(), self.n_inputs, "input size mismatch");

        let mut inputs = input.to_owned();
        for layer in &mut self.layers {
            layer.forward(inputs.view());
            inputs = layer.outputs();
        }
        inputs[0]
    }

    /// Run a forward pass and turn the raw output into a class decision:
    /// the nearest class index on the [0, 1] target scale, looked up in the
    /// domain's enumeration order.
    pub fn predict<L: Clone>(&mut self, input: ArrayView1<f64>, domain: &Domain<L>) -> (f64, L) {
        let output = self.forward(input);
        let class = denormalize_class_index(output, domain.class_count());
        (output, domain.labels()[class].clone())
    }
}

fn validate_shape(n_inputs: usize, layer_sizes: &[usize]) -> Result<()> {
    if n_inputs == 0 {
        return Err(Error::InvalidTopology(
            "zero input dimensions".to_string(),
        ));
    }
    if layer_sizes.is_empty() {
        return Err(Error::InvalidTopology("no layers".to_string()));
    }
    for (k, &size) in layer_sizes.iter().enumerate() {
        if size == 0 {
            return Err(Error::InvalidTopology(format!("layer {} has no nodes", k)));
        }
    }
    if let Some(&last) = layer_sizes.last() {
        if last != 1 {
            return Err(Error::InvalidTopology(format!(
                "output layer has {} nodes, expected a single one",
                last
            )));
        }
    }
    Ok(())
}
