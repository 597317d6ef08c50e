//! Online error backpropagation for layered feedforward networks.
//!
//! Training data is synthesized from a [`Domain`]: named regions of feature
//! space, each an axis-aligned bound box, sampled one labeled pattern at a
//! time. Every training iteration runs the four-phase sequence on the same
//! mutable [`Network`]: forward pass, backward error propagation, gradient
//! accumulation, weight update.

pub mod activation;
mod backprop;
pub mod data;
pub mod domain;
pub mod metrics;
pub mod network;
pub mod optimizer;
pub mod train;

pub use data::Pattern;
pub use domain::Domain;
pub use network::{Layer, Network, Node};
pub use optimizer::GradientDescent;
pub use train::Trainer;

#[macro_export]
macro_rules! assert_rel_eq_arr1 {
    ($actual:expr, $expected:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w);
            });
    };
}

/// Errors surfaced by construction-time validation.
///
/// All of them are rejected before any training pass runs; the passes
/// themselves are pure arithmetic with no failure path.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A domain whose regions cannot produce comparable patterns.
    #[error("malformed domain: {0}")]
    MalformedDomain(String),

    /// A network shape the forward pass could not consume.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A training parameter outside its allowed range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
