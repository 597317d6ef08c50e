use ndarray_rand::rand::Rng;

use crate::data::{random_vector, Pattern};
use crate::{Error, Result};

/// Rescale a class index into [0, 1]: 0 for a single-class domain, else
/// `index / (class_count - 1)`, so the first class maps to 0.0 and the last
/// to 1.0.
pub fn normalize_class_index(index: usize, class_count: usize) -> f64 {
    if class_count <= 1 {
        0.0
    } else {
        index as f64 / (class_count - 1) as f64
    }
}

/// Inverse of [`normalize_class_index`]: round `value * (class_count - 1)`
/// to the nearest index, ties away from zero, clamped into
/// `[0, class_count - 1]`. With two classes everything below 0.5 maps to 0
/// and everything at or above it to 1.
pub fn denormalize_class_index(value: f64, class_count: usize) -> usize {
    if class_count <= 1 {
        return 0;
    }
    let last = (class_count - 1) as f64;
    (value * last).round().clamp(0.0, last) as usize
}

/// Named regions of feature space, one axis-aligned bound box per class.
///
/// Classes keep the order they were constructed with; a pattern's
/// `class_number` and the label lookup on predictions both index into that
/// order, so it is part of the domain's contract rather than an accident of
/// map iteration.
#[derive(Debug, Clone)]
pub struct Domain<L> {
    labels: Vec<L>,
    regions: Vec<Vec<(f64, f64)>>,
}

impl<L> Domain<L> {
    /// Build a domain from `(label, bounds)` pairs, one `(low, high)` pair
    /// per feature dimension. Rejects anything the pattern generator could
    /// not honor: an empty class list, empty bounds, a `low > high` or
    /// non-finite pair, dimension counts that differ across classes, and
    /// duplicate labels.
    pub fn new(classes: Vec<(L, Vec<(f64, f64)>)>) -> Result<Self>
    where
        L: PartialEq,
    {
        if classes.is_empty() {
            return Err(Error::MalformedDomain("no classes".to_string()));
        }
        let dimensions = classes[0].1.len();
        if dimensions == 0 {
            return Err(Error::MalformedDomain(
                "class 0 has no dimensions".to_string(),
            ));
        }

        let mut labels = Vec::with_capacity(classes.len());
        let mut regions = Vec::with_capacity(classes.len());
        for (class, (label, bounds)) in classes.into_iter().enumerate() {
            if labels.contains(&label) {
                return Err(Error::MalformedDomain(format!(
                    "class {} repeats an earlier label",
                    class
                )));
            }
            if bounds.len() != dimensions {
                return Err(Error::MalformedDomain(format!(
                    "class {} has {} dimensions, expected {}",
                    class,
                    bounds.len(),
                    dimensions
                )));
            }
            for (dimension, &(low, high)) in bounds.iter().enumerate() {
                if !low.is_finite() || !high.is_finite() {
                    return Err(Error::MalformedDomain(format!(
                        "class {} dimension {} has a non-finite bound",
                        class, dimension
                    )));
                }
                if low > high {
                    return Err(Error::MalformedDomain(format!(
                        "class {} dimension {} has low {} > high {}",
                        class, dimension, low, high
                    )));
                }
            }
            labels.push(label);
            regions.push(bounds);
        }

        Ok(Self { labels, regions })
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of feature dimensions, identical for every class.
    pub fn dimensions(&self) -> usize {
        self.regions[0].len()
    }

    /// Class labels in enumeration order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Bound pairs of the given class.
    pub fn bounds(&self, class: usize) -> &[(f64, f64)] {
        &self.regions[class]
    }

    /// Draw one labeled pattern: pick a class uniformly at random, then draw
    /// a vector inside its bounds. The pattern's `class_norm` is the sigmoid
    /// target the backward pass trains toward.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Pattern<L>
    where
        L: Clone,
    {
        let class_number = rng.gen_range(0..self.labels.len());
        Pattern {
            vector: random_vector(&self.regions[class_number], rng),
            class_label: self.labels[class_number].clone(),
            class_number,
            class_norm: normalize_class_index(class_number, self.labels.len()),
        }
    }
}
