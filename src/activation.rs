/// Logistic sigmoid transfer function, `1 / (1 + e^-x)`.
///
/// Split into two branches so that `exp` is only ever taken of a
/// non-positive argument; activations of any magnitude saturate to the
/// (0, 1) bounds instead of overflowing to a non-finite value.
pub fn sigmoid(activation: f64) -> f64 {
    if activation >= 0.0 {
        1.0 / (1.0 + (-activation).exp())
    } else {
        let e = activation.exp();
        e / (1.0 + e)
    }
}

/// Derivative of the sigmoid, taken at an already-transferred value:
/// `σ'(x) = σ(x) · (1 - σ(x))`, so the caller passes `output`, not the
/// activation it came from.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn sigmoid_keeps_small_values_smallish() {
        assert_abs_diff_eq!(0.73, sigmoid(1.0), epsilon = 0.01);
        assert_abs_diff_eq!(0.5, sigmoid(0.0), epsilon = 0.001);
    }

    #[test]
    fn sigmoid_squashes_large_values() {
        assert_abs_diff_eq!(1.0, sigmoid(10.0), epsilon = 0.0001);
        assert_abs_diff_eq!(0.0, sigmoid(-10.0), epsilon = 0.0001);
    }

    #[test]
    fn sigmoid_saturates_without_going_non_finite() {
        for activation in [1000.0, -1000.0, f64::MAX, f64::MIN] {
            let output = sigmoid(activation);
            assert!(output.is_finite());
            assert!((0.0..=1.0).contains(&output));
        }
        assert_relative_eq!(1.0, sigmoid(1000.0));
        assert_relative_eq!(0.0, sigmoid(-1000.0));
    }

    #[test]
    fn sigmoid_derivative_from_output() {
        assert_relative_eq!(0.0, sigmoid_derivative(1.0));
        assert_relative_eq!(0.0, sigmoid_derivative(0.0));
        assert_relative_eq!(0.25, sigmoid_derivative(0.5));
    }

    #[test]
    fn sigmoid_derivative_matches_numeric_slope() {
        for activation in [-2.0, -0.5, 0.0, 0.5, 2.0] {
            let h = 1e-6;
            let slope = (sigmoid(activation + h) - sigmoid(activation - h)) / (2.0 * h);
            assert_abs_diff_eq!(slope, sigmoid_derivative(sigmoid(activation)), epsilon = 1e-8);
        }
    }
}
