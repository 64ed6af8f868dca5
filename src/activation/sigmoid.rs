/// Lower bound of every activation; the upper bound is `1.0 - SATURATION_EPS`.
pub const SATURATION_EPS: f64 = f64::EPSILON;

/// Logistic activation used by every neuron in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^-x), clamped into the open interval (0, 1).
    ///
    /// Large |x| would otherwise round to exactly 0.0 or 1.0, which zeroes the
    /// y(1 − y) factor for good.
    pub fn function(&self, x: f64) -> f64 {
        let y = 1.0 / (1.0 + (-x).exp());
        y.clamp(SATURATION_EPS, 1.0 - SATURATION_EPS)
    }

    /// σ'(x) expressed through the activation itself: y(1 − y).
    pub fn derivative_from_output(&self, y: f64) -> f64 {
        y * (1.0 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    #[test]
    fn zero_maps_to_one_half_exactly() {
        assert_eq!(Sigmoid.function(0.0), 0.5);
    }

    #[test]
    fn known_values() {
        assert_abs_diff_eq!(Sigmoid.function(0.5), 0.622_459_331_201_854_6, epsilon = 1e-12);
        assert_abs_diff_eq!(Sigmoid.function(-2.0), 0.119_202_922_022_117_57, epsilon = 1e-12);
    }

    #[test]
    fn stays_strictly_inside_unit_interval() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let x: f64 = rng.gen_range(-1_000.0..1_000.0);
            let y = Sigmoid.function(x);
            assert!(y > 0.0 && y < 1.0, "σ({x}) = {y}");
        }
        for x in [f64::MAX, f64::MIN, f64::INFINITY, f64::NEG_INFINITY] {
            let y = Sigmoid.function(x);
            assert!(y > 0.0 && y < 1.0, "σ({x}) = {y}");
        }
    }

    #[test]
    fn saturated_outputs_keep_a_nonzero_derivative() {
        let hi = Sigmoid.function(800.0);
        let lo = Sigmoid.function(-800.0);
        assert!(Sigmoid.derivative_from_output(hi) > 0.0);
        assert!(Sigmoid.derivative_from_output(lo) > 0.0);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_eq!(Sigmoid.derivative_from_output(0.5), 0.25);
        assert!(Sigmoid.derivative_from_output(0.9) < 0.25);
    }
}
