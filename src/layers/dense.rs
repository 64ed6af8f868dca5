use crate::{activation::Sigmoid, math::Matrix};

/// Fully connected sigmoid layer.
///
/// `weights` and `gradients` are both `size × input_size`; row `r` holds the
/// incoming connections of neuron `r`.
#[derive(Debug, Clone)]
pub struct Layer {
    pub size: usize,
    pub input_size: usize,
    pub neurons: Vec<f64>,
    pub weights: Matrix,
    pub gradients: Matrix,
    activator: Sigmoid,
}

impl Layer {
    /// Zero activations, every weight set to `initial_weight`.
    pub fn new(size: usize, input_size: usize, initial_weight: f64) -> Layer {
        Layer {
            size,
            input_size,
            neurons: vec![0.0; size],
            weights: Matrix::filled(size, input_size, initial_weight),
            gradients: Matrix::zeros(size, input_size),
            activator: Sigmoid,
        }
    }

    /// Overwrites `neurons` with σ(W·input) and returns them.
    pub fn feed_from(&mut self, input: &[f64]) -> &[f64] {
        let z = self.weights.mat_vec(input);
        for (neuron, x) in self.neurons.iter_mut().zip(z) {
            *neuron = self.activator.function(x);
        }
        &self.neurons
    }

    /// Wᵀ·error against the current weights; call before `apply_gradients`.
    pub fn backpropagate_error(&self, error: &[f64]) -> Vec<f64> {
        self.weights.transpose_vec(error)
    }

    /// Refills `gradients` from scratch:
    /// `grad[r][c] = −error[r] · a[r](1 − a[r]) · input[c]`.
    pub fn compute_gradients(&mut self, error: &[f64], input: &[f64]) {
        let delta: Vec<f64> = error
            .iter()
            .zip(&self.neurons)
            .map(|(e, &a)| -e * self.activator.derivative_from_output(a))
            .collect();
        self.gradients.outer_into(&delta, input, |d, x| d * x);
    }

    /// Gradient descent step: W −= lr · grad.
    pub fn apply_gradients(&mut self, lr: f64) {
        self.weights.scaled_sub_assign(lr, &self.gradients);
    }

    /// Mean of a(1 − a) over the layer; near zero once the layer saturates.
    pub fn mean_derivative(&self) -> f64 {
        let total: f64 = self
            .neurons
            .iter()
            .map(|&a| self.activator.derivative_from_output(a))
            .sum();
        total / self.size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_layer_is_uniform() {
        let layer = Layer::new(3, 2, 0.25);
        assert_eq!(layer.neurons, vec![0.0; 3]);
        assert_eq!(layer.weights, Matrix::filled(3, 2, 0.25));
        assert_eq!(layer.gradients, Matrix::zeros(3, 2));
    }

    #[test]
    fn feed_from_applies_sigmoid_to_weighted_sums() {
        let mut layer = Layer::new(2, 2, 0.0);
        layer.weights = Matrix::from_data(vec![vec![1.0, -1.0], vec![0.0, 0.0]]);
        let out = layer.feed_from(&[2.0, 1.0]).to_vec();
        assert_abs_diff_eq!(out[0], Sigmoid.function(1.0), epsilon = 1e-15);
        assert_eq!(out[1], 0.5);
    }

    #[test]
    fn compute_gradients_matches_closed_form() {
        let mut layer = Layer::new(1, 2, 0.0);
        layer.feed_from(&[1.0, 0.0]);
        layer.compute_gradients(&[-0.5], &[1.0, 0.0]);
        // a = 0.5, so −e·a(1−a) = 0.5 · 0.25
        assert_abs_diff_eq!(layer.gradients.data[0][0], 0.125, epsilon = 1e-15);
        assert_eq!(layer.gradients.data[0][1], 0.0);
    }

    #[test]
    fn backpropagate_error_uses_columns() {
        let mut layer = Layer::new(2, 3, 0.0);
        layer.weights = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(layer.backpropagate_error(&[1.0, -1.0]), vec![-3.0, -3.0, -3.0]);
    }

    #[test]
    fn apply_gradients_descends() {
        let mut layer = Layer::new(1, 1, 0.5);
        layer.gradients = Matrix::from_data(vec![vec![0.2]]);
        layer.apply_gradients(0.5);
        assert_abs_diff_eq!(layer.weights.data[0][0], 0.4, epsilon = 1e-15);
    }
}
