use log::{debug, trace, warn};

use crate::error::{check_len, NetworkError, Result};
use crate::layers::Layer;
use crate::loss::MseLoss;
use crate::math::Matrix;
use crate::network::config::{NetworkConfig, DEFAULT_LEARNING_RATE};
use crate::network::snapshot::Snapshot;
use crate::optim::Sgd;

/// Below this mean a(1 − a) on the output layer, learning has effectively stalled.
const SATURATION_WARN_THRESHOLD: f64 = 1e-6;

/// Input → hidden → output sigmoid perceptron trained one sample at a time.
///
/// Layer sizes are fixed at construction. The network starts *freshly
/// constructed* (activations zero) and becomes *propagated* after the first
/// successful `forward`; only then may `train_step` run.
#[derive(Debug, Clone)]
pub struct Network {
    input: Vec<f64>,
    hidden: Layer,
    output: Layer,
    output_error: Vec<f64>,
    optimizer: Sgd,
    propagated: bool,
}

impl Network {
    /// Builds an `n_in`-`n_hidden`-`n_out` network with every weight set to
    /// `initial_weight` and the default learning rate.
    pub fn new(n_in: usize, n_hidden: usize, n_out: usize, initial_weight: f64) -> Result<Network> {
        Network::from_config(&NetworkConfig {
            input_size: n_in,
            hidden_size: n_hidden,
            output_size: n_out,
            initial_weight,
            learning_rate: DEFAULT_LEARNING_RATE,
        })
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Network> {
        config.validate()?;
        debug!(
            "building {}-{}-{} network, initial weight {}, learning rate {}",
            config.input_size,
            config.hidden_size,
            config.output_size,
            config.initial_weight,
            config.learning_rate
        );
        Ok(Network {
            input: vec![0.0; config.input_size],
            hidden: Layer::new(config.hidden_size, config.input_size, config.initial_weight),
            output: Layer::new(config.output_size, config.hidden_size, config.initial_weight),
            output_error: vec![0.0; config.output_size],
            optimizer: Sgd::new(config.learning_rate),
            propagated: false,
        })
    }

    /// Propagates `sample` through both layers and returns the output activations.
    ///
    /// Values are used as given; upstream binarization is expected to supply
    /// 0/1 features. A wrong-length sample leaves the network untouched.
    pub fn forward(&mut self, sample: &[f64]) -> Result<&[f64]> {
        check_len("sample", self.input.len(), sample.len())?;

        self.input.copy_from_slice(sample);
        self.hidden.feed_from(&self.input);
        self.output.feed_from(&self.hidden.neurons);
        self.propagated = true;

        trace!("forward {:?} -> {:?}", self.input, self.output.neurons);
        Ok(self.output.neurons.as_slice())
    }

    /// Computes the output error against `target`, recomputes both gradient
    /// matrices and applies one gradient-descent update.
    ///
    /// The hidden layer's backpropagated error is taken from the output
    /// weights before either layer is updated.
    pub fn train_step(&mut self, target: &[f64]) -> Result<()> {
        if !self.propagated {
            return Err(NetworkError::NotPropagated);
        }
        check_len("target", self.output.size, target.len())?;

        for ((e, t), y) in self.output_error.iter_mut().zip(target).zip(&self.output.neurons) {
            *e = t - y;
        }

        self.output.compute_gradients(&self.output_error, &self.hidden.neurons);
        let hidden_error = self.output.backpropagate_error(&self.output_error);
        self.hidden.compute_gradients(&hidden_error, &self.input);

        self.optimizer.step(&mut self.output);
        self.optimizer.step(&mut self.hidden);

        let mean_derivative = self.output.mean_derivative();
        if mean_derivative < SATURATION_WARN_THRESHOLD {
            warn!("output layer saturated (mean a(1-a) = {mean_derivative:e}); learning has stalled");
        }
        debug!("train step: mse = {:.6}", MseLoss::loss(&self.output_error));
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            input: &self.input,
            output_activation: &self.output.neurons,
            output_error: &self.output_error,
        }
    }

    pub fn is_propagated(&self) -> bool {
        self.propagated
    }

    pub fn input_size(&self) -> usize {
        self.input.len()
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden.size
    }

    pub fn output_size(&self) -> usize {
        self.output.size
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate()
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn hidden_activation(&self) -> &[f64] {
        &self.hidden.neurons
    }

    pub fn output_activation(&self) -> &[f64] {
        &self.output.neurons
    }

    pub fn output_error(&self) -> &[f64] {
        &self.output_error
    }

    /// `n_hidden × n_in`
    pub fn weights_hidden(&self) -> &Matrix {
        &self.hidden.weights
    }

    /// `n_out × n_hidden`
    pub fn weights_output(&self) -> &Matrix {
        &self.output.weights
    }

    pub fn grad_hidden(&self) -> &Matrix {
        &self.hidden.gradients
    }

    pub fn grad_output(&self) -> &Matrix {
        &self.output.gradients
    }
}
