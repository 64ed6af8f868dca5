use log::debug;

use crate::{
    error::{check_len, Result},
    network::network::Network,
};

/// One online pass: `forward` then `train_step` for every sample, in order.
///
/// Returns the mean over the pass of each step's output-error MSE. Stops at
/// the first failing sample; earlier steps stay applied.
pub fn train_network(network: &mut Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
    check_len("targets", inputs.len(), targets.len())?;
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let mut total_loss = 0.0;
    for (step, (input, target)) in inputs.iter().zip(targets).enumerate() {
        network.forward(input)?;
        network.train_step(target)?;

        let loss = network.snapshot().mean_squared_error();
        debug!("sample {step}: mse = {loss:.6}");
        total_loss += loss;
    }

    Ok(total_loss / inputs.len() as f64)
}
