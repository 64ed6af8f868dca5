pub struct MseLoss;

impl MseLoss {
    /// Mean of the squared output errors. Reporting only: the engine's
    /// gradients are computed directly from `target − output`.
    pub fn loss(output_error: &[f64]) -> f64 {
        if output_error.is_empty() {
            return 0.0;
        }
        output_error.iter().map(|e| e * e).sum::<f64>() / output_error.len() as f64
    }
}
