use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Learning rate used by `Network::new` when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// Layer sizes and hyperparameters of a single-hidden-layer network.
///
/// Saved to / loaded from JSON so a run can be reproduced exactly; trained
/// weights are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    /// Value every weight starts at. Initialization is uniform, not random.
    pub initial_weight: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

impl Default for NetworkConfig {
    /// The 4-4-2 pixel classifier: four binary pixels in, two bits out.
    fn default() -> Self {
        NetworkConfig {
            input_size: 4,
            hidden_size: 4,
            output_size: 2,
            initial_weight: 0.5,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ] {
            if size == 0 {
                return Err(NetworkError::InvalidConfig(format!("{name} must be at least 1")));
            }
        }
        if !self.initial_weight.is_finite() {
            return Err(NetworkError::InvalidConfig(format!(
                "initial_weight must be finite, got {}",
                self.initial_weight
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(NetworkError::InvalidConfig(format!(
                "learning_rate must be finite and non-negative, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Loads and validates a config written by `save_json`.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
