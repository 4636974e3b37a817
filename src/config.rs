use serde::{Serialize, Deserialize};

use crate::{
    error::Result,
    network::spec::NetworkSpec,
    train::train_config::TrainConfig,
};

/// Run configuration as read from a JSON file or the command line.
/// Every field is optional; unset fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Layer widths, input first, e.g. `[4, 6, 7]`.
    pub layer_sizes: Option<Vec<usize>>,
    pub learning_rates: Option<Vec<f64>>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    /// Debug progress interval in iterations.
    pub log_every: Option<usize>,
}

impl RunConfig {
    pub fn load_json(path: &str) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    // merge configs where the second overwrites the first
    pub fn merge(self, other: Self) -> Self {
        Self {
            layer_sizes: other.layer_sizes.or(self.layer_sizes),
            learning_rates: other.learning_rates.or(self.learning_rates),
            iterations: other.iterations.or(self.iterations),
            seed: other.seed.or(self.seed),
            log_every: other.log_every.or(self.log_every),
        }
    }

    /// Fills unset fields from the defaults and validates the architecture.
    pub fn resolve(self) -> Result<(NetworkSpec, TrainConfig)> {
        let spec = self.layer_sizes.map(NetworkSpec::new).unwrap_or_default();
        spec.validate()?;

        let defaults = TrainConfig::default();
        let config = TrainConfig {
            iterations: self.iterations.unwrap_or(defaults.iterations),
            learning_rates: self.learning_rates.unwrap_or(defaults.learning_rates),
            seed: self.seed.or(defaults.seed),
            log_every: self.log_every.unwrap_or(defaults.log_every),
        };
        Ok((spec, config))
    }
}
