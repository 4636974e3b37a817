/// Hyperparameters for a training run.
///
/// # Fields
/// - `iterations`     — full-batch gradient steps; no early stopping
/// - `learning_rates` — one per weight matrix, or a single rate for all of them
/// - `seed`           — fixes weight initialization; `None` draws from entropy
/// - `log_every`      — emit a debug progress line every N iterations (0 = never)
///
/// `new` and `default` share the same seed and logging defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub iterations: usize,
    pub learning_rates: Vec<f64>,
    pub seed: Option<u64>,
    pub log_every: usize,
}

const DEFAULT_LOG_EVERY: usize = 1_000;

impl TrainConfig {
    pub fn new(iterations: usize, learning_rates: Vec<f64>) -> Self {
        TrainConfig {
            iterations,
            learning_rates,
            seed: None,
            log_every: DEFAULT_LOG_EVERY,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 10_000,
            learning_rates: vec![1.0],
            seed: None,
            log_every: DEFAULT_LOG_EVERY,
        }
    }
}
