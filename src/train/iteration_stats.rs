/// Progress report handed to the per-iteration hook of `Trainer::train_with`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Mean squared error of the forward pass that fed this iteration's update.
    pub error: f64,
}
