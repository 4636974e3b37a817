use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    data::dataset::Dataset,
    error::{NetError, Result},
    loss::mse::MseLoss,
    math::matrix::Matrix,
    network::{network::{ForwardPass, Network}, spec::NetworkSpec},
    optim::sgd::Sgd,
    train::{iteration_stats::IterationStats, train_config::TrainConfig},
};

/// Owns a network and the fixed dataset it is trained on.
///
/// Every iteration is one full-batch forward pass followed by one
/// backpropagation step over all samples.
pub struct Trainer {
    network: Network,
    dataset: Dataset,
    optimizer: Sgd,
    config: TrainConfig,
}

impl Trainer {
    /// Builds a fresh network for `spec` with weights drawn from `config.seed`
    /// (or entropy when unset).
    pub fn initialize(spec: &NetworkSpec, dataset: Dataset, config: TrainConfig) -> Result<Trainer> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let network = Network::initialize(spec, &mut rng)?;
        Trainer::with_network(network, dataset, config)
    }

    /// Trains an existing network; its input and output widths must match the dataset.
    pub fn with_network(network: Network, dataset: Dataset, config: TrainConfig) -> Result<Trainer> {
        let spec = network.spec();
        if spec.input_size() != dataset.input_size() || spec.output_size() != dataset.target_size() {
            return Err(NetError::InvalidConfig(format!(
                "network {:?} does not fit samples of {} inputs and {} targets",
                spec.layer_sizes,
                dataset.input_size(),
                dataset.target_size()
            )));
        }
        let optimizer = Sgd::for_layers(&config.learning_rates, spec.depth())?;
        Ok(Trainer { network, dataset, optimizer, config })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Forward pass over the whole training set with the current weights.
    pub fn forward(&self) -> Result<ForwardPass> {
        self.network.forward(self.dataset.inputs())
    }

    /// Network output for an arbitrary batch of inputs.
    pub fn predict(&self, inputs: &Matrix) -> Result<Matrix> {
        Ok(self.network.forward(inputs)?.into_output())
    }

    /// Mean squared error of the current weights over the training set.
    pub fn mean_squared_error(&self) -> Result<f64> {
        MseLoss::loss(self.dataset.targets(), self.forward()?.output())
    }

    /// One forward + backward iteration. Returns the error of the forward
    /// pass, measured before the weights were updated.
    pub fn step(&mut self) -> Result<f64> {
        let pass = self.forward()?;
        let error = MseLoss::loss(self.dataset.targets(), pass.output())?;
        self.network.backward_and_update(&pass, self.dataset.targets(), &self.optimizer)?;
        Ok(error)
    }

    /// Runs exactly `iterations` steps and returns the final training error.
    pub fn train(&mut self, iterations: usize) -> Result<f64> {
        self.train_with(iterations, |_| Ok(()))
    }

    /// Like `train`, invoking `hook` once after every iteration.
    /// A hook error aborts the run.
    pub fn train_with<F>(&mut self, iterations: usize, mut hook: F) -> Result<f64>
    where
        F: FnMut(&IterationStats) -> Result<()>,
    {
        info!(
            "training {:?} on {} samples for {} iterations, learning rates {:?}",
            self.network.spec().layer_sizes,
            self.dataset.len(),
            iterations,
            self.optimizer.learning_rates
        );

        for iteration in 1..=iterations {
            let error = self.step()?;

            if self.config.log_every > 0 && (iteration % self.config.log_every == 0 || iteration == iterations) {
                debug!("iteration {iteration}/{iterations}: error = {error:.6}");
            }

            hook(&IterationStats {
                iteration,
                total_iterations: iterations,
                error,
            })?;
        }

        let final_error = self.mean_squared_error()?;
        info!("training finished: error = {final_error:.6}");
        Ok(final_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seven_segment;

    fn trainer(sizes: Vec<usize>, rates: Vec<f64>, seed: u64) -> Trainer {
        let config = TrainConfig::new(0, rates).with_seed(seed);
        Trainer::initialize(&NetworkSpec::new(sizes), seven_segment::digits().unwrap(), config).unwrap()
    }

    #[test]
    fn same_seed_gives_identical_weights() {
        let a = trainer(vec![4, 6, 7], vec![1.0], 42);
        let b = trainer(vec![4, 6, 7], vec![1.0], 42);
        assert_eq!(a.network(), b.network());
        let c = trainer(vec![4, 6, 7], vec![1.0], 43);
        assert_ne!(a.network(), c.network());
    }

    #[test]
    fn hook_runs_once_per_iteration() {
        let mut t = trainer(vec![4, 6, 7], vec![0.5], 1);
        let mut seen = Vec::new();
        t.train_with(5, |s| {
            seen.push((s.iteration, s.total_iterations));
            Ok(())
        }).unwrap();
        assert_eq!(seen, vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5)]);
    }

    #[test]
    fn hook_error_stops_training() {
        let mut t = trainer(vec![4, 6, 7], vec![0.5], 1);
        let mut calls = 0;
        let res = t.train_with(10, |s| {
            calls += 1;
            if s.iteration == 3 {
                return Err(NetError::InvalidConfig("stop".into()));
            }
            Ok(())
        });
        assert!(res.is_err());
        assert_eq!(calls, 3);
    }

    #[test]
    fn zero_iterations_leave_weights_untouched() {
        let mut t = trainer(vec![4, 6, 7], vec![1.0], 9);
        let before = t.network().clone();
        let err = t.train(0).unwrap();
        assert_eq!(t.network(), &before);
        assert_eq!(err, t.mean_squared_error().unwrap());
    }

    #[test]
    fn step_reports_error_before_update() {
        let mut t = trainer(vec![4, 6, 7], vec![1.0], 2);
        let initial = t.mean_squared_error().unwrap();
        assert_eq!(t.step().unwrap(), initial);
    }

    #[test]
    fn rejects_network_that_does_not_fit_data() {
        let config = TrainConfig::new(1, vec![1.0]).with_seed(0);
        let ds = seven_segment::digits().unwrap();
        let err = Trainer::initialize(&NetworkSpec::new(vec![3, 6, 7]), ds, config);
        assert!(matches!(err, Err(NetError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_wrong_number_of_learning_rates() {
        let config = TrainConfig::new(1, vec![1.0, 1.0]).with_seed(0);
        let ds = seven_segment::digits().unwrap();
        assert!(Trainer::initialize(&NetworkSpec::new(vec![4, 6, 6, 7]), ds, config).is_err());
    }

    #[test]
    fn predict_matches_forward_output() {
        let t = trainer(vec![4, 5, 7], vec![1.0], 3);
        let out = t.predict(t.dataset().inputs()).unwrap();
        assert_eq!(&out, t.forward().unwrap().output());
        assert_eq!(out.shape(), (10, 7));
    }
}
