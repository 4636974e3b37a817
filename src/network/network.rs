use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{
    error::{NetError, Result},
    layers::dense::Layer,
    loss::mse::MseLoss,
    math::matrix::Matrix,
    network::spec::NetworkSpec,
    optim::sgd::Sgd,
};

/// Activations produced by one forward pass.
///
/// `activations[0]` is the input batch; `activations[i + 1]` is the output of
/// layer `i`. Backpropagation reads the whole sequence, so it is kept intact
/// until the update for the same iteration has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    // Only built by `Network::forward`, which always pushes the input first.
    activations: Vec<Matrix>,
}

impl ForwardPass {
    pub fn activations(&self) -> &[Matrix] {
        &self.activations
    }

    pub fn input(&self) -> &Matrix {
        &self.activations[0]
    }

    pub fn output(&self) -> &Matrix {
        &self.activations[self.activations.len() - 1]
    }

    pub fn into_output(mut self) -> Matrix {
        self.activations.pop().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// One weight matrix per layer boundary, every entry uniform on [-1, 1).
    pub fn initialize<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;
        let layers = spec.weight_shapes()
            .into_iter()
            .map(|(input_size, size)| Layer::new(input_size, size, rng))
            .collect();
        Ok(Network { layers })
    }

    /// All-zero weights; every unit outputs exactly 0.5 regardless of input.
    pub fn zeros(spec: &NetworkSpec) -> Result<Network> {
        spec.validate()?;
        let layers = spec.weight_shapes()
            .into_iter()
            .map(|(input_size, size)| Layer::from_weights(Matrix::zeros(input_size, size)))
            .collect();
        Ok(Network { layers })
    }

    /// Builds a network from explicit layers, checking that adjacent shapes chain.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        if layers.is_empty() {
            return Err(NetError::InvalidConfig("network has no layers".into()));
        }
        for pair in layers.windows(2) {
            if pair[0].size() != pair[1].input_size() {
                return Err(NetError::ShapeMismatch {
                    op: "chain layers",
                    left: pair[0].weights.shape(),
                    right: pair[1].weights.shape(),
                });
            }
        }
        Ok(Network { layers })
    }

    pub fn spec(&self) -> NetworkSpec {
        let mut sizes: Vec<usize> = self.layers.first().map(|l| vec![l.input_size()]).unwrap_or_default();
        sizes.extend(self.layers.iter().map(Layer::size));
        NetworkSpec::new(sizes)
    }

    /// Forward pass over a batch of shape (n, input_size).
    pub fn forward(&self, inputs: &Matrix) -> Result<ForwardPass> {
        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        activations.push(inputs.clone());
        for layer in &self.layers {
            let next = layer.feed_forward(&activations[activations.len() - 1])?;
            activations.push(next);
        }
        Ok(ForwardPass { activations })
    }

    /// Backpropagates the squared error of `pass` against `targets` and
    /// updates every weight matrix in place, last layer first.
    pub fn backward_and_update(
        &mut self,
        pass: &ForwardPass,
        targets: &Matrix,
        optimizer: &Sgd,
    ) -> Result<()> {
        if pass.activations.len() != self.layers.len() + 1 {
            return Err(NetError::InvalidConfig(format!(
                "forward pass has {} activations for {} layers",
                pass.activations.len(),
                self.layers.len()
            )));
        }

        // ∂E/∂output for the last layer.
        let mut error = MseLoss::derivative(targets, pass.output())?;

        for i in (0..self.layers.len()).rev() {
            let delta = self.layers[i].compute_delta(&pass.activations[i + 1], &error)?;

            // Propagate before the step so layer i-1 sees this layer's old weights.
            if i > 0 {
                error = self.layers[i].backpropagate(&delta)?;
            }

            optimizer.step(i, &mut self.layers[i], &pass.activations[i], &delta)?;
        }

        Ok(())
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)?;
        Network::from_layers(network.layers)
    }
}
