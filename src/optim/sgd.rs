use crate::{error::{NetError, Result}, layers::dense::Layer, math::matrix::Matrix};

/// Plain gradient descent with one learning rate per layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Sgd {
    pub learning_rates: Vec<f64>,
}

impl Sgd {
    pub fn new(learning_rates: Vec<f64>) -> Sgd {
        Sgd { learning_rates }
    }

    /// Resolves the rates for a network with `layer_count` weight matrices.
    /// A single rate is broadcast to every layer.
    pub fn for_layers(learning_rates: &[f64], layer_count: usize) -> Result<Sgd> {
        let rates = match learning_rates {
            [rate] => vec![*rate; layer_count],
            rates if rates.len() == layer_count => rates.to_vec(),
            rates => {
                return Err(NetError::InvalidConfig(format!(
                    "{} learning rates given for {} layers",
                    rates.len(),
                    layer_count
                )))
            }
        };
        if let Some(bad) = rates.iter().find(|r| !r.is_finite()) {
            return Err(NetError::InvalidConfig(format!("learning rate {bad} is not finite")));
        }
        Ok(Sgd::new(rates))
    }

    pub fn rate(&self, layer_index: usize) -> Result<f64> {
        self.learning_rates.get(layer_index).copied().ok_or_else(|| {
            NetError::InvalidConfig(format!("no learning rate for layer {layer_index}"))
        })
    }

    /// Applies one update to the layer at `layer_index`.
    pub fn step(&self, layer_index: usize, layer: &mut Layer, input: &Matrix, delta: &Matrix) -> Result<()> {
        layer.apply_gradient(input, delta, self.rate(layer_index)?)
    }
}
