use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::sigmoid::Sigmoid, error::Result, math::matrix::Matrix};

/// A fully-connected sigmoid layer without bias.
///
/// `weights` has shape (input_size, size): a batch of shape (n, input_size)
/// multiplies on the left to give activations of shape (n, size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub weights: Matrix,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(input_size: usize, size: usize, rng: &mut R) -> Layer {
        Layer {
            weights: Matrix::random_uniform(input_size, size, rng),
        }
    }

    pub fn from_weights(weights: Matrix) -> Layer {
        Layer { weights }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows()
    }

    pub fn size(&self) -> usize {
        self.weights.cols()
    }

    /// σ(input @ W)
    pub fn feed_forward(&self, input: &Matrix) -> Result<Matrix> {
        Ok(input.matmul(&self.weights)?.map(Sigmoid::function))
    }

    /// δ = error ⊙ σ'(output), where `output` is this layer's activation
    /// and `error` is ∂E/∂output.
    pub fn compute_delta(&self, output: &Matrix, error: &Matrix) -> Result<Matrix> {
        error.hadamard(&output.map(Sigmoid::derivative_from_output))
    }

    /// ∂E/∂input = δ @ Wᵀ, using the current (not yet updated) weights.
    pub fn backpropagate(&self, delta: &Matrix) -> Result<Matrix> {
        delta.matmul(&self.weights.transpose())
    }

    /// W -= lr * inputᵀ @ δ
    pub fn apply_gradient(&mut self, input: &Matrix, delta: &Matrix, lr: f64) -> Result<()> {
        let grad = input.transpose().matmul(delta)?;
        self.weights.scaled_sub_assign(&grad, lr)
    }
}
