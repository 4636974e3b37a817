use crate::error::Result;
use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over every element of the batch: mean((target - output)²).
    pub fn loss(targets: &Matrix, outputs: &Matrix) -> Result<f64> {
        let squared = targets.zip_with(outputs, "mse", |t, o| (t - o).powi(2))?;
        let n = squared.as_slice().len();
        if n == 0 {
            return Ok(0.0);
        }
        Ok(squared.as_slice().iter().sum::<f64>() / n as f64)
    }

    /// Gradient of the per-element squared error w.r.t. the output:
    /// -2 * (target - output). Not divided by the element count.
    pub fn derivative(targets: &Matrix, outputs: &Matrix) -> Result<Matrix> {
        targets.zip_with(outputs, "mse derivative", |t, o| -2.0 * (t - o))
    }
}
