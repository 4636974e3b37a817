/// The logistic activation, the only nonlinearity the network uses.
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)`. Saturates to exactly 0.0 or 1.0 for large |x|
    /// instead of overflowing.
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// Derivative expressed through the activation's own output.
    ///
    /// `y` must already be `Sigmoid::function(z)`, not the pre-activation `z`:
    /// σ'(z) = σ(z)(1 - σ(z)) = y(1 - y).
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}
