use crate::error::{NetError, Result};

/// Architecture of a network as an ordered list of layer widths,
/// input first, output last. `[4, 6, 7]` has two weight matrices:
/// (4, 6) and (6, 7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSpec {
    pub layer_sizes: Vec<usize>,
}

impl NetworkSpec {
    pub fn new(layer_sizes: Vec<usize>) -> NetworkSpec {
        NetworkSpec { layer_sizes }
    }

    pub fn validate(&self) -> Result<()> {
        if self.layer_sizes.len() < 2 {
            return Err(NetError::InvalidConfig(format!(
                "need at least an input and an output layer, got {:?}",
                self.layer_sizes
            )));
        }
        if self.layer_sizes.contains(&0) {
            return Err(NetError::InvalidConfig(format!(
                "layer sizes must be positive, got {:?}",
                self.layer_sizes
            )));
        }
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes.first().copied().unwrap_or(0)
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or(0)
    }

    /// Number of weight matrices.
    pub fn depth(&self) -> usize {
        self.layer_sizes.len().saturating_sub(1)
    }

    /// (incoming, outgoing) shape of each weight matrix.
    pub fn weight_shapes(&self) -> Vec<(usize, usize)> {
        self.layer_sizes.windows(2).map(|w| (w[0], w[1])).collect()
    }
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::new(vec![4, 6, 7])
    }
}
