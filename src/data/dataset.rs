use crate::{error::{NetError, Result}, math::matrix::Matrix};

/// Paired training samples: row `i` of `inputs` maps to row `i` of `targets`.
/// Every value is 0 or 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Matrix,
    targets: Matrix,
}

impl Dataset {
    pub fn new(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Dataset> {
        Dataset::from_matrices(Matrix::from_rows(inputs)?, Matrix::from_rows(targets)?)
    }

    pub fn from_matrices(inputs: Matrix, targets: Matrix) -> Result<Dataset> {
        if inputs.rows() == 0 {
            return Err(NetError::EmptyDataset);
        }
        if inputs.rows() != targets.rows() {
            return Err(NetError::ShapeMismatch {
                op: "pair samples",
                left: inputs.shape(),
                right: targets.shape(),
            });
        }
        check_binary(&inputs)?;
        check_binary(&targets)?;
        Ok(Dataset { inputs, targets })
    }

    pub fn len(&self) -> usize {
        self.inputs.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.rows() == 0
    }

    pub fn input_size(&self) -> usize {
        self.inputs.cols()
    }

    pub fn target_size(&self) -> usize {
        self.targets.cols()
    }

    pub fn inputs(&self) -> &Matrix {
        &self.inputs
    }

    pub fn targets(&self) -> &Matrix {
        &self.targets
    }
}

fn check_binary(m: &Matrix) -> Result<()> {
    for (row, values) in m.iter_rows().enumerate() {
        if let Some((col, &value)) = values.iter().enumerate().find(|&(_, &v)| v != 0.0 && v != 1.0) {
            return Err(NetError::NonBinary { row, col, value });
        }
    }
    Ok(())
}
