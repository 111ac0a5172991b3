use crate::libs::adj::error::{check_shape, AdjError};
use crate::libs::adj::matrix::AdjMatrix;
use nalgebra::DMatrix;

/// How often each signed adjacency occurs across a genome set.
#[derive(Debug, Clone, PartialEq)]
pub struct FreqMatrices {
    /// Fraction of genomes with `+1` at each cell
    pub positive: DMatrix<f64>,
    /// Fraction of genomes with `-1` at each cell
    pub negative: DMatrix<f64>,
}

impl FreqMatrices {
    /// Count, for every cell, the genomes showing a forward and a reverse
    /// adjacency there, as fractions of the genome count rounded to 4 decimals.
    pub fn from_set(set: &[AdjMatrix]) -> Result<Self, AdjError> {
        let first = set
            .first()
            .ok_or_else(|| AdjError::InputShape("empty adjacency matrix set".to_string()))?;
        let shape = first.shape();
        for matrix in set {
            check_shape(shape, matrix.shape())?;
        }

        let mut pos_count = DMatrix::<usize>::zeros(shape.0, shape.1);
        let mut neg_count = DMatrix::<usize>::zeros(shape.0, shape.1);
        for matrix in set {
            for ((p, n), v) in pos_count
                .iter_mut()
                .zip(neg_count.iter_mut())
                .zip(matrix.iter())
            {
                match *v {
                    1 => *p += 1,
                    -1 => *n += 1,
                    _ => {}
                }
            }
        }

        let total = set.len() as f64;
        Ok(Self {
            positive: pos_count.map(|c| round4(c as f64 / total)),
            negative: neg_count.map(|c| round4(c as f64 / total)),
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.positive.shape()
    }
}

/// Round to 4 decimals, ties to even.
pub fn round4(x: f64) -> f64 {
    let y = x * 10000.0;
    let r = if (y - y.trunc()).abs() == 0.5 {
        2.0 * (y / 2.0).round()
    } else {
        y.round()
    };
    r / 10000.0
}
