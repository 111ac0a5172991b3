//! Adjacency differences between genomes and the distance matrices built from them.
//!
//! Distance matrices are filled in the strict lower triangle only: cell `(i, j)`
//! with `j < i` holds the distance between genome `i` and genome `j`, every other
//! cell is zero. Use [`mirror_lower`] when a full symmetric matrix is needed.
use crate::libs::adj::error::{check_shape, AdjError};
use crate::libs::adj::freq::FreqMatrices;
use crate::libs::adj::matrix::AdjMatrix;
use itertools::Itertools;
use nalgebra::{DMatrix, Scalar};
use rayon::prelude::*;

/// Adjacency difference (AD): the number of cells where two matrices disagree.
///
/// ```
/// use figg::libs::adj::{ad, AdjMatrix};
///
/// let a = AdjMatrix::from_row_slice(2, 2, &[0, 1, 0, 0]);
/// let b = AdjMatrix::from_row_slice(2, 2, &[0, -1, 1, 0]);
/// assert_eq!(ad(&a, &b).unwrap(), 2);
/// assert_eq!(ad(&a, &a).unwrap(), 0);
/// ```
pub fn ad(m1: &AdjMatrix, m2: &AdjMatrix) -> Result<usize, AdjError> {
    check_shape(m1.shape(), m2.shape())?;

    Ok(m1.iter().zip(m2.iter()).filter(|(a, b)| a != b).count())
}

/// Corrected adjacency difference (ADc).
///
/// Each disagreeing cell adds `1 - positive` frequency when both matrices are
/// positive there and `1 - negative` frequency otherwise, so a disagreement on an
/// adjacency most genomes share weighs less than one on a rare adjacency.
pub fn adc(m1: &AdjMatrix, m2: &AdjMatrix, freqs: &FreqMatrices) -> Result<f64, AdjError> {
    check_shape(m1.shape(), m2.shape())?;
    check_shape(m1.shape(), freqs.positive.shape())?;
    check_shape(m1.shape(), freqs.negative.shape())?;

    let mut diff = 0.0;
    for (k, (a, b)) in m1.iter().zip(m2.iter()).enumerate() {
        if a == b {
            continue;
        }
        // a and b are both column-major, as are the frequency matrices
        if *a > 0 && *b > 0 {
            diff += 1.0 - freqs.positive[k];
        } else {
            diff += 1.0 - freqs.negative[k];
        }
    }

    Ok(diff)
}

/// Raw distance matrix: AD between every pair of genomes.
pub fn dist_matrix(set: &[AdjMatrix]) -> Result<DMatrix<usize>, AdjError> {
    lower_triangle(set.len(), |i, j| ad(&set[i], &set[j]))
}

/// Corrected distance matrix: ADc between every pair of genomes.
pub fn dist_matrix_corrected(
    set: &[AdjMatrix],
    freqs: &FreqMatrices,
) -> Result<DMatrix<f64>, AdjError> {
    lower_triangle(set.len(), |i, j| adc(&set[i], &set[j], freqs))
}

/// Fill the strict lower triangle of an `n x n` matrix, pairs in parallel.
fn lower_triangle<T, F>(n: usize, f: F) -> Result<DMatrix<T>, AdjError>
where
    T: Scalar + num_traits::Zero + Send,
    F: Fn(usize, usize) -> Result<T, AdjError> + Sync,
{
    let pairs: Vec<(usize, usize)> = (0..n).tuple_combinations().map(|(j, i)| (i, j)).collect();

    let values = pairs
        .par_iter()
        .map(|&(i, j)| f(i, j))
        .collect::<Result<Vec<T>, _>>()?;

    let mut matrix = DMatrix::<T>::zeros(n, n);
    for ((i, j), v) in pairs.into_iter().zip(values) {
        matrix[(i, j)] = v;
    }

    Ok(matrix)
}

/// Copy the strict lower triangle onto the upper one.
pub fn mirror_lower<T: Scalar + Copy>(matrix: &DMatrix<T>) -> DMatrix<T> {
    let mut full = matrix.clone();
    for i in 0..matrix.nrows() {
        for j in 0..i {
            full[(j, i)] = matrix[(i, j)];
        }
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn matrix(n: usize, cells: &[(usize, usize, i8)]) -> AdjMatrix {
        let mut m = AdjMatrix::zeros(n, n);
        for &(i, j, v) in cells {
            m[(i, j)] = v;
        }
        m
    }

    #[test]
    fn ad_reflexive_symmetric() {
        let a = matrix(3, &[(0, 1, 1), (1, 2, -1)]);
        let b = matrix(3, &[(0, 1, -1), (2, 0, 1)]);

        assert_eq!(ad(&a, &a).unwrap(), 0);
        assert_eq!(ad(&a, &b).unwrap(), 3);
        assert_eq!(ad(&a, &b).unwrap(), ad(&b, &a).unwrap());
    }

    #[test]
    fn ad_shape_mismatch() {
        let a = matrix(2, &[]);
        let b = matrix(3, &[]);
        assert_eq!(
            ad(&a, &b),
            Err(AdjError::ShapeMismatch {
                left: (2, 2),
                right: (3, 3)
            })
        );
    }

    #[test]
    fn lower_triangle_only() {
        let set = vec![
            matrix(3, &[(0, 1, 1), (1, 2, 1)]),
            matrix(3, &[(0, 1, -1), (1, 2, 1)]),
            matrix(3, &[(1, 0, 1)]),
            matrix(3, &[(0, 1, 1), (1, 2, 1)]),
        ];
        let dist = dist_matrix(&set).unwrap();

        assert_eq!(dist.shape(), (4, 4));
        for i in 0..4 {
            for j in i..4 {
                assert_eq!(dist[(i, j)], 0);
            }
        }
        assert_eq!(dist[(1, 0)], 1);
        assert_eq!(dist[(2, 0)], 3);
        assert_eq!(dist[(2, 1)], 3);
        assert_eq!(dist[(3, 0)], 0);
        assert_eq!(dist[(3, 2)], 3);
    }

    #[test]
    fn mirrored() {
        let set = vec![
            matrix(2, &[(0, 1, 1)]),
            matrix(2, &[(1, 0, 1)]),
            matrix(2, &[]),
        ];
        let full = mirror_lower(&dist_matrix(&set).unwrap());
        assert_eq!(full, full.transpose());
        assert_eq!(full[(0, 1)], 2);
        assert_eq!(full[(1, 2)], 1);
        assert_eq!(full[(2, 2)], 0);
    }

    #[test]
    fn adc_weights_rare_differences() {
        let set = vec![
            matrix(3, &[(0, 1, 1), (1, 2, 1)]),
            matrix(3, &[(0, 1, -1), (1, 2, 1)]),
            matrix(3, &[(0, 1, 1), (1, 2, 1)]),
            matrix(3, &[(0, 1, 1), (1, 2, 1)]),
        ];
        let freqs = FreqMatrices::from_set(&set).unwrap();

        // the only difference is at (0, 1), where negative frequency is 0.25
        assert_relative_eq!(adc(&set[0], &set[1], &freqs).unwrap(), 0.75);
        assert_relative_eq!(adc(&set[0], &set[2], &freqs).unwrap(), 0.0);
        assert_relative_eq!(
            adc(&set[0], &set[1], &freqs).unwrap(),
            adc(&set[1], &set[0], &freqs).unwrap()
        );

        let dist = dist_matrix_corrected(&set, &freqs).unwrap();
        assert_relative_eq!(dist[(1, 0)], 0.75);
        assert_relative_eq!(dist[(2, 1)], 0.75);
        assert_relative_eq!(dist[(3, 2)], 0.0);
        assert_relative_eq!(dist[(0, 1)], 0.0);
    }

    #[test]
    fn adc_present_versus_absent() {
        let set = vec![matrix(2, &[(0, 1, 1)]), matrix(2, &[])];
        let freqs = FreqMatrices::from_set(&set).unwrap();

        // +1 against 0 uses the negative frequency, which is zero here
        assert_relative_eq!(adc(&set[0], &set[1], &freqs).unwrap(), 1.0);
    }

    #[test]
    fn adc_shape_mismatch() {
        let set = vec![matrix(2, &[])];
        let freqs = FreqMatrices::from_set(&set).unwrap();
        let big = matrix(3, &[]);
        assert!(matches!(
            adc(&big, &big, &freqs),
            Err(AdjError::ShapeMismatch { .. })
        ));
    }
}
