//! Gene-order adjacency matrices and the distances between them.
//!
//! A [`Workspace`] indexes every gene of a genome set, [`adj_matrix_set`] turns
//! each genome into a signed [`AdjMatrix`], and the distance builders compare
//! them cell by cell, either raw ([`dist_matrix`]) or weighted by how common each
//! adjacency is ([`FreqMatrices`], [`dist_matrix_corrected`]).
pub mod distance;
pub mod error;
pub mod format;
pub mod freq;
pub mod gene;
pub mod index;
pub mod matrix;
pub mod workspace;

pub use distance::{ad, adc, dist_matrix, dist_matrix_corrected, mirror_lower};
pub use error::AdjError;
pub use freq::FreqMatrices;
pub use gene::{Gene, GeneOrder, Orientation};
pub use index::GeneIndex;
pub use matrix::{adj_matrix, adj_matrix_set, nonzero, AdjMatrix};
pub use workspace::Workspace;
