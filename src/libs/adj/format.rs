//! Plain-text renderings of workspaces and matrices.
use crate::libs::adj::index::GeneIndex;
use crate::libs::adj::matrix::{nonzero, AdjMatrix};
use crate::libs::adj::workspace::Workspace;
use nalgebra::{DMatrix, Scalar};
use std::fmt::Display;

/// One line per gene: position, gene as first observed, introducing genome.
pub fn workspace_tsv(workspace: &Workspace) -> String {
    let mut out = String::new();
    for (idx, (gene, label)) in workspace
        .index
        .iter()
        .zip(workspace.first_seen.iter())
        .enumerate()
    {
        out += &format!("{}\t{}\t{}\n", idx, gene, label);
    }
    out
}

/// Nonzero cells of one genome's matrix as `label  from  to  sign`.
pub fn adjacency_tsv(label: &str, matrix: &AdjMatrix, index: &GeneIndex) -> String {
    let ids = index.ids();
    let mut out = String::new();
    for (i, j, v) in nonzero(matrix) {
        out += &format!("{}\t{}\t{}\t{:+}\n", label, ids[i], ids[j], v);
    }
    out
}

/// Square matrix with a header row and a leading name column.
pub fn matrix_tsv<T: Scalar + Display>(names: &[String], matrix: &DMatrix<T>) -> String {
    let mut out = String::new();
    out += &format!("\t{}\n", names.join("\t"));
    for (i, name) in names.iter().enumerate() {
        let row: Vec<String> = (0..matrix.ncols())
            .map(|j| format!("{}", matrix[(i, j)]))
            .collect();
        out += &format!("{}\t{}\n", name, row.join("\t"));
    }
    out
}

/// Relaxed PHYLIP: the number of taxa, then one row per taxon.
///
/// With `lower`, each row stops before the diagonal.
pub fn phylip<T: Scalar + Display>(names: &[String], matrix: &DMatrix<T>, lower: bool) -> String {
    let mut out = String::new();
    out += &format!("{}\n", names.len());
    for (i, name) in names.iter().enumerate() {
        let end = if lower { i } else { matrix.ncols() };
        let mut line = name.to_string();
        for j in 0..end {
            line += &format!("\t{}", matrix[(i, j)]);
        }
        out += &line;
        out += "\n";
    }
    out
}
