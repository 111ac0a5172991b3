use crate::libs::adj::error::AdjError;
use crate::libs::adj::gene::GeneOrder;
use crate::libs::adj::index::GeneIndex;
use crate::libs::adj::workspace::Workspace;
use nalgebra::DMatrix;

/// Signed gene-adjacency matrix of one genome.
///
/// Cell `(i, j)` is `1` when gene `i` is immediately followed by gene `j` in
/// forward orientation, `-1` when `j` is reversed, `0` otherwise.
pub type AdjMatrix = DMatrix<i8>;

/// Build the adjacency matrix of a genome against a finished gene index.
///
/// Genes are resolved by identifier, whatever orientation the index first
/// recorded for them. Fails with [`AdjError::Lookup`] when a gene is missing,
/// which means the index was not built over this genome.
///
/// ```
/// use figg::libs::adj::{adj_matrix, Gene, GeneIndex, GeneOrder};
///
/// let mut index = GeneIndex::new();
/// for id in ["g1", "g2", "g3"] {
///     index.insert(&Gene::forward(id));
/// }
/// let order = GeneOrder::parse("g1 -g2 g3", false).unwrap();
/// let matrix = adj_matrix(&order, &index).unwrap();
/// assert_eq!(matrix[(0, 1)], -1);
/// assert_eq!(matrix[(1, 2)], 1);
/// ```
pub fn adj_matrix(order: &GeneOrder, index: &GeneIndex) -> Result<AdjMatrix, AdjError> {
    let n = index.len();
    let mut matrix = AdjMatrix::zeros(n, n);

    // genomes with a single gene have no adjacency but must still be covered
    for gene in &order.genes {
        index.resolve(gene)?;
    }

    for (from, to) in order.adjacencies() {
        let i = index.resolve(from)?;
        let j = index.resolve(to)?;
        matrix[(i, j)] = to.orientation.sign();
    }

    Ok(matrix)
}

/// Adjacency matrices of all genomes; element 0 is the seed genome, the others
/// follow input order with the seed skipped.
///
/// `orders` must be the same collection the workspace was built from.
pub fn adj_matrix_set(
    workspace: &Workspace,
    orders: &[GeneOrder],
) -> Result<Vec<AdjMatrix>, AdjError> {
    if orders.len() != workspace.genomes {
        return Err(AdjError::InputShape(format!(
            "workspace covers {} genomes, got {} gene orders",
            workspace.genomes,
            orders.len()
        )));
    }

    let mut set = Vec::with_capacity(orders.len());
    set.push(workspace.seed_matrix.clone());
    for (_, order) in workspace.others(orders) {
        set.push(adj_matrix(order, &workspace.index)?);
    }

    Ok(set)
}

/// Nonzero cells as `(row, column, sign)`, row-major.
pub fn nonzero(matrix: &AdjMatrix) -> Vec<(usize, usize, i8)> {
    let mut cells = vec![];
    for i in 0..matrix.nrows() {
        for j in 0..matrix.ncols() {
            let v = matrix[(i, j)];
            if v != 0 {
                cells.push((i, j, v));
            }
        }
    }
    cells
}
