use crate::libs::adj::error::AdjError;
use crate::libs::adj::gene::GeneOrder;
use crate::libs::adj::index::GeneIndex;
use crate::libs::adj::matrix::{adj_matrix, AdjMatrix};

/// Common indexing of all genes across a genome set.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    /// Every distinct gene, seed genome first, then genes in order of first appearance
    pub index: GeneIndex,
    /// Adjacency matrix of the seed genome, sized to the full index
    pub seed_matrix: AdjMatrix,
    /// Label of the genome that introduced each gene, parallel to `index`
    pub first_seen: Vec<String>,
    /// Position of the seed genome in the input
    pub seed: usize,
    /// Number of genomes the workspace was built from
    pub genomes: usize,
}

impl Workspace {
    /// Build the workspace with the first genome as seed.
    pub fn build(orders: &[GeneOrder], labels: &[String]) -> Result<Self, AdjError> {
        Self::build_with_seed(orders, labels, 0)
    }

    /// Build the workspace from `orders[seed]` outward.
    ///
    /// The seed's genes come first in the index, in order. Every other genome,
    /// in input order, appends the genes the index does not know yet under either
    /// orientation. The inputs are left untouched.
    pub fn build_with_seed(
        orders: &[GeneOrder],
        labels: &[String],
        seed: usize,
    ) -> Result<Self, AdjError> {
        if orders.is_empty() {
            return Err(AdjError::InputShape("no gene orders".to_string()));
        }
        if labels.len() != orders.len() {
            return Err(AdjError::InputShape(format!(
                "{} labels for {} gene orders",
                labels.len(),
                orders.len()
            )));
        }
        if seed >= orders.len() {
            return Err(AdjError::InputShape(format!(
                "seed genome {} out of range for {} gene orders",
                seed,
                orders.len()
            )));
        }

        // Pass 1: discover every gene
        let mut index = GeneIndex::new();
        let mut first_seen = vec![];
        let seed_genome = std::iter::once((seed, &orders[seed]));
        let others = orders.iter().enumerate().filter(|(i, _)| *i != seed);
        for (i, order) in seed_genome.chain(others) {
            for gene in &order.genes {
                let (_, added) = index.insert(gene);
                if added {
                    first_seen.push(labels[i].clone());
                }
            }
        }

        // Pass 2: the seed matrix at its final size
        let seed_matrix = adj_matrix(&orders[seed], &index)?;

        Ok(Self {
            index,
            seed_matrix,
            first_seen,
            seed,
            genomes: orders.len(),
        })
    }

    /// Genomes other than the seed, with their input positions, in input order.
    pub fn others<'a, T>(&self, items: &'a [T]) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        let seed = self.seed;
        items.iter().enumerate().filter(move |(i, _)| *i != seed)
    }

    /// Genome positions in matrix-set order: the seed, then the rest.
    pub fn genome_order(&self) -> Vec<usize> {
        std::iter::once(self.seed)
            .chain((0..self.genomes).filter(|i| *i != self.seed))
            .collect()
    }

    pub fn num_genes(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::adj::gene::Gene;
    use crate::libs::adj::matrix::nonzero;

    fn orders(texts: &[&str], circular: bool) -> Vec<GeneOrder> {
        texts
            .iter()
            .map(|t| GeneOrder::parse(t, circular).unwrap())
            .collect()
    }

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("G{}", i + 1)).collect()
    }

    #[test]
    fn identical_genomes() {
        let orders = orders(&["g1 g2 g3", "g1 g2 g3"], false);
        let ws = Workspace::build(&orders, &labels(2)).unwrap();

        assert_eq!(ws.index.ids(), vec!["g1", "g2", "g3"]);
        assert_eq!(nonzero(&ws.seed_matrix), vec![(0, 1, 1), (1, 2, 1)]);
        assert_eq!(ws.first_seen, vec!["G1", "G1", "G1"]);
    }

    #[test]
    fn new_gene_extends_index() {
        let base = orders(&["g1 -g2 g3", "g3 g2 g1"], false);
        let extended = orders(&["g1 -g2 g3", "g3 g4 g2 g1"], false);

        let before = Workspace::build(&base, &labels(2)).unwrap();
        let after = Workspace::build(&extended, &labels(2)).unwrap();

        assert_eq!(after.num_genes(), before.num_genes() + 1);
        assert_eq!(after.index.get(3), Some(Gene::forward("g4")));
        assert_eq!(after.first_seen[3], "G2");

        // the new row and column are zero, the rest is unchanged
        assert!(after.seed_matrix.row(3).iter().all(|v| *v == 0));
        assert!(after.seed_matrix.column(3).iter().all(|v| *v == 0));
        assert_eq!(
            after.seed_matrix.view((0, 0), (3, 3)).clone_owned(),
            before.seed_matrix
        );
    }

    #[test]
    fn flipped_gene_not_duplicated() {
        // g2 is reversed in the seed and forward later
        let orders = orders(&["g1 -g2", "g2 g1 g5", "-g5 -g6"], false);
        let ws = Workspace::build(&orders, &labels(3)).unwrap();

        assert_eq!(ws.index.ids(), vec!["g1", "g2", "g5", "g6"]);
        assert_eq!(ws.index.get(1), Some(Gene::reverse("g2")));
        assert_eq!(ws.first_seen, vec!["G1", "G1", "G2", "G3"]);
    }

    #[test]
    fn circular_seed() {
        let orders = orders(&["g1 g2 -g3", "g3 g1 g2"], true);
        let ws = Workspace::build(&orders, &labels(2)).unwrap();

        assert_eq!(ws.index.ids(), vec!["g1", "g2", "g3"]);
        assert_eq!(ws.first_seen.len(), 3);
        assert_eq!(
            nonzero(&ws.seed_matrix),
            vec![(0, 1, 1), (1, 2, -1), (2, 0, 1)]
        );
    }

    #[test]
    fn explicit_seed() {
        let orders = orders(&["g1 g2", "g3 g1", "g4"], false);
        let ws = Workspace::build_with_seed(&orders, &labels(3), 1).unwrap();

        assert_eq!(ws.index.ids(), vec!["g3", "g1", "g2", "g4"]);
        assert_eq!(ws.first_seen, vec!["G2", "G2", "G1", "G3"]);
        assert_eq!(nonzero(&ws.seed_matrix), vec![(0, 1, 1)]);
        assert_eq!(ws.genome_order(), vec![1, 0, 2]);

        let rest: Vec<usize> = ws.others(&orders).map(|(i, _)| i).collect();
        assert_eq!(rest, vec![0, 2]);
    }

    #[test]
    fn idempotent() {
        let orders = orders(&["a -b c", "c d", "-e a"], true);
        let first = Workspace::build(&orders, &labels(3)).unwrap();
        let second = Workspace::build(&orders, &labels(3)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.num_genes(), 5);
    }

    #[test]
    fn degenerate_genomes() {
        let orders = orders(&["g1", "", "g2"], false);
        let ws = Workspace::build(&orders, &labels(3)).unwrap();
        assert_eq!(ws.num_genes(), 2);
        assert!(nonzero(&ws.seed_matrix).is_empty());
    }

    #[test]
    fn shape_errors() {
        assert!(matches!(
            Workspace::build(&[], &[]),
            Err(AdjError::InputShape(_))
        ));

        let orders = orders(&["g1", "g2"], false);
        assert!(matches!(
            Workspace::build(&orders, &labels(1)),
            Err(AdjError::InputShape(_))
        ));
        assert!(matches!(
            Workspace::build_with_seed(&orders, &labels(2), 2),
            Err(AdjError::InputShape(_))
        ));
    }
}
