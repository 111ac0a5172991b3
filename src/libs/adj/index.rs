use crate::libs::adj::error::AdjError;
use crate::libs::adj::gene::{Gene, Orientation};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Ordered set of distinct genes; a gene's position is its row and column in
/// every adjacency matrix.
///
/// Genes are keyed by identifier, so a gene seen as `g2` in one genome and as
/// `-g2` in another occupies a single slot. The orientation first observed is
/// kept for display.
#[derive(Debug, Clone, Default)]
pub struct GeneIndex {
    genes: IndexMap<String, Orientation, FxBuildHasher>,
}

impl GeneIndex {
    pub fn new() -> Self {
        Self {
            genes: IndexMap::with_hasher(FxBuildHasher::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Adds the gene unless its identifier is already present.
    ///
    /// Returns the gene's position and whether it was newly added.
    pub fn insert(&mut self, gene: &Gene) -> (usize, bool) {
        match self.genes.get_index_of(gene.id.as_str()) {
            Some(idx) => (idx, false),
            None => {
                let (idx, _) = self.genes.insert_full(gene.id.clone(), gene.orientation);
                (idx, true)
            }
        }
    }

    /// Position of a gene by identifier, ignoring orientation.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.genes.get_index_of(id)
    }

    pub fn resolve(&self, gene: &Gene) -> Result<usize, AdjError> {
        self.position(&gene.id).ok_or_else(|| AdjError::Lookup {
            gene: gene.id.clone(),
        })
    }

    /// The gene at a position, in its first observed orientation.
    pub fn get(&self, idx: usize) -> Option<Gene> {
        self.genes
            .get_index(idx)
            .map(|(id, orientation)| Gene::new(id.clone(), *orientation))
    }

    pub fn iter(&self) -> impl Iterator<Item = Gene> + '_ {
        self.genes
            .iter()
            .map(|(id, orientation)| Gene::new(id.clone(), *orientation))
    }

    /// Identifiers in index order.
    pub fn ids(&self) -> Vec<String> {
        self.genes.keys().cloned().collect()
    }
}

impl PartialEq for GeneIndex {
    fn eq(&self, other: &Self) -> bool {
        self.genes.len() == other.genes.len()
            && self.genes.iter().zip(other.genes.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for GeneIndex {}
