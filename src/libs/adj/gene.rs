use crate::libs::adj::error::AdjError;
use std::fmt;
use std::str::FromStr;

/// Strand of a gene within a genome's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    /// Sign written into an adjacency cell when a gene of this orientation is the
    /// second member of an adjacent pair.
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Forward => 1,
            Orientation::Reverse => -1,
        }
    }
}

/// A gene identifier together with its orientation.
///
/// Identity is carried by `id` alone: `g3` and `-g3` are the same gene.
///
/// ```
/// use figg::libs::adj::{Gene, Orientation};
///
/// let gene: Gene = "-g3".parse().unwrap();
/// assert_eq!(gene.id, "g3");
/// assert_eq!(gene.orientation, Orientation::Reverse);
/// assert_eq!(gene.to_string(), "-g3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gene {
    pub id: String,
    pub orientation: Orientation,
}

impl Gene {
    pub fn new(id: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            id: id.into(),
            orientation,
        }
    }

    pub fn forward(id: impl Into<String>) -> Self {
        Self::new(id, Orientation::Forward)
    }

    pub fn reverse(id: impl Into<String>) -> Self {
        Self::new(id, Orientation::Reverse)
    }

    pub fn is_reverse(&self) -> bool {
        self.orientation == Orientation::Reverse
    }
}

impl FromStr for Gene {
    type Err = AdjError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (id, orientation) = match token.strip_prefix('-') {
            Some(rest) => (rest, Orientation::Reverse),
            None => (token, Orientation::Forward),
        };
        if id.is_empty() || id.starts_with('-') {
            return Err(AdjError::Token(token.to_string()));
        }
        Ok(Gene::new(id, orientation))
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Forward => write!(f, "{}", self.id),
            Orientation::Reverse => write!(f, "-{}", self.id),
        }
    }
}

/// The genes of one genome, in order.
///
/// A circular order is adjacent from its last gene back to its first; the first
/// gene is never repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneOrder {
    pub genes: Vec<Gene>,
    pub circular: bool,
}

impl GeneOrder {
    /// A circular order whose last gene equals its first, orientation included,
    /// lists the wrap-around explicitly; that trailing repeat is dropped.
    pub fn new(mut genes: Vec<Gene>, circular: bool) -> Self {
        if circular && genes.len() > 1 && genes.first() == genes.last() {
            genes.pop();
        }
        Self { genes, circular }
    }

    /// Parse whitespace-separated tokens such as `g1 -g2 g3`.
    pub fn parse(tokens: &str, circular: bool) -> Result<Self, AdjError> {
        let genes = tokens
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Gene>, _>>()?;
        Ok(Self::new(genes, circular))
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Every ordered pair of neighbouring genes, including the wrap-around pair
    /// of a circular order.
    ///
    /// Orders shorter than two genes have no adjacencies.
    pub fn adjacencies(&self) -> impl Iterator<Item = (&Gene, &Gene)> + '_ {
        let wrap = match (self.circular, self.genes.first(), self.genes.last()) {
            (true, Some(first), Some(last)) if self.genes.len() > 1 => Some((last, first)),
            _ => None,
        };
        self.genes
            .windows(2)
            .map(|pair| (&pair[0], &pair[1]))
            .chain(wrap)
    }
}
