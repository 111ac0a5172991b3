use crate::libs::adj::{Gene, GeneOrder};
use anyhow::{anyhow, bail, Result};
use std::collections::HashSet;
use std::io::BufRead;

/// Labelled gene orders, in input order.
#[derive(Debug, Clone, Default)]
pub struct GenomeSet {
    pub labels: Vec<String>,
    pub orders: Vec<GeneOrder>,
}

impl GenomeSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of the genome with this label.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// Parse one genome line: a label followed by gene tokens.
///
/// In a circular genome, a last token equal to the first one is the explicit
/// wrap-around and is dropped; naming the first gene in the other orientation is
/// an error.
///
/// ```
/// let (label, order) = figg::libs::order::parse_line("chrA g1 -g2 g3 g1", true).unwrap();
/// assert_eq!(label, "chrA");
/// assert_eq!(order.len(), 3);
/// assert!(order.circular);
/// ```
pub fn parse_line(line: &str, circular: bool) -> Result<(String, GeneOrder)> {
    let mut fields = line.split_whitespace();
    let label = fields
        .next()
        .ok_or_else(|| anyhow!("Empty genome line"))?
        .to_string();

    let genes = fields
        .map(|token| {
            token
                .parse::<Gene>()
                .map_err(|e| anyhow!("Genome {}: {}", label, e))
        })
        .collect::<Result<Vec<Gene>>>()?;

    if circular && genes.len() > 1 {
        let (first, last) = (&genes[0], &genes[genes.len() - 1]);
        if first.id == last.id && first.orientation != last.orientation {
            bail!(
                "Genome {}: circular repeat {} does not match first gene {}",
                label,
                last,
                first
            );
        }
    }

    Ok((label, GeneOrder::new(genes, circular)))
}

/// Read genomes, one per line. Blank lines and `#` comments are skipped.
pub fn read_genomes<R: BufRead>(reader: R, circular: bool) -> Result<GenomeSet> {
    let mut set = GenomeSet::default();
    let mut seen = HashSet::new();

    for (no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (label, order) =
            parse_line(line, circular).map_err(|e| anyhow!("Line {}: {}", no + 1, e))?;
        if !seen.insert(label.clone()) {
            bail!("Line {}: duplicated genome label {}", no + 1, label);
        }
        set.labels.push(label);
        set.orders.push(order);
    }

    Ok(set)
}
