use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjError {
    /// Gene orders or labels are empty, mismatched in length, or the seed is out of range
    InputShape(String),
    /// A gene is absent from the gene index in either orientation
    Lookup {
        /// Identifier of the missing gene
        gene: String,
    },
    /// Two matrices that must be compared cell by cell differ in dimensions
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A token that does not name a gene (e.g., a bare `-`)
    Token(String),
}

impl fmt::Display for AdjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjError::InputShape(msg) => write!(f, "Input shape error: {}", msg),
            AdjError::Lookup { gene } => {
                write!(f, "Lookup error: gene \"{}\" is not in the gene index", gene)
            }
            AdjError::ShapeMismatch { left, right } => write!(
                f,
                "Shape mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            AdjError::Token(token) => write!(f, "Invalid gene token: \"{}\"", token),
        }
    }
}

impl std::error::Error for AdjError {}

/// Fails unless both shapes are equal.
pub fn check_shape(left: (usize, usize), right: (usize, usize)) -> Result<(), AdjError> {
    if left == right {
        Ok(())
    } else {
        Err(AdjError::ShapeMismatch { left, right })
    }
}
