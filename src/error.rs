//! Error types for tour construction.
//!
//! Every failure is an input error detected before construction begins.
//! Nothing is retried: the computation is pure and deterministic.

use thiserror::Error;

/// Broad category of a [`TourError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or inconsistent matrix, node set, or start node.
    InvalidInput,
}

/// Top-level error returned by tour construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    /// The instance was rejected during validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

impl TourError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TourError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

/// The specific reason an instance was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The start node is not a member of the node set.
    #[error("start node {start} is not in the node set")]
    StartNotFound {
        /// Requested start node.
        start: usize,
    },

    /// The matrix dimension differs from the number of nodes.
    #[error("distance matrix is {matrix}x{matrix} but the node set has {nodes} nodes")]
    DimensionMismatch {
        /// Matrix dimension.
        matrix: usize,
        /// Number of nodes supplied.
        nodes: usize,
    },

    /// A row of the supplied matrix has the wrong length.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Actual row length.
        len: usize,
        /// Expected row length (number of rows).
        expected: usize,
    },

    /// The flat entry list does not hold `size * size` distances.
    #[error("distance matrix of size {size} needs {size}x{size} entries, got {len}")]
    DataLength {
        /// Declared matrix dimension.
        size: usize,
        /// Number of entries supplied.
        len: usize,
    },

    /// A node identifier lies outside `[0, N)`.
    #[error("node {node} is out of range for {size} nodes")]
    NodeOutOfRange {
        /// Offending node.
        node: usize,
        /// Number of nodes.
        size: usize,
    },

    /// A node identifier appears more than once in the node set.
    #[error("node {node} appears more than once in the node set")]
    DuplicateNode {
        /// Offending node.
        node: usize,
    },

    /// An off-diagonal distance is negative.
    #[error("distance ({from}, {to}) is negative: {value}")]
    NegativeDistance {
        /// Origin node.
        from: usize,
        /// Destination node.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// An off-diagonal distance is NaN or infinite.
    #[error("distance ({from}, {to}) is not finite: {value}")]
    NonFiniteDistance {
        /// Origin node.
        from: usize,
        /// Destination node.
        to: usize,
        /// Offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_invalid_input() {
        let err = TourError::from(InputError::StartNotFound { start: 7 });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_display_includes_reason() {
        let err = TourError::from(InputError::NegativeDistance {
            from: 1,
            to: 2,
            value: -3.0,
        });
        assert_eq!(err.to_string(), "invalid input: distance (1, 2) is negative: -3");
    }
}
