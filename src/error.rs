//! Error types for u-aco.
//!
//! Malformed graphs and invalid parameters are configuration errors,
//! reported before any round executes. A dead-ended ant is not an error;
//! see [`crate::aco::AntOutcome`].

use thiserror::Error;

/// Result type alias for u-aco operations.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Unified error type for graph construction and run configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The distance matrix has no nodes.
    #[error("graph must contain at least one node")]
    EmptyGraph,

    /// A row of the distance matrix has the wrong number of columns.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// `distance[i][j]` and `distance[j][i]` differ beyond tolerance.
    #[error("distance matrix is not symmetric at ({i}, {j}): {forward} vs {backward}")]
    Asymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// `distance[i][j]`.
        forward: f64,
        /// `distance[j][i]`.
        backward: f64,
    },

    /// A diagonal entry is not zero.
    #[error("distance from node {node} to itself must be 0, got {value}")]
    NonZeroDiagonal {
        /// Node whose self-distance is wrong.
        node: usize,
        /// The offending value.
        value: f64,
    },

    /// An off-diagonal entry is zero, negative, or NaN.
    #[error("distance between distinct nodes {i} and {j} must be positive, got {value}")]
    NonPositiveDistance {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// The offending value.
        value: f64,
    },

    /// A node identifier does not exist in the graph.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node identifier.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// An algorithm parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AcoError::NonPositiveDistance {
            i: 1,
            j: 3,
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "distance between distinct nodes 1 and 3 must be positive, got 0"
        );

        let err = AcoError::NodeOutOfRange {
            node: 7,
            node_count: 5,
        };
        assert!(err.to_string().contains("node 7"));

        let err = AcoError::InvalidConfig("num_ants must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: num_ants must be positive"
        );
    }
}
