//! Crate-wide error and result types.

use thiserror::Error;

/// Result alias for fallible lattice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the loaders and matrix builders.
#[derive(Debug, Error)]
pub enum Error {
    /// The edge-list file couldn't be opened or read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An edge-list line didn't hold exactly two 1-based integer node ids.
    #[error("malformed edge on line {line}: expected two positive integer node ids")]
    ParseEdge {
        /// 1-based line number within the input.
        line: usize,
    },

    /// A matrix-consuming function was handed a non-square matrix.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// A community partition referenced a node the matrix doesn't have.
    #[error("node {node} is out of range for a matrix of dimension {dim}")]
    NodeOutOfRange {
        /// The offending node index.
        node: usize,
        /// The matrix dimension.
        dim: usize,
    },

    /// The graph has no edges, leaving the modularity matrix undefined.
    #[error("modularity is undefined for a graph with no edges")]
    NoEdges,
}
