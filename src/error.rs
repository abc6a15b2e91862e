//! Error types for graph construction and queries.

use thiserror::Error;

/// Errors reported by [`MatrixGraph`](crate::MatrixGraph) operations.
///
/// Every fallible operation checks its vertex arguments up front and returns
/// before touching storage, so a rejected call leaves the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index was at or past the vertex count.
    #[error("vertex index {index} out of range for graph with {len} vertices")]
    IndexOutOfRange {
        /// The offending vertex index.
        index: usize,
        /// The graph's vertex count.
        len: usize,
    },

    /// A row passed to [`MatrixGraph::from_rows`](crate::MatrixGraph::from_rows)
    /// did not match the expected square dimension.
    #[error("row {row} has {actual} cells, expected {expected} (matrix must be square)")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (the number of rows).
        expected: usize,
        /// Actual row length.
        actual: usize,
    },
}
