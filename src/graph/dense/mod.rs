//! A dense adjacency-matrix directed graph with generic edge weights.
//!
//! This representation prioritizes **O(1) edge mutation and lookup** over a
//! fixed vertex set, at the cost of `n * n` storage.
//!
//! Memory layout:
//! - `weights`: `Vec<W>` of length `n * n`, row-major (`weights[u * n + v]`
//!   is the weight of the edge `u -> v`)
//! - a cell equal to `W::zero()` means the edge is absent; this is the
//!   adjacency test used by every traversal, not an explicit boolean
//!
//! Traversal strategies live in [`traversal`], driven through the shared
//! visited-set primitive in `graph::access`.

use core::fmt;

use num_traits::Zero;

use crate::error::GraphError;

mod traversal;

pub use traversal::Traversal;

/// A dense directed graph over a fixed vertex set `0..n`, weighted by `W`.
///
/// The zero value of `W` doubles as "no edge": constructing the graph fills
/// the matrix with `W::zero()`, and any cell that compares zero is skipped by
/// adjacency iteration. Overwriting a cell with zero therefore disconnects
/// the pair, but no dedicated removal operation is offered.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) | Overwrites one cell |
/// | `weight` | \(O(1)\) | Direct cell access |
/// | `out_neighbors` | \(O(n)\) | Scans one row |
/// | `in_degree` | \(O(n)\) | Scans one column |
/// | `edge_count` | \(O(n^2)\) | Scans the whole matrix |
/// | `has_path` | \(O(n^2)\) | Visits each vertex at most once, row scan per visit |
#[derive(Debug)]
pub struct MatrixGraph<W> {
    weights: Vec<W>,
    vertex_count: usize,
}

impl<W: Zero + Clone> MatrixGraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// `vertex_count == 0` yields a degenerate empty graph on which every
    /// vertex argument is out of range.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            weights: vec![W::zero(); vertex_count * vertex_count],
            vertex_count,
        }
    }
}

impl<W> MatrixGraph<W> {
    /// Builds a graph from explicit weight rows.
    ///
    /// Row `u` holds the outgoing weights of vertex `u`; cell `v` of that row
    /// is the weight of `u -> v`, with the zero value meaning "no edge".
    ///
    /// # Errors
    /// Returns [`GraphError::RaggedRows`] if any row's length differs from
    /// the number of rows (the matrix must be square).
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self, GraphError> {
        let vertex_count = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != vertex_count {
                return Err(GraphError::RaggedRows {
                    row,
                    expected: vertex_count,
                    actual: cells.len(),
                });
            }
        }
        Ok(Self {
            weights: rows.into_iter().flatten().collect(),
            vertex_count,
        })
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Sets the weight of the directed edge `from -> to`, overwriting any
    /// previous value.
    ///
    /// Storing `W::zero()` leaves the pair disconnected as far as traversals
    /// are concerned.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `from` or `to` is not a
    /// valid vertex; the graph is left unmodified.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.weights[from * self.vertex_count + to] = weight;
        Ok(())
    }

    /// Returns the stored weight of the cell `(from, to)`.
    ///
    /// This is the raw matrix cell: for absent edges it is the zero value,
    /// not an error.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `from` or `to` is not a
    /// valid vertex.
    pub fn weight(&self, from: usize, to: usize) -> Result<&W, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(&self.weights[from * self.vertex_count + to])
    }

    #[inline]
    fn check_vertex(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                len: self.vertex_count,
            })
        }
    }

    #[inline]
    fn row(&self, vertex: usize) -> &[W] {
        &self.weights[vertex * self.vertex_count..(vertex + 1) * self.vertex_count]
    }
}

impl<W: Zero> MatrixGraph<W> {
    /// Checks if an edge exists from `from` to `to` (nonzero cell).
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `from` or `to` is not a
    /// valid vertex.
    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        Ok(!self.weight(from, to)?.is_zero())
    }

    /// Returns the number of edges (nonzero cells).
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| !w.is_zero()).count()
    }

    /// Returns the out-neighbors of a vertex with their weights, in ascending
    /// target order.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `vertex` is not a valid
    /// vertex.
    pub fn out_neighbors(
        &self,
        vertex: usize,
    ) -> Result<impl Iterator<Item = (usize, &W)> + '_, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.neighbors_unchecked(vertex))
    }

    /// Returns the out-degree of a vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `vertex` is not a valid
    /// vertex.
    pub fn out_degree(&self, vertex: usize) -> Result<usize, GraphError> {
        Ok(self.out_neighbors(vertex)?.count())
    }

    /// Returns the in-degree of a vertex (column scan).
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `vertex` is not a valid
    /// vertex.
    pub fn in_degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok((0..self.vertex_count)
            .filter(|&u| !self.weights[u * self.vertex_count + vertex].is_zero())
            .count())
    }

    /// Row iteration without the bounds check, for callers that already
    /// validated `vertex`.
    #[inline]
    pub(crate) fn neighbors_unchecked(
        &self,
        vertex: usize,
    ) -> impl Iterator<Item = (usize, &W)> + '_ {
        self.row(vertex)
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
    }
}

/// Renders the matrix one row per line, cells space-separated, row-major.
///
/// Row `u` lists the outgoing weights of vertex `u`; absent edges print as
/// the zero value. An empty graph renders as nothing.
impl<W: fmt::Display> fmt::Display for MatrixGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertex_count == 0 {
            return Ok(());
        }
        for row in self.weights.chunks(self.vertex_count) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
