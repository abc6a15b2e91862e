//! # `matgraph` - Dense Weighted Graph Container
//!
//! A dense, adjacency-matrix backed container for directed weighted graphs,
//! with reachability queries and a line-oriented matrix rendering.
//!
//! ## Design
//!
//! - **Matrix adjacency**: an `n x n` row-major matrix of edge weights; a cell
//!   equal to the zero value of the weight type means "no edge". The weight
//!   type is generic over [`num_traits::Zero`], so any numeric type (or a
//!   custom type with a zero identity) works unchanged.
//! - **Checked mutation**: every vertex argument is bounds-checked and
//!   rejected with [`GraphError::IndexOutOfRange`] instead of panicking; a
//!   rejected operation never modifies the graph.
//! - **Call-time traversal strategy**: reachability runs depth-first by
//!   default, with breadth-first selectable through [`Traversal`]. Both use an
//!   explicit frontier and a word-packed visited bitset, so call depth stays
//!   constant regardless of graph size.
//! - **Exclusive ownership**: the graph owns its storage and mutates through
//!   `&mut self`. There is no interior mutability and no concurrent access
//!   support; wrap the graph in a lock if it must cross threads.
//!
//! ## Example
//!
//! ```rust
//! use matgraph::MatrixGraph;
//!
//! # fn main() -> Result<(), matgraph::GraphError> {
//! let mut graph = MatrixGraph::new(5);
//! graph.add_edge(0, 1, 10)?;
//! graph.add_edge(1, 2, 20)?;
//! graph.add_edge(2, 3, 30)?;
//!
//! assert_eq!(*graph.weight(1, 2)?, 20);
//! assert!(graph.has_path(0, 3)?);
//! assert!(!graph.has_path(3, 0)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::{MatrixGraph, Traversal};
