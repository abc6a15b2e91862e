//! Graph containers and traversals.
//!
//! Graph code is organized into:
//! - `dense`: the adjacency-matrix container and its traversal strategies
//! - `access`: internal building blocks shared by traversals (visited sets)

pub mod dense;
pub(crate) mod access;

pub use dense::{MatrixGraph, Traversal};
