//! Reachability traversals over the dense matrix graph.
//!
//! Both strategies use an explicit frontier plus a word-packed visited set,
//! so the call depth is constant no matter how deep the graph is. A fresh
//! visited set is allocated per query; nothing persists across calls.

use std::collections::VecDeque;

use num_traits::Zero;

use crate::error::GraphError;
use crate::graph::access::visited::VisitedSet;
use crate::graph::dense::MatrixGraph;

/// Traversal strategy for reachability queries, selected at call time.
///
/// For any graph and any vertex pair the two strategies return the same
/// boolean; they differ only in exploration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Explore one branch fully before backtracking (LIFO frontier).
    DepthFirst,
    /// Explore vertices in order of hop distance (FIFO frontier).
    BreadthFirst,
}

impl<W: Zero> MatrixGraph<W> {
    /// Returns whether a directed path exists from `from` to `to`, using
    /// depth-first search.
    ///
    /// `from == to` is always reachable, regardless of matrix contents; the
    /// arguments are still bounds-checked. Otherwise the search visits each
    /// vertex at most once, scanning neighbor indices in ascending order and
    /// succeeding as soon as an edge into `to` is seen.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `from` or `to` is not a
    /// valid vertex.
    pub fn has_path(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        self.has_path_with(from, to, Traversal::DepthFirst)
    }

    /// Like [`has_path`](Self::has_path), with the traversal strategy chosen
    /// by the caller.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `from` or `to` is not a
    /// valid vertex.
    pub fn has_path_with(
        &self,
        from: usize,
        to: usize,
        strategy: Traversal,
    ) -> Result<bool, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        // Self-reachability is definitional, not graph-derived.
        if from == to {
            return Ok(true);
        }

        let reachable = match strategy {
            Traversal::DepthFirst => self.dfs_reaches(from, to),
            Traversal::BreadthFirst => self.bfs_reaches(from, to),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(from, to, ?strategy, reachable, "reachability query");

        Ok(reachable)
    }

    /// Returns the number of vertices reachable from `from`, counting `from`
    /// itself.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] if `from` is not a valid
    /// vertex.
    pub fn reachable_count(&self, from: usize) -> Result<usize, GraphError> {
        self.check_vertex(from)?;

        let mut visited = VisitedSet::new(self.vertex_count());
        let mut stack = vec![from];
        visited.try_visit(from);
        let mut count = 1;

        while let Some(vertex) = stack.pop() {
            for (neighbor, _) in self.neighbors_unchecked(vertex) {
                if visited.try_visit(neighbor) {
                    stack.push(neighbor);
                    count += 1;
                }
            }
        }

        Ok(count)
    }

    fn dfs_reaches(&self, from: usize, target: usize) -> bool {
        let mut visited = VisitedSet::new(self.vertex_count());
        let mut stack = vec![from];
        visited.try_visit(from);

        while let Some(vertex) = stack.pop() {
            for (neighbor, _) in self.neighbors_unchecked(vertex) {
                if neighbor == target {
                    return true;
                }
                if visited.try_visit(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        false
    }

    fn bfs_reaches(&self, from: usize, target: usize) -> bool {
        let mut visited = VisitedSet::new(self.vertex_count());
        let mut queue = VecDeque::from([from]);
        visited.try_visit(from);

        while let Some(vertex) = queue.pop_front() {
            for (neighbor, _) in self.neighbors_unchecked(vertex) {
                if neighbor == target {
                    return true;
                }
                if visited.try_visit(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        false
    }
}
