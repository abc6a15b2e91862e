//! Visited sets for graph traversals.
//!
//! A single implementation is provided: `VisitedSet`, a dense word-packed
//! bitset over vertex indices. Traversals are single-threaded and allocate a
//! fresh set per search, so plain `u64` words suffice; no atomics are needed.
//!
//! The goal is to keep graph algorithms expressing visited logic in one
//! place, independent of the graph representation that drives them.

/// A dense, word-packed visited set for fixed-size graphs.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0u64; (len + 63) / 64],
            len,
        }
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.len, "node {node} out of bounds for len {}", self.len);
        let word = node / 64;
        let mask = 1u64 << (node % 64);
        let first = self.words[word] & mask == 0;
        self.words[word] |= mask;
        first
    }
}
