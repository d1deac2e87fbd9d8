//! Canonicalization of graph expressions.
//!
//! Repeated overlays, nested connects, and shared subtrees can make an
//! expression arbitrarily larger than the sets it denotes. [`Graph::compact`]
//! rebuilds the expression from those sets, producing a normal form whose
//! size is linear in |vertices| + |edges| and which is a fixed point of
//! compaction.

use std::collections::BTreeSet;

use crate::graph::Graph;

impl<V: Ord + Clone> Graph<V> {
    /// Rebuilds this graph from its denoted vertex and edge sets.
    ///
    /// The result is `vertices ∪ edges` expressed directly: an overlay of a
    /// vertex-only part (every denoted vertex) and an edge part (one
    /// `connect` of two singletons per denoted edge, overlay-folded
    /// together). Both parts are built from ordered sets, so the output is
    /// deterministic for a given denotation, and compacting twice returns a
    /// structurally identical expression.
    ///
    /// Denotation is preserved exactly: `g.compact().vertex_set() ==
    /// g.vertex_set()` and likewise for edges.
    #[must_use]
    pub fn compact(&self) -> Graph<V> {
        let mut edges = BTreeSet::new();
        let vertices = self.expand(&mut edges);
        tracing::debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            "rebuilding graph in compact form"
        );

        let vertex_part = Graph::vertices(vertices);
        let edge_part = edges
            .into_iter()
            .fold(Graph::Empty, |acc, (from, to)| {
                acc.overlay(Graph::edge(from, to))
            });
        vertex_part.overlay(edge_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_deduplicates_vertices() {
        let g = Graph::vertex(1).overlay(Graph::vertex(1).overlay(Graph::vertex(2)));
        let c = g.compact();
        assert_eq!(c.vertex_set().into_iter().collect::<Vec<_>>(), [1, 2]);
        assert!(c.edge_set().is_empty());
        // The duplicate leaf is gone: one occurrence per distinct vertex.
        assert_eq!(c.fold(0usize, |n, _| n + 1), 2);
    }

    #[test]
    fn test_compact_preserves_denotation() {
        let g = Graph::clique([1, 2, 3]).overlay(Graph::edge(3, 1));
        let c = g.compact();
        assert_eq!(c.vertex_set(), g.vertex_set());
        assert_eq!(c.edge_set(), g.edge_set());
    }

    #[test]
    fn test_compact_is_idempotent() {
        let g = Graph::vertices([1, 2])
            .connect(Graph::vertex(3))
            .overlay(Graph::clique([2, 3, 4]));
        let once = g.compact();
        let twice = once.compact();
        // Structurally identical, not merely denotationally equal.
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compact_empty() {
        let g: Graph<u32> = Graph::empty().overlay(Graph::empty());
        let c = g.compact();
        assert!(c.is_empty());
    }

    #[test]
    fn test_compact_bounds_expression_size() {
        // Overlaying the same edge many times inflates the expression but
        // not its denotation; compact collapses it back down.
        let mut g = Graph::edge(1, 2);
        for _ in 0..100 {
            g = g.overlay(Graph::edge(1, 2));
        }
        let c = g.compact();
        // 2 vertex occurrences + 2 endpoints of the single edge.
        assert_eq!(c.fold(0usize, |n, _| n + 1), 4);
        assert_eq!(c.edge_set().into_iter().collect::<Vec<_>>(), [(1, 2)]);
    }

    #[test]
    fn test_compact_survives_deep_spines() {
        let right = Graph::vertices(0..100_000u32);
        assert_eq!(right.compact().vertex_count(), 100_000);

        let mut left = Graph::empty();
        for v in 0..100_000u32 {
            left = left.overlay(Graph::vertex(v));
        }
        let c = left.compact();
        assert_eq!(c.vertex_count(), 100_000);
        assert!(c.edge_set().is_empty());
    }

    #[test]
    fn test_compact_self_loop() {
        let v = Graph::vertex(1);
        let g = v.clone().connect(v);
        let c = g.compact();
        assert_eq!(c.edge_set().into_iter().collect::<Vec<_>>(), [(1, 1)]);
        assert_eq!(c.vertex_set().into_iter().collect::<Vec<_>>(), [1]);
    }
}
