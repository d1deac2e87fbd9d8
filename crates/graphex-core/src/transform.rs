//! Structure-preserving transforms over graph expressions.
//!
//! [`map`](Graph::map) relabels vertices, [`bind`](Graph::bind) substitutes
//! whole subgraphs for vertices, and [`fold`](Graph::fold) reduces the vertex
//! occurrences of the expression tree. All three are homomorphisms over the
//! four constructors: `Overlay` and `Connect` shape is rebuilt as-is around
//! the transformed leaves.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::graph::Graph;
use crate::graph::iter::Frame;

impl<V> Graph<V> {
    /// Relabels every vertex with `f`, preserving the expression shape.
    ///
    /// No deduplication happens: if `f` maps two distinct vertices to the
    /// same value, the result contains two `Vertex` leaves denoting it. That
    /// is harmless under set semantics and keeps this O(expression size).
    #[must_use]
    pub fn map<W>(&self, mut f: impl FnMut(&V) -> W) -> Graph<W> {
        self.rebuild(&mut |v| Graph::Vertex(f(v)))
    }

    /// Replaces every vertex with the subgraph `f` returns for it, keeping
    /// the surrounding `Overlay`/`Connect` structure.
    ///
    /// This is the monadic bind of the algebra: a vertex on the left of a
    /// `Connect` is replaced by a whole subgraph, every vertex of which then
    /// points at every vertex of the right side.
    #[must_use]
    pub fn bind<W>(&self, mut f: impl FnMut(&V) -> Graph<W>) -> Graph<W> {
        self.rebuild(&mut f)
    }

    /// Rebuilds the expression shape around replaced leaves. Post-order
    /// worklist like the set-expansion walk, so depth does not consume call
    /// stack.
    fn rebuild<W>(&self, leaf: &mut impl FnMut(&V) -> Graph<W>) -> Graph<W> {
        let mut work: SmallVec<[Frame<'_, V>; 16]> = SmallVec::new();
        work.push(Frame::Visit(self));
        let mut results: Vec<Graph<W>> = Vec::new();

        while let Some(frame) = work.pop() {
            match frame {
                Frame::Visit(g) => match g {
                    Graph::Empty => results.push(Graph::Empty),
                    Graph::Vertex(v) => results.push(leaf(v)),
                    Graph::Overlay(l, r) | Graph::Connect(l, r) => {
                        work.push(Frame::Combine(g));
                        work.push(Frame::Visit(r));
                        work.push(Frame::Visit(l));
                    }
                },
                Frame::Combine(g) => {
                    // Both child results are present once the Combine frame
                    // pops.
                    let r = Arc::new(results.pop().unwrap());
                    let l = Arc::new(results.pop().unwrap());
                    let node = if matches!(g, Graph::Connect(_, _)) {
                        Graph::Connect(l, r)
                    } else {
                        Graph::Overlay(l, r)
                    };
                    results.push(node);
                }
            }
        }

        results.pop().unwrap_or(Graph::Empty)
    }

    /// Folds `f` over the vertex occurrences of the expression in
    /// left-then-right tree order.
    ///
    /// This reduces occurrences, not the deduplicated vertex set: a vertex
    /// appearing in several positions contributes once per position. Fold
    /// over [`vertex_set`](Graph::vertex_set) instead when set semantics are
    /// wanted.
    pub fn fold<B>(&self, init: B, mut f: impl FnMut(B, &V) -> B) -> B {
        self.iter().fold(init, |acc, v| f(acc, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_relabels() {
        let g = Graph::edge(1, 2);
        let h = g.map(|v| v * 10);
        assert_eq!(
            h.edge_set().into_iter().collect::<Vec<_>>(),
            [(10, 20)]
        );
    }

    #[test]
    fn test_map_identity_preserves_denotation() {
        let g = Graph::vertices([1, 2]).connect(Graph::vertex(3));
        let h = g.map(|v| *v);
        assert_eq!(g.vertex_set(), h.vertex_set());
        assert_eq!(g.edge_set(), h.edge_set());
    }

    #[test]
    fn test_map_collapse_keeps_occurrences() {
        let g = Graph::vertex(1).overlay(Graph::vertex(2));
        let h = g.map(|_| 0);
        // Two leaves remain, denoting the one vertex.
        assert_eq!(h.fold(0usize, |n, _| n + 1), 2);
        assert_eq!(h.vertex_set().into_iter().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn test_map_composition() {
        let g = Graph::vertices([1, 2, 3]);
        let via_two = g.map(|v| v + 1).map(|v| v * 2);
        let via_one = g.map(|v| (v + 1) * 2);
        assert_eq!(via_two, via_one);
    }

    #[test]
    fn test_bind_substitutes_subgraphs() {
        // Expanding the left vertex of an edge into two vertices connects
        // both replacements to the right side.
        let g = Graph::edge(0, 9);
        let h = g.bind(|v| {
            if *v == 0 {
                Graph::vertices([1, 2])
            } else {
                Graph::vertex(*v)
            }
        });
        let es: Vec<_> = h.edge_set().into_iter().collect();
        assert_eq!(es, [(1, 9), (2, 9)]);
    }

    #[test]
    fn test_bind_with_vertex_is_map() {
        let g = Graph::clique([1, 2, 3]);
        let mapped = g.map(|v| v + 100);
        let bound = g.bind(|v| Graph::vertex(v + 100));
        assert_eq!(mapped, bound);
    }

    #[test]
    fn test_bind_to_empty_erases_vertices() {
        let g = Graph::edge(1, 2);
        let h = g.bind(|_| Graph::<u32>::empty());
        assert!(h.is_empty());
        assert!(h.edge_set().is_empty());
    }

    #[test]
    fn test_fold_sums_vertices() {
        let g = Graph::vertices([1, 2, 3]);
        assert_eq!(g.fold(0, |acc, v| acc + v), 6);
    }

    #[test]
    fn test_fold_counts_occurrences_per_position() {
        let shared = Graph::vertex(5);
        let g = shared.clone().overlay(shared);
        // One distinct vertex, two occurrences.
        assert_eq!(g.fold(0, |acc, v| acc + v), 10);
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_fold_order_is_left_to_right() {
        let g = Graph::vertex("a").connect(Graph::vertex("b").overlay(Graph::vertex("c")));
        let order = g.fold(String::new(), |mut acc, v| {
            acc.push_str(v);
            acc
        });
        assert_eq!(order, "abc");
    }

    #[test]
    fn test_transforms_survive_deep_spines() {
        let g = Graph::vertices(0..100_000u32);
        let mapped = g.map(|v| v + 1);
        assert_eq!(mapped.fold(0usize, |n, _| n + 1), 100_000);
        let bound = g.bind(|v| Graph::vertex(*v));
        assert_eq!(bound.fold(0usize, |n, _| n + 1), 100_000);
    }

    #[test]
    fn test_fold_empty_contributes_nothing() {
        let g: Graph<u32> = Graph::empty().overlay(Graph::empty());
        assert_eq!(g.fold(42, |acc, _| acc + 1), 42);
    }
}
