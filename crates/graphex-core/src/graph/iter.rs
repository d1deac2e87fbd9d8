//! Iteration over vertex occurrences.

use smallvec::SmallVec;

use super::Graph;

/// Post-order traversal frame for the worklist-based walks over an
/// expression. A node is first `Visit`ed, which queues its children; its
/// `Combine` frame pops only after both child results have been produced.
pub(crate) enum Frame<'a, V> {
    Visit(&'a Graph<V>),
    Combine(&'a Graph<V>),
}

/// Borrowing iterator over the vertex occurrences of a graph expression.
///
/// Yields vertices in left-then-right tree order. This iterates the
/// expression tree, not the deduplicated vertex set: a vertex appearing in
/// several positions is yielded once per occurrence. [`Graph::fold`] is
/// defined in terms of this order.
///
/// The traversal keeps an explicit worklist instead of recursing, so deeply
/// right-nested expressions (e.g. long [`Graph::vertices`] chains) do not
/// consume call stack.
pub struct VertexOccurrences<'a, V> {
    stack: SmallVec<[&'a Graph<V>; 16]>,
}

impl<V> Graph<V> {
    /// Returns an iterator over the vertex occurrences of this expression in
    /// left-then-right tree order.
    pub fn iter(&self) -> VertexOccurrences<'_, V> {
        let mut stack = SmallVec::new();
        stack.push(self);
        VertexOccurrences { stack }
    }
}

impl<'a, V> Iterator for VertexOccurrences<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        while let Some(g) = self.stack.pop() {
            match g {
                Graph::Empty => {}
                Graph::Vertex(v) => return Some(v),
                Graph::Overlay(l, r) | Graph::Connect(l, r) => {
                    // Right pushed first so the left subtree pops first.
                    self.stack.push(r);
                    self.stack.push(l);
                }
            }
        }
        None
    }
}

impl<'a, V> IntoIterator for &'a Graph<V> {
    type Item = &'a V;
    type IntoIter = VertexOccurrences<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
