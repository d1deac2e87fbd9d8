//! The algebraic graph expression type.
//!
//! A [`Graph`] is a recursive, immutable expression over vertex values. Edges
//! are never written down as identifier pairs; they only arise from the
//! [`Graph::connect`] combinator, which relates two sub-expressions. This
//! makes every graph valid by construction: an edge cannot mention a vertex
//! the expression does not also contain.
//!
//! Children of the binary constructors are `Arc`-shared, so every combinator
//! application is O(1) and cloning a large expression is two refcount bumps.

pub(crate) mod iter;

pub use iter::VertexOccurrences;

use std::sync::Arc;

/// A directed graph represented as an algebraic expression.
///
/// The four constructors and their denotations:
///
/// - `Empty` - no vertices, no edges
/// - `Vertex(v)` - the single vertex `v`, no edges
/// - `Overlay(a, b)` - union of the vertex sets and edge sets of `a` and `b`
/// - `Connect(a, b)` - union of `a` and `b`, plus a directed edge from every
///   vertex of `a` to every vertex of `b`
///
/// `Overlay` is commutative and associative with `Empty` as identity.
/// `Connect` is associative, distributes over `Overlay` on both sides, and is
/// not commutative (edge direction flips).
///
/// Equality, hashing, and `Debug` are structural: two expressions can denote
/// the same vertex and edge sets without being equal. Compare with
/// [`vertex_set`](Graph::vertex_set) / [`edge_set`](Graph::edge_set), or
/// normalize with [`compact`](Graph::compact) first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Graph<V> {
    /// The graph with no vertices and no edges.
    Empty,
    /// A single vertex, no edges.
    Vertex(V),
    /// Union of two graphs' vertices and edges.
    Overlay(Arc<Graph<V>>, Arc<Graph<V>>),
    /// Union of two graphs, plus an edge from every left vertex to every
    /// right vertex.
    Connect(Arc<Graph<V>>, Arc<Graph<V>>),
}

impl<V> Graph<V> {
    /// Creates the empty graph.
    #[must_use]
    pub fn empty() -> Self {
        Graph::Empty
    }

    /// Creates a graph containing exactly the vertex `v`.
    #[must_use]
    pub fn vertex(v: V) -> Self {
        Graph::Vertex(v)
    }

    /// Overlays `other` onto this graph: the result denotes the union of both
    /// vertex sets and both edge sets. No new edges are introduced.
    #[must_use]
    pub fn overlay(self, other: Graph<V>) -> Self {
        Graph::Overlay(Arc::new(self), Arc::new(other))
    }

    /// Connects this graph to `other`: the result denotes the union of both
    /// graphs plus a directed edge from every vertex of `self` to every
    /// vertex of `other`.
    ///
    /// Connecting a graph to itself (via clone) produces self-loops on every
    /// vertex.
    #[must_use]
    pub fn connect(self, other: Graph<V>) -> Self {
        Graph::Connect(Arc::new(self), Arc::new(other))
    }

    /// Creates a graph with the two vertices `from` and `to` and a single
    /// directed edge between them.
    ///
    /// Built as `vertex(from).connect(vertex(to))`, so the edge is observable
    /// through [`edge_set`](Graph::edge_set).
    #[must_use]
    pub fn edge(from: V, to: V) -> Self {
        Graph::vertex(from).connect(Graph::vertex(to))
    }

    /// Creates an edgeless graph with the given vertices.
    ///
    /// Duplicates and ordering are irrelevant to the denotation: overlay is
    /// commutative and idempotent under set semantics.
    #[must_use]
    pub fn vertices(vs: impl IntoIterator<Item = V>) -> Self {
        let items: Vec<V> = vs.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Graph::Empty, |acc, v| Graph::vertex(v).overlay(acc))
    }

    /// Creates a graph from a list of directed edges.
    #[must_use]
    pub fn edges(es: impl IntoIterator<Item = (V, V)>) -> Self {
        let items: Vec<(V, V)> = es.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Graph::Empty, |acc, (from, to)| {
                Graph::edge(from, to).overlay(acc)
            })
    }

    /// Creates a clique: every vertex has an edge to every vertex listed
    /// after it.
    #[must_use]
    pub fn clique(vs: impl IntoIterator<Item = V>) -> Self {
        let items: Vec<V> = vs.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Graph::Empty, |acc, v| Graph::vertex(v).connect(acc))
    }

    /// Returns `true` if the graph denotes no vertices and no edges.
    ///
    /// No set expansion: a composite is empty exactly when both operands
    /// are, which means exactly when the expression has no `Vertex` leaf.
    /// Walks the tree with the worklist iterator, O(expression size) and
    /// safe on arbitrarily deep expressions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<V: PartialEq> Graph<V> {
    /// Returns `true` if `v` is a vertex of this graph.
    ///
    /// Scans the expression's vertex leaves, O(expression size); does not
    /// build the vertex set and therefore needs only `PartialEq` on `V`.
    #[must_use]
    pub fn contains(&self, v: &V) -> bool {
        self.iter().any(|u| u == v)
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph::Empty
    }
}

impl<V> Drop for Graph<V> {
    // A right-folded builder like `vertices` produces an expression whose
    // depth equals its length; the compiler-generated recursive drop would
    // overflow the stack on such spines. Detach children onto an explicit
    // worklist instead, so teardown runs in constant stack space.
    fn drop(&mut self) {
        let mut stack: Vec<Arc<Graph<V>>> = Vec::new();
        if let Graph::Overlay(l, r) | Graph::Connect(l, r) = self {
            stack.push(std::mem::replace(l, Arc::new(Graph::Empty)));
            stack.push(std::mem::replace(r, Arc::new(Graph::Empty)));
        }
        while let Some(mut node) = stack.pop() {
            if let Some(node) = Arc::get_mut(&mut node) {
                if let Graph::Overlay(l, r) | Graph::Connect(l, r) = node {
                    stack.push(std::mem::replace(l, Arc::new(Graph::Empty)));
                    stack.push(std::mem::replace(r, Arc::new(Graph::Empty)));
                }
            }
            // Shared nodes are only unreferenced here; the last owner's drop
            // walks the subtree iteratively in the same way.
        }
    }
}
