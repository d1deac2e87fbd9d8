//! Interpretation of graph expressions into vertex and edge sets.
//!
//! These are the denotation functions: they turn an expression into the
//! concrete sets it stands for. Everything here requires `V: Ord + Clone`,
//! because the results are real ordered set containers; the structural
//! queries in [`crate::graph`] deliberately do not.
//!
//! Like iteration and drop, expansion traverses with explicit worklists
//! rather than recursion: right-folded builders such as
//! [`Graph::vertices`] produce expressions whose depth equals their length,
//! and those are expected inputs, not pathologies.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::graph::Graph;
use crate::graph::iter::Frame;

impl<V: Ord + Clone> Graph<V> {
    /// Returns the set of vertices this expression denotes.
    ///
    /// `Overlay` and `Connect` both union their operands' vertex sets; the
    /// extra edges contributed by `Connect` never introduce vertices of their
    /// own, so this is a plain walk over the vertex leaves.
    #[must_use]
    pub fn vertex_set(&self) -> BTreeSet<V> {
        let out: BTreeSet<V> = self.iter().cloned().collect();
        tracing::trace!(vertices = out.len(), "expanded vertex set");
        out
    }

    /// Returns the set of directed edges this expression denotes.
    ///
    /// Each `Connect` node contributes the full cross product of its
    /// operands' vertex sets, in addition to the operands' own edges. This is
    /// the library's one super-linear operation: the work at a `Connect` node
    /// is |left vertices| x |right vertices|.
    ///
    /// Every returned edge connects vertices that [`vertex_set`] also
    /// returns; the algebra cannot express anything else.
    ///
    /// [`vertex_set`]: Graph::vertex_set
    #[must_use]
    pub fn edge_set(&self) -> BTreeSet<(V, V)> {
        let mut edges = BTreeSet::new();
        self.expand(&mut edges);
        tracing::trace!(edges = edges.len(), "expanded edge set");
        edges
    }

    /// Returns the number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_set().len()
    }

    /// Returns the number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_set().len()
    }

    /// Returns `true` if the denoted edge set contains `from -> to`.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        // Expansion is unavoidable: an edge can arise from a Connect node
        // arbitrarily far above the two Vertex leaves.
        self.edge_set()
            .contains(&(from.clone(), to.clone()))
    }

    /// Accumulates edges into `edges` and returns this expression's vertex
    /// set.
    ///
    /// Post-order worklist evaluation: every node's vertex set lands on a
    /// result stack, so each `Connect` node sees both operand vertex sets
    /// from a single pass, and no recursion depth is consumed however deep
    /// the expression nests.
    pub(crate) fn expand(&self, edges: &mut BTreeSet<(V, V)>) -> BTreeSet<V> {
        let mut work: SmallVec<[Frame<'_, V>; 16]> = SmallVec::new();
        work.push(Frame::Visit(self));
        let mut results: Vec<BTreeSet<V>> = Vec::new();

        while let Some(frame) = work.pop() {
            match frame {
                Frame::Visit(g) => match g {
                    Graph::Empty => results.push(BTreeSet::new()),
                    Graph::Vertex(v) => {
                        let mut s = BTreeSet::new();
                        s.insert(v.clone());
                        results.push(s);
                    }
                    Graph::Overlay(l, r) | Graph::Connect(l, r) => {
                        work.push(Frame::Combine(g));
                        work.push(Frame::Visit(r));
                        work.push(Frame::Visit(l));
                    }
                },
                Frame::Combine(g) => {
                    // A Combine frame pops only after both children were
                    // visited, so both results are present.
                    let rs = results.pop().unwrap();
                    let ls = results.pop().unwrap();
                    if matches!(g, Graph::Connect(_, _)) {
                        for x in &ls {
                            for y in &rs {
                                edges.insert((x.clone(), y.clone()));
                            }
                        }
                    }
                    // Merge the smaller set into the larger one; a spine of
                    // overlays would otherwise rebuild the big set at every
                    // node.
                    let (mut vs, rest) = if ls.len() >= rs.len() {
                        (ls, rs)
                    } else {
                        (rs, ls)
                    };
                    vs.extend(rest);
                    results.push(vs);
                }
            }
        }

        results.pop().unwrap_or_default()
    }
}
