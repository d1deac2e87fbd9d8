//! # Graphex
//!
//! Directed graphs that are correct by construction. A [`Graph`] is an
//! algebraic expression built from four constructors - empty, a single
//! vertex, overlay (union), and connect (union plus all left-to-right
//! edges) - so an edge can never mention a vertex the graph does not
//! contain. There is no dangling-edge state to validate away.
//!
//! ## Operations
//!
//! | Group | Operations |
//! | ----- | ---------- |
//! | Construction | [`Graph::empty`], [`Graph::vertex`], [`Graph::overlay`], [`Graph::connect`], [`Graph::edge`], [`Graph::vertices`], [`Graph::edges`], [`Graph::clique`] |
//! | Expansion | [`Graph::vertex_set`], [`Graph::edge_set`], [`Graph::vertex_count`], [`Graph::edge_count`], [`Graph::has_edge`] |
//! | Queries | [`Graph::is_empty`], [`Graph::contains`] |
//! | Transforms | [`Graph::map`], [`Graph::bind`], [`Graph::fold`], [`Graph::iter`] |
//! | Canonicalization | [`Graph::compact`] |
//! | Notation | `Display`, `FromStr`, [`Graph::parse_with`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use graphex::Graph;
//!
//! // "a" and "b" point at "c"; "d" floats alone.
//! let g = Graph::vertices(["a", "b"])
//!     .connect(Graph::vertex("c"))
//!     .overlay(Graph::vertex("d"));
//!
//! assert!(g.has_edge(&"a", &"c"));
//! assert!(g.contains(&"d"));
//! assert_eq!(g.vertex_count(), 4);
//! assert_eq!(g.edge_count(), 2);
//! ```
//!
//! Expressions are immutable and share their sub-expressions, so combinators
//! are O(1) and cloning is cheap. Only the set-producing operations
//! (`vertex_set`, `edge_set`, `compact`, and friends) require `V: Ord`;
//! everything structural needs no more than equality.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export the core API
pub use graphex_core::{Graph, ParseError, VertexOccurrences};
