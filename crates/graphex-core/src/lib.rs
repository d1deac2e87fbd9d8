//! # graphex-core
//!
//! Core layer for Graphex: the algebraic graph type and everything defined
//! over it.
//!
//! Graphs are built from four expression constructors (`Empty`, `Vertex`,
//! `Overlay`, `Connect`) rather than from vertex/edge lists, so every edge is
//! guaranteed to connect vertices that exist in the same expression. There is
//! no way to express a dangling edge.
//!
//! ## Modules
//!
//! - [`graph`] - The [`Graph`] expression type, constructors, and structural queries
//! - [`expand`] - Interpretation of expressions into vertex and edge sets
//! - [`transform`] - Structure-preserving transforms (map, bind, fold)
//! - [`compact`] - Canonicalization into a minimal-shape normal form
//! - [`notation`] - Textual notation: `Display` rendering and parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compact;
pub mod expand;
pub mod graph;
pub mod notation;
pub mod transform;

// Re-export commonly used types at crate root
pub use graph::{Graph, VertexOccurrences};
pub use notation::ParseError;
