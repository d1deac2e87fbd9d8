//! Textual notation for graph expressions.
//!
//! Expressions render and parse in an infix algebra: `()` is the empty
//! graph, a bare atom is a vertex, `+` overlays, `*` connects, and `*`
//! binds tighter than `+`. Parentheses appear (and are accepted) only where
//! the expression shape requires them, so rendering then parsing returns a
//! structurally identical expression whenever the vertex rendering itself is
//! atom-safe (no whitespace, `+`, `*`, or parentheses).
//!
//! ```
//! use graphex_core::Graph;
//!
//! let g = Graph::edge("a", "b").overlay(Graph::vertex("c"));
//! assert_eq!(g.to_string(), "a * b + c");
//! assert_eq!("a * b + c".parse::<Graph<String>>().unwrap().to_string(), "a * b + c");
//! ```
//!
//! Unlike iteration, expansion, and the transforms, rendering recurses over
//! the expression tree (and parsing over parenthesis nesting), so the
//! notation is meant for expressions of modest depth - print the derived
//! sets rather than the expression once depth reaches the tens of
//! thousands.

mod lexer;
mod parser;

use std::fmt;
use std::str::FromStr;

use crate::graph::Graph;

use parser::Parser;

/// Error produced when parsing the expression notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input ended where a sub-expression was expected.
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),
    /// A token that cannot start or continue an expression here.
    #[error("unexpected {token:?} at byte {position}")]
    UnexpectedToken {
        /// The offending token text.
        token: String,
        /// Byte offset of the token in the input.
        position: usize,
    },
    /// The vertex reader rejected an atom.
    #[error("invalid vertex atom {atom:?} at byte {position}")]
    InvalidAtom {
        /// The rejected atom text.
        atom: String,
        /// Byte offset of the atom in the input.
        position: usize,
    },
    /// A complete expression was parsed but input remained.
    #[error("trailing input at byte {0}")]
    TrailingInput(usize),
}

impl<V> Graph<V> {
    /// Parses the expression notation, reading each vertex atom with `atom`.
    ///
    /// `atom` returns `None` to reject an atom, which surfaces as
    /// [`ParseError::InvalidAtom`].
    ///
    /// ```
    /// use graphex_core::Graph;
    ///
    /// let g = Graph::parse_with("1 * 2 + 3", |s| s.parse::<u32>().ok()).unwrap();
    /// assert!(g.has_edge(&1, &2));
    /// ```
    pub fn parse_with(
        input: &str,
        mut atom: impl FnMut(&str) -> Option<V>,
    ) -> Result<Graph<V>, ParseError> {
        Parser::new(input).parse_graph(&mut atom)
    }
}

impl FromStr for Graph<String> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Graph::parse_with(s, |atom| Some(atom.to_owned()))
    }
}

// Precedence levels for rendering: overlay 1, connect 2, atoms 3. Each
// operand is rendered one level up on the right so that nesting against
// associativity keeps its parentheses and round-trips structurally.
const PREC_OVERLAY: u8 = 1;
const PREC_CONNECT: u8 = 2;

impl<V: fmt::Display> Graph<V> {
    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, prec: u8) -> fmt::Result {
        match self {
            Graph::Empty => write!(f, "()"),
            Graph::Vertex(v) => write!(f, "{v}"),
            Graph::Overlay(l, r) => {
                let parens = prec > PREC_OVERLAY;
                if parens {
                    write!(f, "(")?;
                }
                l.fmt_prec(f, PREC_OVERLAY)?;
                write!(f, " + ")?;
                r.fmt_prec(f, PREC_OVERLAY + 1)?;
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
            Graph::Connect(l, r) => {
                let parens = prec > PREC_CONNECT;
                if parens {
                    write!(f, "(")?;
                }
                l.fmt_prec(f, PREC_CONNECT)?;
                write!(f, " * ")?;
                r.fmt_prec(f, PREC_CONNECT + 1)?;
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}
