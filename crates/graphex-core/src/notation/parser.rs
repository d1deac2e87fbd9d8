//! Recursive-descent parser for the expression notation.
//!
//! Grammar, with `*` binding tighter than `+` and both left-associative:
//!
//! ```text
//! expr   := term ('+' term)*
//! term   := factor ('*' factor)*
//! factor := '(' ')' | '(' expr ')' | atom
//! ```

use crate::graph::Graph;

use super::ParseError;
use super::lexer::{Lexer, Token, TokenKind};

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    source: &'a str,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source: input,
        }
    }

    /// Parses a complete expression; the whole input must be consumed.
    pub(crate) fn parse_graph<V>(
        &mut self,
        atom: &mut impl FnMut(&str) -> Option<V>,
    ) -> Result<Graph<V>, ParseError> {
        let graph = self.parse_expr(atom)?;
        if self.current.kind == TokenKind::Eof {
            Ok(graph)
        } else {
            Err(ParseError::TrailingInput(self.current.start))
        }
    }

    fn parse_expr<V>(
        &mut self,
        atom: &mut impl FnMut(&str) -> Option<V>,
    ) -> Result<Graph<V>, ParseError> {
        let mut graph = self.parse_term(atom)?;
        while self.current.kind == TokenKind::Plus {
            self.advance();
            graph = graph.overlay(self.parse_term(atom)?);
        }
        Ok(graph)
    }

    fn parse_term<V>(
        &mut self,
        atom: &mut impl FnMut(&str) -> Option<V>,
    ) -> Result<Graph<V>, ParseError> {
        let mut graph = self.parse_factor(atom)?;
        while self.current.kind == TokenKind::Star {
            self.advance();
            graph = graph.connect(self.parse_factor(atom)?);
        }
        Ok(graph)
    }

    fn parse_factor<V>(
        &mut self,
        atom: &mut impl FnMut(&str) -> Option<V>,
    ) -> Result<Graph<V>, ParseError> {
        match self.current.kind {
            TokenKind::LParen => {
                self.advance();
                if self.current.kind == TokenKind::RParen {
                    self.advance();
                    return Ok(Graph::Empty);
                }
                let graph = self.parse_expr(atom)?;
                self.expect(TokenKind::RParen)?;
                Ok(graph)
            }
            TokenKind::Atom => {
                let text = self.token_text(self.current);
                let position = self.current.start;
                let vertex = atom(text).ok_or_else(|| ParseError::InvalidAtom {
                    atom: text.to_owned(),
                    position,
                })?;
                self.advance();
                Ok(Graph::Vertex(vertex))
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEnd(self.current.start)),
            _ => Err(self.unexpected()),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.current.kind == TokenKind::Eof {
            return Err(ParseError::UnexpectedEnd(self.current.start));
        }
        if self.current.kind != kind {
            return Err(self.unexpected());
        }
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn token_text(&self, token: Token) -> &'a str {
        &self.source[token.start..token.end]
    }

    fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken {
            token: self.token_text(self.current).to_owned(),
            position: self.current.start,
        }
    }
}
