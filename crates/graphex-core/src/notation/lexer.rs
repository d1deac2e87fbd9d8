//! Lexer for the expression notation.

/// Kinds of token the notation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// The overlay operator `+`.
    Plus,
    /// The connect operator `*`.
    Star,
    /// `(`.
    LParen,
    /// `)`.
    RParen,
    /// A vertex atom: a run of characters that are not whitespace,
    /// operators, or parentheses.
    Atom,
    /// End of input.
    Eof,
}

/// A token with its byte range in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

fn is_atom_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '+' | '*' | '(' | ')')
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn next_token(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }

        let start = self.pos;
        let Some(c) = self.peek() else {
            return Token {
                kind: TokenKind::Eof,
                start,
                end: start,
            };
        };

        let kind = match c {
            '+' => TokenKind::Plus,
            '*' => TokenKind::Star,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => TokenKind::Atom,
        };

        if kind == TokenKind::Atom {
            while let Some(c) = self.peek() {
                if is_atom_char(c) {
                    self.pos += c.len_utf8();
                } else {
                    break;
                }
            }
        } else {
            self.pos += c.len_utf8();
        }

        Token {
            kind,
            start,
            end: self.pos,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            out.push(token.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn test_lex_operators_and_atoms() {
        assert_eq!(
            kinds("a + b * (c)"),
            [
                TokenKind::Atom,
                TokenKind::Plus,
                TokenKind::Atom,
                TokenKind::Star,
                TokenKind::LParen,
                TokenKind::Atom,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_atom_spans() {
        let mut lexer = Lexer::new("  abc12 ");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Atom);
        assert_eq!((token.start, token.end), (2, 7));
    }

    #[test]
    fn test_lex_atoms_stop_at_operators() {
        let mut lexer = Lexer::new("a+b");
        assert_eq!(lexer.next_token().kind, TokenKind::Atom);
        assert_eq!(lexer.next_token().kind, TokenKind::Plus);
        assert_eq!(lexer.next_token().kind, TokenKind::Atom);
    }

    #[test]
    fn test_lex_empty_input() {
        let mut lexer = Lexer::new("   ");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.start, 3);
    }
}
