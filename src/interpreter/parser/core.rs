use crate::{error::ParseError, interpreter::lexer::Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// Ephemeral parser state: a read-only view of the token sequence and a
/// position index into it.
///
/// A cursor exists for the duration of one parse call and is threaded by
/// mutable reference through the recursive-descent functions; there is no
/// global or shared state, so independent parse calls may run concurrently.
/// The position only ever moves forward, which bounds every parse.
#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos:    usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Peeks at the token under the cursor without advancing.
    ///
    /// Returns `None` once the sequence is exhausted. The continuation
    /// loops in `expression` and `term` test this against the expected
    /// operator kinds and only advance on a match, which is how chained
    /// same-tier operators are threaded without recursion.
    #[must_use]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token under the cursor and moves forward by one.
    ///
    /// Returns `None` at the end of the sequence, leaving the position
    /// unchanged.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }
}

/// Parses the text of a token in operand position as a decimal `f64`.
///
/// The lexer classifies every substring that is not an operator literal as
/// a number, so this is also where an operator token that strays into
/// operand position (e.g. `- 3` instead of `-3`) is rejected: its literal
/// fails the numeric parse just like any other malformed number.
pub(in crate::interpreter::parser) fn parse_number(token: &Token) -> ParseResult<f64> {
    let text = token.text();
    text.parse()
        .map_err(|_| ParseError::InvalidNumericLiteral { literal: text.to_owned() })
}
