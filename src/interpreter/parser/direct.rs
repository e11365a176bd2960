use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::{Cursor, ParseResult, parse_number},
    },
};

/// Evaluates an expression in a single pass, folding values while parsing.
///
/// This is the entry point of the direct variant. It tokenizes the input,
/// then descends through the two precedence tiers, combining values as
/// operators are consumed; no tree is built. Tokens remaining after the
/// expression ends are ignored, as in the tree-building variant.
///
/// Grammar: `expression := term ( ("+" | "-") term )*`
///
/// # Parameters
/// - `input`: The expression, tokens separated by whitespace.
///
/// # Returns
/// The folded `f64` value.
///
/// # Errors
/// - `UnexpectedEndOfInput` if an operand or group-closing token is
///   missing.
/// - `InvalidNumericLiteral` if a token in operand position is not a
///   decimal number.
pub fn evaluate(input: &str) -> ParseResult<f64> {
    let tokens = tokenize(input);
    let mut cursor = Cursor::new(&tokens);
    parse_expression(&mut cursor)
}

/// Parses an adding-tier chain, folding left-to-right.
///
/// `a - b + c` accumulates as `(a - b) + c`.
fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut value = parse_term(cursor)?;
    loop {
        match cursor.current() {
            Some(Token::Plus) => {
                cursor.advance();
                value += parse_term(cursor)?;
            },
            Some(Token::Minus) => {
                cursor.advance();
                value -= parse_term(cursor)?;
            },
            _ => break,
        }
    }
    Ok(value)
}

/// Parses a multiplying-tier chain, folding left-to-right.
///
/// Grammar: `term := factor ( ("*" | "/") factor )*`
///
/// Division is plain `f64` division: dividing by zero produces an
/// infinity or NaN, never an error.
fn parse_term(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    let mut value = parse_factor(cursor)?;
    loop {
        match cursor.current() {
            Some(Token::Times) => {
                cursor.advance();
                value *= parse_factor(cursor)?;
            },
            Some(Token::Divide) => {
                cursor.advance();
                value /= parse_factor(cursor)?;
            },
            _ => break,
        }
    }
    Ok(value)
}

/// Parses a factor: a numeric literal or a parenthesized sub-expression.
///
/// Grammar: `factor := NUMBER | "(" expression ")"`
///
/// After a sub-expression, one token is consumed for the closing
/// parenthesis without inspecting its kind; the grammar assumes the input
/// is well formed there. Running out of input instead is reported as
/// `UnexpectedEndOfInput` rather than being dereferenced blindly.
fn parse_factor(cursor: &mut Cursor<'_>) -> ParseResult<f64> {
    match cursor.advance() {
        Some(Token::LeftParen) => {
            let value = parse_expression(cursor)?;
            if cursor.advance().is_none() {
                return Err(ParseError::UnexpectedEndOfInput);
            }
            Ok(value)
        },
        Some(token) => parse_number(token),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
