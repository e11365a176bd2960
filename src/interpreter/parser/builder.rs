use crate::{
    ast::{AddingOp, Expr, MultiplyingOp},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::{Cursor, ParseResult, parse_number},
    },
};

/// Parses an expression into its AST.
///
/// This is the entry point of the tree-building variant. The traversal is
/// identical to the direct variant, but instead of folding values it
/// threads the accumulated node as the left child of each new binary
/// node, producing a left-leaning tree that mirrors the fold order.
/// Tokens remaining after the expression ends are ignored.
///
/// # Parameters
/// - `input`: The expression, tokens separated by whitespace.
///
/// # Returns
/// The root node of the parsed tree.
///
/// # Errors
/// - `UnexpectedEndOfInput` if an operand or group-closing token is
///   missing.
/// - `InvalidNumericLiteral` if a token in operand position is not a
///   decimal number. Validation happens here so that a tree returned from
///   this function always evaluates without error.
pub fn parse(input: &str) -> ParseResult<Expr> {
    let tokens = tokenize(input);
    let mut cursor = Cursor::new(&tokens);
    parse_expression(&mut cursor)
}

/// Parses an adding-tier chain into left-leaning `Expr::Adding` nodes.
///
/// Grammar: `expression := term ( ("+" | "-") term )*`
fn parse_expression(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut node = parse_term(cursor)?;
    loop {
        let op = match cursor.current() {
            Some(Token::Plus) => AddingOp::Plus,
            Some(Token::Minus) => AddingOp::Minus,
            _ => break,
        };
        cursor.advance();
        let right = parse_term(cursor)?;
        node = Expr::Adding { left: Box::new(node),
                              op,
                              right: Box::new(right) };
    }
    Ok(node)
}

/// Parses a multiplying-tier chain into left-leaning `Expr::Multiplying`
/// nodes.
///
/// Grammar: `term := factor ( ("*" | "/") factor )*`
fn parse_term(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let mut node = parse_factor(cursor)?;
    loop {
        let op = match cursor.current() {
            Some(Token::Times) => MultiplyingOp::Times,
            Some(Token::Divide) => MultiplyingOp::Divide,
            _ => break,
        };
        cursor.advance();
        let right = parse_factor(cursor)?;
        node = Expr::Multiplying { left: Box::new(node),
                                   op,
                                   right: Box::new(right) };
    }
    Ok(node)
}

/// Parses a factor: a numeric leaf or a parenthesized sub-expression.
///
/// Grammar: `factor := NUMBER | "(" expression ")"`
///
/// A numeric leaf keeps its literal text verbatim but is validated as a
/// decimal `f64` before the node is built. A parenthesized group returns
/// the sub-expression's root as-is (no wrapper node) after consuming one
/// token for the closing parenthesis, whose kind is not inspected; only
/// end of input at that point is an error.
fn parse_factor(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    match cursor.advance() {
        Some(Token::LeftParen) => {
            let node = parse_expression(cursor)?;
            if cursor.advance().is_none() {
                return Err(ParseError::UnexpectedEndOfInput);
            }
            Ok(node)
        },
        Some(token) => {
            parse_number(token)?;
            Ok(Expr::Const { text: token.text().to_owned() })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
