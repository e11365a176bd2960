//! # expreval
//!
//! expreval evaluates arithmetic expressions over the four operators
//! `+ - * /` and parenthesized grouping, supplied as whitespace-separated
//! tokens. Two parsing strategies share one LL(1) grammar: the direct
//! variant folds values while parsing and retains no structure, while the
//! AST variant builds an expression tree that can be evaluated, rendered
//! as an indented diagram, or printed back in infix form.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::Expr, error::ParseError, interpreter::parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent the syntactic structure of an expression as a tree. The AST
/// is built by the tree-building parser and traversed by the evaluator and
/// the printer.
///
/// # Responsibilities
/// - Defines the closed set of expression node variants.
/// - Splits operators into adding and multiplying tiers so that a node can
///   never carry an operator of the wrong tier.
/// - Renders nodes back to infix text via `Display`.
pub mod ast;
/// Provides the error type for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression. The grammar itself performs no recovery; a
/// failure is reported once, immediately, to the caller of the parse entry
/// point.
///
/// # Responsibilities
/// - Defines the `ParseError` enum covering every failure mode.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenization, parsing, evaluation, and printing.
///
/// This module ties together the lexer, the two parser variants, the AST
/// evaluator, and the tree printer. It contains everything between a raw
/// input string and a numeric result or rendered diagram.
///
/// # Responsibilities
/// - Tokenizes input into classified tokens.
/// - Parses tokens with a shared two-tier recursive-descent grammar.
/// - Evaluates and renders expression trees.
pub mod interpreter;

/// Evaluates an expression directly, without building a tree.
///
/// The input is tokenized and parsed in a single pass that folds values as
/// operators are consumed. Both tiers associate left-to-right and `*` and
/// `/` bind tighter than `+` and `-`. Division follows IEEE-754 `f64`
/// semantics, so dividing by zero yields an infinity or NaN rather than an
/// error.
///
/// # Errors
/// Returns a [`ParseError`] if the input ends where an operand or closing
/// parenthesis was expected, or if a numeric literal does not parse.
///
/// # Examples
/// ```
/// use expreval::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("( 4 - 2 ) * 3").unwrap(), 6.0);
/// assert_eq!(evaluate("1 / 0").unwrap(), f64::INFINITY);
/// ```
pub fn evaluate(input: &str) -> Result<f64, ParseError> {
    parser::direct::evaluate(input)
}

/// Parses an expression into its AST.
///
/// The returned tree is left-leaning: each same-tier operator attaches the
/// previously accumulated node as its left operand, matching the
/// left-to-right associativity of [`evaluate`].
///
/// # Errors
/// Returns a [`ParseError`] under the same conditions as [`evaluate`];
/// numeric literals are validated here even though the leaf retains the
/// original text.
///
/// # Examples
/// ```
/// use expreval::{eval, parse};
///
/// let tree = parse("1 - 2 + 3").unwrap();
/// assert_eq!(eval(&tree).unwrap(), 2.0);
/// assert_eq!(tree.to_string(), "1 - 2 + 3");
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    parser::builder::parse(input)
}

/// Evaluates a parsed expression tree.
///
/// # Errors
/// Returns [`ParseError::InvalidNumericLiteral`] if a leaf holds text that
/// does not parse as a decimal `f64`. Trees produced by [`parse`] have
/// already been validated and never fail.
///
/// # Examples
/// ```
/// use expreval::{eval, parse};
///
/// let tree = parse("8 / 4 / 2").unwrap();
/// assert_eq!(eval(&tree).unwrap(), 1.0);
/// ```
pub fn eval(expr: &Expr) -> Result<f64, ParseError> {
    interpreter::evaluator::eval(expr)
}

/// Renders a parsed expression tree as an indented diagram.
///
/// # Examples
/// ```
/// use expreval::{parse, render};
///
/// let tree = parse("1 + 2").unwrap();
/// assert_eq!(render(&tree), "(+)\n |___1\n |___2");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    interpreter::printer::render(expr)
}
