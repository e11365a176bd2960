use crate::{
    ast::{AddingOp, Expr, MultiplyingOp},
    error::ParseError,
};

/// Recursively computes the value of an expression tree.
///
/// A leaf parses its literal text as a decimal `f64`; binary nodes
/// evaluate both children and combine them with their operator. The match
/// over the three variants is exhaustive, so there is no defensive
/// fallback value. Arithmetic is IEEE-754 double precision in the same
/// order the direct parser folds, so both strategies produce bit-identical
/// results; division by zero yields an infinity or NaN.
///
/// # Parameters
/// - `expr`: The root of the tree to evaluate.
///
/// # Returns
/// The computed `f64` value.
///
/// # Errors
/// `InvalidNumericLiteral` if a leaf holds text that does not parse as a
/// number. Parser-built trees were validated during parsing and never hit
/// this; it only concerns trees assembled by hand.
///
/// # Example
/// ```
/// use expreval::{eval, parse};
///
/// let tree = parse("2 - 2 * 3").unwrap();
/// assert_eq!(eval(&tree).unwrap(), -4.0);
/// ```
pub fn eval(expr: &Expr) -> Result<f64, ParseError> {
    match expr {
        Expr::Const { text } => {
            text.parse()
                .map_err(|_| ParseError::InvalidNumericLiteral { literal: text.clone() })
        },

        Expr::Adding { left, op, right } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;
            Ok(match op {
                AddingOp::Plus => lhs + rhs,
                AddingOp::Minus => lhs - rhs,
            })
        },

        Expr::Multiplying { left, op, right } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;
            Ok(match op {
                MultiplyingOp::Times => lhs * rhs,
                MultiplyingOp::Divide => lhs / rhs,
            })
        },
    }
}
