use std::fmt;

/// Represents an operator of the adding tier.
///
/// Adding-tier operators bind loosest and associate left-to-right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddingOp {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
}

/// Represents an operator of the multiplying tier.
///
/// Multiplying-tier operators bind tighter than the adding tier and
/// associate left-to-right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MultiplyingOp {
    /// Multiplication (`*`)
    Times,
    /// Division (`/`)
    Divide,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of three variants: a leaf holding the literal
/// text of a number, and one binary variant per precedence tier. Each
/// binary variant carries its own operator enum, so an adding node can
/// never hold `*` or `/` and a multiplying node can never hold `+` or `-`.
/// Every node exclusively owns its children; the tree is acyclic and
/// finite by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric leaf. The literal text is kept verbatim; its value is
    /// parsed on demand during evaluation.
    Const {
        /// The literal text of the number, exactly as tokenized.
        text: String,
    },
    /// A binary node of the adding tier (`+` or `-`).
    Adding {
        /// Left operand.
        left:  Box<Self>,
        /// The adding-tier operator.
        op:    AddingOp,
        /// Right operand.
        right: Box<Self>,
    },
    /// A binary node of the multiplying tier (`*` or `/`).
    Multiplying {
        /// Left operand.
        left:  Box<Self>,
        /// The multiplying-tier operator.
        op:    MultiplyingOp,
        /// Right operand.
        right: Box<Self>,
    },
}

impl fmt::Display for AddingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for MultiplyingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Times => "*",
            Self::Divide => "/",
        };
        write!(f, "{operator}")
    }
}

/// Binding strength of a node, ordered loosest to tightest.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    Adding,
    Multiplying,
    Leaf,
}

const fn tier(expr: &Expr) -> Tier {
    match expr {
        Expr::Const { .. } => Tier::Leaf,
        Expr::Adding { .. } => Tier::Adding,
        Expr::Multiplying { .. } => Tier::Multiplying,
    }
}

/// Writes one operand, parenthesizing it when leaving the parentheses out
/// would change how the text re-parses.
///
/// A left operand only needs parentheses when it binds looser than its
/// parent. A right operand also needs them at equal tiers, because the
/// grammar is left-associative: `8 / ( 4 / 2 )` must not print as
/// `8 / 4 / 2`.
fn write_operand(f: &mut fmt::Formatter<'_>,
                 operand: &Expr,
                 parent: &Tier,
                 is_right: bool)
                 -> fmt::Result {
    let needs_paren = if is_right {
        tier(operand) <= *parent
    } else {
        tier(operand) < *parent
    };

    if needs_paren {
        write!(f, "( {operand} )")
    } else {
        write!(f, "{operand}")
    }
}

impl fmt::Display for Expr {
    /// Renders the expression in infix form, with tokens separated by
    /// single spaces and parentheses only where re-parsing requires them.
    /// The output tokenizes and parses back to an equivalent tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const { text } => f.write_str(text),
            Self::Adding { left, op, right } => {
                write_operand(f, left, &Tier::Adding, false)?;
                write!(f, " {op} ")?;
                write_operand(f, right, &Tier::Adding, true)
            },
            Self::Multiplying { left, op, right } => {
                write_operand(f, left, &Tier::Multiplying, false)?;
                write!(f, " {op} ")?;
                write_operand(f, right, &Tier::Multiplying, true)
            },
        }
    }
}
