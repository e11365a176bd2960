/// The lexer module tokenizes input for the parsers.
///
/// The lexer splits the raw input string on runs of whitespace and
/// classifies each resulting substring as exactly one token. This is the
/// first stage of evaluation and the only place the input text is read.
///
/// # Responsibilities
/// - Converts the input string into a sequence of classified tokens.
/// - Retains the verbatim text of numeric literals.
/// - Never fails; malformed literals surface later during parsing.
pub mod lexer;
/// The parser module consumes tokens with a shared two-tier grammar.
///
/// Both parser variants walk the same LL(1) `expression → term → factor`
/// grammar over a private cursor. The direct variant folds values as it
/// goes; the builder variant constructs an AST for later traversal.
///
/// # Responsibilities
/// - Implements the shared cursor discipline over the token sequence.
/// - Enforces precedence and left associativity structurally.
/// - Reports structured errors for truncated or non-numeric input.
pub mod parser;
/// The evaluator module computes the value of an expression tree.
///
/// A recursive walk over the three node variants: leaves parse their
/// literal text, binary nodes evaluate both children and combine them
/// with IEEE-754 `f64` arithmetic.
pub mod evaluator;
/// The printer module renders an expression tree as an indented diagram.
///
/// Produces the multi-line connector layout used by the demo driver, one
/// node per line, children indented one level below their parent.
pub mod printer;
