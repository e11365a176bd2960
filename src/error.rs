/// Represents all errors that can occur while parsing or evaluating an
/// expression.
///
/// The grammar assumes syntactically correct input; these variants make
/// the two ways that assumption can break visible as structured errors
/// instead of panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Reached the end of input where an operand or the token closing a
    /// parenthesized group was expected.
    UnexpectedEndOfInput,
    /// A token in operand position did not parse as a decimal number.
    InvalidNumericLiteral {
        /// The literal text that failed to parse.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => {
                write!(f, "Error: Unexpected end of input.")
            },

            Self::InvalidNumericLiteral { literal } => {
                write!(f, "Error: '{literal}' is not a valid numeric literal.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
