use logos::Logos;

/// Represents a lexical token in the input expression.
///
/// Every token corresponds to exactly one whitespace-delimited substring
/// of the input. A substring is an operator or parenthesis only when it
/// matches that literal in full; anything else becomes a [`Token::Number`]
/// with its text kept verbatim, without any numeric validation. Glued
/// input such as `1+2` is therefore a single `Number` token, not three
/// tokens; token boundaries must be whitespace-delimited.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Any other whitespace-delimited substring, kept verbatim.
    ///
    /// The catch-all pattern is maximal-munch, so it swallows a whole
    /// non-whitespace run; the operator literals above only win the
    /// single-character tie through their higher priority.
    #[regex(r"\S+", |lex| lex.slice().to_owned(), priority = 1)]
    Number(String),
}

impl Token {
    /// Returns the literal text of the token.
    ///
    /// Operators and parentheses return their fixed literal; a number
    /// returns the substring it was tokenized from.
    ///
    /// # Example
    /// ```
    /// use expreval::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Plus.text(), "+");
    /// assert_eq!(Token::Number("3.5".to_owned()).text(), "3.5");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Divide => "/",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Number(text) => text,
        }
    }
}

/// Splits an input string into its sequence of tokens.
///
/// Runs of whitespace count as a single separator and leading or trailing
/// whitespace is ignored. Tokenization is pure and never fails: the
/// catch-all `Number` pattern accepts any non-whitespace run, so there is
/// no input this function rejects.
///
/// # Example
/// ```
/// use expreval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("( 1 + 2 )");
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0], Token::LeftParen);
/// assert_eq!(tokens[2], Token::Plus);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    // The catch-all pattern makes lexing infallible.
    Token::lexer(input).flatten().collect()
}
