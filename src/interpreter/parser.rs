/// Shared parser state.
///
/// Contains the token cursor both parser variants advance through, and
/// the common result alias.
pub mod core;

/// Direct-evaluation parsing.
///
/// Folds numeric values while parsing; no tree is retained.
pub mod direct;

/// AST-building parsing.
///
/// Walks the same grammar as the direct variant but constructs an
/// expression tree instead of folding values.
pub mod builder;
