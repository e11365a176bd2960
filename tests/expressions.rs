use expreval::{ast::Expr, error::ParseError, eval, evaluate, parse, render};

/// Asserts that both parsing strategies produce exactly `expected`.
fn assert_value(src: &str, expected: f64) {
    let direct = evaluate(src).unwrap_or_else(|e| panic!("direct evaluation of {src:?} failed: {e}"));
    assert_eq!(direct, expected, "direct evaluation of {src:?}");

    let tree = parse(src).unwrap_or_else(|e| panic!("parsing {src:?} failed: {e}"));
    let walked = eval(&tree).unwrap_or_else(|e| panic!("evaluating the tree of {src:?} failed: {e}"));
    assert_eq!(walked, expected, "tree evaluation of {src:?}");
}

/// Asserts that both parsing strategies fail with exactly `expected`.
fn assert_error(src: &str, expected: &ParseError) {
    assert_eq!(evaluate(src).unwrap_err(), *expected, "direct evaluation of {src:?}");
    assert_eq!(parse(src).unwrap_err(), *expected, "parsing of {src:?}");
}

/// The demo expressions shipped with the original driver, plus a few
/// decimal and scientific literals.
const SAMPLES: &[&str] = &["1 + 2",
                           "1 - 4",
                           "1 + 2 - 3",
                           "1 - 2 + 3",
                           "2 * 2 - 3",
                           "2 - 2 * 3",
                           "( 4 - 2 ) * 3",
                           "2 / 2 * 3",
                           "3 * 3 + 4 * 4",
                           "1.5 * 2",
                           "2e2 + 1",
                           "10 / 4",
                           "( 1 + 2 ) * ( 3 + 4 )",
                           "1 / 0",
                           "0 / 0"];

#[test]
fn multiplying_tier_binds_tighter() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("2 - 2 * 3", -4.0);
}

#[test]
fn same_tier_operators_fold_left_to_right() {
    assert_value("1 - 2 + 3", 2.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("2 / 2 * 3", 3.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("( 4 - 2 ) * 3", 6.0);
    assert_value("2 * ( 3 + 4 )", 14.0);
}

#[test]
fn deeply_nested_parentheses() {
    assert_value("( ( ( 1 + 1 ) ) )", 2.0);
}

#[test]
fn single_leaf_input() {
    assert_value("42", 42.0);
    assert_eq!(render(&parse("42").unwrap()), "42");
}

#[test]
fn signed_literal_is_one_token() {
    // "-3" is a single whitespace-delimited substring and thus one
    // number token; "- 3" puts an operator in operand position.
    assert_value("-3", -3.0);
    assert_error("- 3",
                 &ParseError::InvalidNumericLiteral { literal: "-".to_owned() });
}

#[test]
fn division_by_zero_follows_float_semantics() {
    assert_eq!(evaluate("1 / 0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("-1 / 0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
}

#[test]
fn both_strategies_are_bit_identical() {
    for src in SAMPLES {
        let direct = evaluate(src).unwrap();
        let walked = eval(&parse(src).unwrap()).unwrap();
        assert_eq!(direct.to_bits(),
                   walked.to_bits(),
                   "strategies disagree on {src:?}");
    }
}

#[test]
fn rendering_is_stable_across_calls() {
    for src in SAMPLES {
        let first = render(&parse(src).unwrap());
        let second = render(&parse(src).unwrap());
        assert_eq!(first, second, "rendering of {src:?} changed between calls");
        assert_eq!(first,
                   render(&parse(src).unwrap()),
                   "third rendering of {src:?} differs");
    }
}

#[test]
fn tree_diagram_shape() {
    assert_eq!(render(&parse("1 + 2").unwrap()), "(+)\n |___1\n |___2");

    // The multiplying subtree sits one level below the adding root.
    assert_eq!(render(&parse("2 + 3 * 4").unwrap()),
               "(+)\n |___2\n |___(*)\n |    |___3\n |    |___4");

    // Left-leaning chain: the earlier operator ends up deeper.
    assert_eq!(render(&parse("1 - 2 + 3").unwrap()),
               "(+)\n |___(-)\n |    |___1\n |    |___2\n |___3");
}

#[test]
fn glued_tokens_are_a_single_number() {
    assert_error("1+2",
                 &ParseError::InvalidNumericLiteral { literal: "1+2".to_owned() });
    assert_error("(1)",
                 &ParseError::InvalidNumericLiteral { literal: "(1)".to_owned() });
}

#[test]
fn truncated_input_is_reported() {
    assert_error("1 +", &ParseError::UnexpectedEndOfInput);
    assert_error("( 1", &ParseError::UnexpectedEndOfInput);
    assert_error("", &ParseError::UnexpectedEndOfInput);
    assert_error("1 * ( 2 + 3", &ParseError::UnexpectedEndOfInput);
}

#[test]
fn trailing_tokens_are_ignored() {
    // The parser stops after one complete expression.
    assert_value("1 2", 1.0);
    assert_value("1 + 2 )", 3.0);
}

#[test]
fn infix_display_reparses_to_the_same_tree() {
    for src in SAMPLES {
        let tree = parse(src).unwrap();
        let reparsed = parse(&tree.to_string()).unwrap_or_else(|e| {
                           panic!("infix form {:?} of {src:?} failed to parse: {e}",
                                  tree.to_string())
                       });
        assert_eq!(render(&tree),
                   render(&reparsed),
                   "infix round-trip of {src:?} changed the tree shape");
    }
}

#[test]
fn hand_built_leaf_is_validated_at_evaluation() {
    let bogus = Expr::Const { text: "banana".to_owned() };
    assert_eq!(eval(&bogus).unwrap_err(),
               ParseError::InvalidNumericLiteral { literal: "banana".to_owned() });
}

#[test]
fn whitespace_runs_count_as_one_separator() {
    assert_value("  2   +\t3  ", 5.0);
    assert_value("\n1\n+\n1\n", 2.0);
}
