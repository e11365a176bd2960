use crate::ast::Expr;

/// One level of indentation in the rendered diagram.
const SPACING: &str = " |   ";
/// The connector drawn in front of every node below the root.
const CONNECTOR: &str = " |___";

/// Renders an expression tree as a multi-line indented diagram.
///
/// Each node occupies one line, written in pre-order: a binary node shows
/// its operator as `(+)`, `(-)`, `(*)` or `(/)`, followed by its left and
/// then right child one level deeper; a leaf shows its literal text. A
/// line at depth `d ≥ 1` is prefixed with `" |   "` repeated `d - 1`
/// times and the connector `" |___"`; the root line has no prefix. The
/// format is byte-for-byte the one the demo driver prints.
///
/// # Example
/// ```
/// use expreval::{parse, render};
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(render(&tree),
///            "(+)\n |___2\n |___(*)\n |    |___3\n |    |___4");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    render_node(expr, &mut out, 0);
    out.trim().to_owned()
}

/// Appends one node and its subtree to the output buffer.
///
/// Every line is preceded by a newline; the stray leading newline on the
/// root line is removed by the final trim in [`render`].
fn render_node(expr: &Expr, out: &mut String, depth: usize) {
    out.push('\n');
    if depth > 0 {
        out.push_str(&SPACING.repeat(depth - 1));
        out.push_str(CONNECTOR);
    }

    match expr {
        Expr::Const { text } => out.push_str(text),

        Expr::Adding { left, op, right } => {
            out.push_str(&format!("({op})"));
            render_node(left, out, depth + 1);
            render_node(right, out, depth + 1);
        },

        Expr::Multiplying { left, op, right } => {
            out.push_str(&format!("({op})"));
            render_node(left, out, depth + 1);
            render_node(right, out, depth + 1);
        },
    }
}
