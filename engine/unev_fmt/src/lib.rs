//! Unev Fmt - expression renderer.
//!
//! Renders an expression tree to a human-readable string without touching
//! any environment. `format` is total: it never fails and never evaluates.
//!
//! # Parenthesization
//!
//! An operand is wrapped in parentheses iff it is itself a unary or binary
//! node (composite), regardless of true mathematical precedence, applied
//! independently per side. This is a known simplification: chains built from
//! intermediate helper compositions can render with parentheses that strict
//! precedence would not require, and vice versa. The rule is part of the
//! public contract; output strings must not change under a formatting
//! "improvement". Precedence-aware rendering would be a separate, explicitly
//! scoped change.

use unev_expr::Expr;

/// Render an expression to a string.
///
/// Variables render as their bare name, literals as their natural textual
/// representation, tuples as `(a, b)` of recursively rendered elements.
pub fn format(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Composite nodes are the ones the parenthesization rule wraps. Tuples are
/// already self-delimiting and do not count.
fn is_composite(expr: &Expr) -> bool {
    matches!(expr, Expr::Unary { .. } | Expr::Binary { .. })
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Literal(literal) => out.push_str(&literal.to_string()),
        Expr::Variable { name, .. } => out.push_str(name.as_str()),
        Expr::Tuple(elements) => {
            out.push('(');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, element);
            }
            out.push(')');
        }
        Expr::Unary { op, operand } => {
            out.push_str(op.as_symbol());
            write_operand(out, operand);
        }
        Expr::Binary { op, left, right } => {
            write_operand(out, left);
            out.push_str(op.as_symbol());
            write_operand(out, right);
        }
    }
}

/// Render an operand, parenthesized iff composite.
fn write_operand(out: &mut String, operand: &Expr) {
    if is_composite(operand) {
        out.push('(');
        write_expr(out, operand);
        out.push(')');
    } else {
        write_expr(out, operand);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use unev_expr::{var, Expr};

    #[test]
    fn variable_renders_as_its_bare_name() {
        assert_eq!(format(&var("foo")), "foo");
    }

    #[test]
    fn literals_render_naturally() {
        assert_eq!(format(&Expr::literal(7i64)), "7");
        assert_eq!(format(&Expr::literal(-13i64)), "-13");
        assert_eq!(format(&Expr::literal("abc")), "abc");
    }

    #[test]
    fn unary_over_a_leaf_has_no_parentheses() {
        assert_eq!(format(&var("foo").plus()), "+foo");
        assert_eq!(format(&-var("foo")), "-foo");
        assert_eq!(format(&!var("foo")), "~foo");
    }

    #[test]
    fn unary_over_a_composite_parenthesizes() {
        assert_eq!(format(&-(var("foo") + var("bar"))), "-(foo+bar)");
        assert_eq!(format(&-(-var("foo"))), "-(-foo)");
    }

    #[test]
    fn binary_over_leaves_has_no_parentheses() {
        assert_eq!(format(&(var("foo") - var("bar"))), "foo-bar");
        assert_eq!(format(&(7 + var("foo"))), "7+foo");
        assert_eq!(format(&(var("foo") % 7)), "foo%7");
    }

    #[test]
    fn binary_parenthesizes_each_composite_side_independently() {
        let left_composite = (var("a") + var("b")) * var("c");
        assert_eq!(format(&left_composite), "(a+b)*c");

        let right_composite = var("a") * (var("b") - var("c"));
        assert_eq!(format(&right_composite), "a*(b-c)");

        let both = (var("a") + var("b")) * (var("c") - var("d"));
        assert_eq!(format(&both), "(a+b)*(c-d)");
    }

    #[test]
    fn ceil_div_renders_under_the_iff_composite_rule() {
        // (n + d - 1) / d, the documented simplification example
        let d = var("block_size");
        let expr = (12345 + d.clone() - 1) / d;
        assert_eq!(format(&expr), "((12345+block_size)-1)/block_size");
    }

    #[test]
    fn tuples_render_their_elements_plainly() {
        let d = var("block_size");
        let num_blocks = (12345 + d.clone() - 1) / d.clone();
        let shape = Expr::tuple(vec![d, num_blocks]);
        assert_eq!(
            format(&shape),
            "(block_size, ((12345+block_size)-1)/block_size)"
        );
    }

    #[test]
    fn formatting_needs_no_environment_and_never_fails() {
        // unbound variables format fine; only evaluate cares about bindings
        assert_eq!(format(&(var("x") / var("y"))), "x/y");
    }
}
