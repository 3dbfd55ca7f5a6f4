//! Display implementations for expression nodes.
//!
//! The built-in rendering is a fully parenthesized prefix form,
//! `(OPNAME child1 child2 )`, used for debugging, logging, and
//! golden-output comparison. Consumers that want a different rendering
//! (e.g. infix with precedence) build it themselves from the
//! inspection interface; this is the only rendering the core ships.
//!
//! Printing is total: it never fails and never panics, even on a tree
//! that bypassed the factory. An operator node carrying a tag with no
//! operator entry in the catalog prints `unknown_op` in place of the
//! name so the rest of the output still comes through.

use std::fmt::{self, Display, Formatter};

use crate::expr::{VExpr, VExprRef};
use crate::op::{Arity, VOperator};

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for VOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn op_name(op: VOperator) -> &'static str {
    // A placeholder tag in operator position means the tree was built
    // behind the factory's back; degrade instead of panicking.
    if op.is_placeholder() {
        "unknown_op"
    } else {
        op.name()
    }
}

impl Display for VExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VExpr::Var { name, special } => {
                let mark = if *special { "#" } else { "" };
                write!(f, "({} {mark}{name}{mark} )", VOperator::MkVar.name())
            }
            VExpr::Constant { base, width, lit } => {
                write!(
                    f,
                    "({} base{base},width{width},{lit} )",
                    VOperator::MkConst.name()
                )
            }
            VExpr::Op { op, children } => {
                write!(f, "({} ", op_name(*op))?;
                for child in children {
                    write!(f, "{child} ")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Render an expression, or `(NULL)` for an absent one.
#[must_use]
pub fn print_expr(expr: Option<&VExprRef>) -> String {
    match expr {
        Some(e) => e.to_string(),
        None => "(NULL)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_variable_form() {
        assert_eq!(VExpr::var("clk").to_string(), "(MK_VAR clk )");
    }

    #[test]
    fn test_special_variable_form() {
        let printed = VExpr::special_var("reset").to_string();
        assert_eq!(printed, "(MK_VAR #reset# )");
        assert!(printed.contains("#reset#"));
    }

    #[test]
    fn test_constant_form() {
        let printed = VExpr::constant(16, 8, "FF").to_string();
        assert!(printed.contains("base16,width8,FF"));
        assert_eq!(printed, "(MK_CONST base16,width8,FF )");
    }

    #[test]
    fn test_binary_composes_child_renderings() {
        let a = VExpr::var("a");
        let b = VExpr::var("b");
        let sum = VExpr::binary(VOperator::Plus, a.clone(), b.clone()).unwrap();
        let expected = format!("(PLUS {a} {b} )");
        assert_eq!(sum.to_string(), expected);
    }

    #[test]
    fn test_nested_tree() {
        let idx = VExpr::binary(
            VOperator::Index,
            VExpr::var("mem"),
            VExpr::constant(10, 4, "3"),
        )
        .unwrap();
        let sel = VExpr::ternary(
            VOperator::Ternary,
            VExpr::special_var("valid"),
            idx,
            VExpr::constant(2, 1, "0"),
        )
        .unwrap();
        assert_eq!(
            sel.to_string(),
            "(TERNARY (MK_VAR #valid# ) (INDEX (MK_VAR mem ) (MK_CONST base10,width4,3 ) ) \
             (MK_CONST base2,width1,0 ) )"
        );
    }

    #[test]
    fn test_empty_concat() {
        let empty = VExpr::nary(VOperator::Concat, vec![]).unwrap();
        assert_eq!(empty.to_string(), "(CONCAT )");
    }

    #[test]
    fn test_null_prints_exactly() {
        assert_eq!(print_expr(None), "(NULL)");
    }

    #[test]
    fn test_print_expr_some() {
        let v = VExpr::var("x");
        assert_eq!(print_expr(Some(&v)), "(MK_VAR x )");
    }

    #[test]
    fn test_printing_is_idempotent() {
        let tree = VExpr::binary(
            VOperator::LAnd,
            VExpr::var("en"),
            VExpr::unary(VOperator::LNeg, VExpr::var("stall")).unwrap(),
        )
        .unwrap();
        assert_eq!(tree.to_string(), tree.to_string());
    }

    #[test]
    fn test_placeholder_in_operator_position_degrades() {
        // Built behind the factory's back; the factory rejects this.
        let corrupt = Arc::new(VExpr::Op {
            op: VOperator::MkVar,
            children: vec![VExpr::var("x")],
        });
        assert_eq!(corrupt.to_string(), "(unknown_op (MK_VAR x ) )");
    }
}
