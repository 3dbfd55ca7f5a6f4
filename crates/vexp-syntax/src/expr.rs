//! Expression AST nodes.
//!
//! A `VExpr` is a constant, a variable, or an operator applied to an
//! ordered sequence of children. Operator nodes are built through the
//! arity-checked factory constructors, which consult the legality
//! table in [`crate::op`] exactly once; every later traversal can then
//! assume the child count matches the operator's arity class.
//!
//! Nodes are immutable after construction and children are shared
//! through `Arc`, so common subexpressions may appear in several trees
//! and completed subtrees are safe to hand to concurrent read-only
//! consumers. Trees are acyclic by construction: a node can only refer
//! to children that already existed when it was built.

use std::sync::Arc;

use smol_str::SmolStr;
use vexp_diagnostics::{VexpError, VexpResult};

use crate::op::{Arity, VOperator};

/// Shared handle to an immutable expression node.
pub type VExprRef = Arc<VExpr>;

/// An expression node.
///
/// The enum is public so consumers can match exhaustively; the
/// factory constructors remain the only way to build an `Op` node
/// that honors the operator/arity contract.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VExpr {
    /// A bit-vector literal. The literal text is stored verbatim and
    /// never validated against `base` or `width` here.
    Constant {
        /// Numeric base the literal was written in (2, 8, 10, 16, ...)
        base: u32,
        /// Bit width of the literal
        width: u32,
        /// Literal text, e.g. `FF` for an 8-bit hex constant
        lit: SmolStr,
    },
    /// A named reference. `special` marks identifiers written with the
    /// `#name#` surface syntax (reserved names); it affects only the
    /// printed form.
    Var { name: SmolStr, special: bool },
    /// An operator applied to its children, in source order.
    Op {
        op: VOperator,
        children: Vec<VExprRef>,
    },
}

impl VExpr {
    // ------------------------------------------------------------------
    // Factory
    // ------------------------------------------------------------------

    /// Create a constant leaf. Always succeeds.
    #[must_use]
    pub fn constant(base: u32, width: u32, lit: impl Into<SmolStr>) -> VExprRef {
        Arc::new(VExpr::Constant {
            base,
            width,
            lit: lit.into(),
        })
    }

    /// Create an ordinary variable leaf.
    #[must_use]
    pub fn var(name: impl Into<SmolStr>) -> VExprRef {
        Arc::new(VExpr::Var {
            name: name.into(),
            special: false,
        })
    }

    /// Create a `#name#` special variable leaf.
    #[must_use]
    pub fn special_var(name: impl Into<SmolStr>) -> VExprRef {
        Arc::new(VExpr::Var {
            name: name.into(),
            special: true,
        })
    }

    fn op_node(op: VOperator, arity: Arity, children: Vec<VExprRef>) -> VexpResult<VExprRef> {
        if op.supports(arity) {
            Ok(Arc::new(VExpr::Op { op, children }))
        } else {
            Err(VexpError::InvalidArity {
                op: op.name(),
                arity: arity.name(),
            })
        }
    }

    /// Apply a unary operator to one child.
    pub fn unary(op: VOperator, child: VExprRef) -> VexpResult<VExprRef> {
        Self::op_node(op, Arity::Unary, vec![child])
    }

    /// Apply a binary operator to two children, in source order.
    pub fn binary(op: VOperator, lhs: VExprRef, rhs: VExprRef) -> VexpResult<VExprRef> {
        Self::op_node(op, Arity::Binary, vec![lhs, rhs])
    }

    /// Apply a ternary operator to three children, in source order.
    pub fn ternary(
        op: VOperator,
        a: VExprRef,
        b: VExprRef,
        c: VExprRef,
    ) -> VexpResult<VExprRef> {
        Self::op_node(op, Arity::Ternary, vec![a, b, c])
    }

    /// Apply an n-ary operator (function application, concatenation)
    /// to any number of children, including none.
    pub fn nary(op: VOperator, children: Vec<VExprRef>) -> VexpResult<VExprRef> {
        Self::op_node(op, Arity::Nary, children)
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// Is this a constant leaf?
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, VExpr::Constant { .. })
    }

    /// Is this a variable leaf?
    #[must_use]
    pub const fn is_var(&self) -> bool {
        matches!(self, VExpr::Var { .. })
    }

    /// Is this an operator node?
    #[must_use]
    pub const fn is_op(&self) -> bool {
        matches!(self, VExpr::Op { .. })
    }

    /// Constant payload as `(base, width, literal)`, if a constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<(u32, u32, &str)> {
        match self {
            VExpr::Constant { base, width, lit } => Some((*base, *width, lit.as_str())),
            _ => None,
        }
    }

    /// Variable payload as `(name, special)`, if a variable.
    #[must_use]
    pub fn as_var(&self) -> Option<(&str, bool)> {
        match self {
            VExpr::Var { name, special } => Some((name.as_str(), *special)),
            _ => None,
        }
    }

    /// The operator tag, if an operator node.
    #[must_use]
    pub const fn op(&self) -> Option<VOperator> {
        match self {
            VExpr::Op { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// Children in source order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[VExprRef] {
        match self {
            VExpr::Op { children, .. } => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_construction() {
        let c = VExpr::constant(16, 8, "FF");
        assert!(c.is_constant());
        assert_eq!(c.as_constant(), Some((16, 8, "FF")));
        assert!(c.children().is_empty());

        let v = VExpr::var("clk");
        assert_eq!(v.as_var(), Some(("clk", false)));

        let s = VExpr::special_var("reset");
        assert_eq!(s.as_var(), Some(("reset", true)));
        assert!(s.op().is_none());
    }

    #[test]
    fn test_factory_child_counts() {
        let a = VExpr::var("a");
        let b = VExpr::var("b");
        let c = VExpr::var("c");

        let u = VExpr::unary(VOperator::BNeg, a.clone()).unwrap();
        assert_eq!(u.children().len(), 1);
        assert_eq!(u.op(), Some(VOperator::BNeg));

        let bin = VExpr::binary(VOperator::Plus, a.clone(), b.clone()).unwrap();
        assert_eq!(bin.children().len(), 2);

        let t = VExpr::ternary(VOperator::Ternary, a.clone(), b.clone(), c.clone()).unwrap();
        assert_eq!(t.children().len(), 3);

        let n = VExpr::nary(VOperator::Concat, vec![a, b, c]).unwrap();
        assert_eq!(n.children().len(), 3);
    }

    #[test]
    fn test_child_order_preserved() {
        let lhs = VExpr::var("lhs");
        let rhs = VExpr::var("rhs");
        let node = VExpr::binary(VOperator::Minus, lhs.clone(), rhs.clone()).unwrap();
        assert_eq!(node.children()[0], lhs);
        assert_eq!(node.children()[1], rhs);
    }

    #[test]
    fn test_every_tag_against_every_factory() {
        let a = || VExpr::var("a");
        for &op in VOperator::ALL {
            let unary = VExpr::unary(op, a());
            assert_eq!(unary.is_ok(), op.supports(Arity::Unary), "{}", op.name());

            let binary = VExpr::binary(op, a(), a());
            assert_eq!(binary.is_ok(), op.supports(Arity::Binary), "{}", op.name());

            let ternary = VExpr::ternary(op, a(), a(), a());
            assert_eq!(ternary.is_ok(), op.supports(Arity::Ternary), "{}", op.name());

            let nary = VExpr::nary(op, vec![a()]);
            assert_eq!(nary.is_ok(), op.supports(Arity::Nary), "{}", op.name());
        }
    }

    #[test]
    fn test_invalid_arity_error() {
        let a = VExpr::var("a");
        let b = VExpr::var("b");
        let c = VExpr::var("c");
        let err = VExpr::ternary(VOperator::Plus, a, b, c).unwrap_err();
        assert_eq!(
            err,
            VexpError::InvalidArity {
                op: "PLUS",
                arity: "ternary",
            }
        );
    }

    #[test]
    fn test_dual_arity_forms_are_distinct_nodes() {
        let a = VExpr::var("a");
        let b = VExpr::var("b");
        let negate = VExpr::unary(VOperator::Minus, a.clone()).unwrap();
        let subtract = VExpr::binary(VOperator::Minus, a, b).unwrap();
        assert_eq!(negate.op(), subtract.op());
        assert_ne!(negate.children().len(), subtract.children().len());
    }

    #[test]
    fn test_niladic_function_application() {
        let call = VExpr::nary(VOperator::FunctionApp, vec![]).unwrap();
        assert!(call.is_op());
        assert!(call.children().is_empty());
    }

    #[test]
    fn test_placeholders_rejected_everywhere() {
        for op in [VOperator::MkConst, VOperator::MkVar] {
            assert!(VExpr::unary(op, VExpr::var("x")).is_err());
            assert!(VExpr::binary(op, VExpr::var("x"), VExpr::var("y")).is_err());
            assert!(VExpr::nary(op, vec![]).is_err());
        }
    }

    #[test]
    fn test_shared_subexpression() {
        let shared = VExpr::var("shared");
        let left = VExpr::unary(VOperator::BAnd, shared.clone()).unwrap();
        let right = VExpr::unary(VOperator::BOr, shared.clone()).unwrap();
        assert!(Arc::ptr_eq(&left.children()[0], &right.children()[0]));
    }
}
