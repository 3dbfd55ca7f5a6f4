//! Core AST types for Verilog expressions.
//!
//! This crate provides:
//! - `VOperator` - the operator catalog with its arity-class legality table
//! - `VExpr` - the expression node model and arity-checked factory
//! - canonical prefix-form printing (`Display` and `print_expr`)
//! - `AttributeMap` - named auxiliary expressions for a declaration
//!
//! The parser that produces nodes and the passes that consume them
//! live elsewhere; this crate is the shared data structure between
//! them. The only error it can raise is
//! [`vexp_diagnostics::VexpError::InvalidArity`], from the factory
//! constructors.

pub mod attributes;
pub mod expr;
pub mod expr_display;
pub mod op;

pub use attributes::AttributeMap;
pub use expr::{VExpr, VExprRef};
pub use expr_display::print_expr;
pub use op::{Arity, VOperator};
