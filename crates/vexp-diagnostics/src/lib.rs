//! Error types for the vexp expression core.
//!
//! This crate provides:
//! - `VexpError` - the single error the expression core can raise
//! - `VexpResult` - result alias for the fallible constructors
//!
//! The legal operator sets of the node factory are static, so an arity
//! violation is a bug in the calling code (typically an upstream
//! parser), not a runtime data error. The error therefore carries the
//! catalog name of the offending operator and the rejected arity class
//! rather than any source location, and callers are expected to surface
//! it immediately instead of retrying.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the expression core.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum VexpError {
    /// An operator tag was passed to a factory whose legal set
    /// excludes it.
    #[error("operator {op} is not legal in {arity} form")]
    InvalidArity {
        /// Catalog name of the offending operator
        op: &'static str,
        /// Arity class the caller requested
        arity: &'static str,
    },
}

/// Result type for expression-core operations.
pub type VexpResult<T> = Result<T, VexpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arity_message() {
        let err = VexpError::InvalidArity {
            op: "TERNARY",
            arity: "unary",
        };
        assert_eq!(
            format!("{err}"),
            "operator TERNARY is not legal in unary form"
        );
    }
}
