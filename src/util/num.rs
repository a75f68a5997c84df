use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Parses a decimal literal into an `i32`.
///
/// The lexer only produces digit runs, so the only way this fails is a value
/// that does not fit.
///
/// ## Errors
/// Returns [`RuntimeError::IntegerOverflow`] if the literal is outside the
/// `i32` range or is not a decimal number.
///
/// ## Example
/// ```
/// use additive::{error::RuntimeError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("2147483647"), Ok(i32::MAX));
/// assert!(matches!(parse_literal("2147483648"),
///                  Err(RuntimeError::IntegerOverflow { .. })));
/// ```
pub fn parse_literal(text: &str) -> EvalResult<i32> {
    text.parse().map_err(|_| RuntimeError::IntegerOverflow { value: text.to_string() })
}

/// Adds two values, failing instead of wrapping.
///
/// ## Errors
/// Returns [`RuntimeError::IntegerOverflow`] if the sum is outside `i32`.
pub fn checked_add(lhs: i32, rhs: i32) -> EvalResult<i32> {
    lhs.checked_add(rhs)
       .ok_or_else(|| RuntimeError::IntegerOverflow { value: format!("{lhs} + {rhs}") })
}

/// Subtracts `rhs` from `lhs`, failing instead of wrapping.
///
/// ## Errors
/// Returns [`RuntimeError::IntegerOverflow`] if the difference is outside
/// `i32`.
pub fn checked_sub(lhs: i32, rhs: i32) -> EvalResult<i32> {
    lhs.checked_sub(rhs)
       .ok_or_else(|| RuntimeError::IntegerOverflow { value: format!("{lhs} - {rhs}") })
}
