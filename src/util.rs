/// Checked 32-bit integer helpers.
///
/// Every number that enters or leaves the evaluator goes through these
/// functions, so a value outside `i32` is always reported as
/// [`RuntimeError::IntegerOverflow`](crate::error::RuntimeError::IntegerOverflow)
/// instead of wrapping silently.
pub mod num;
