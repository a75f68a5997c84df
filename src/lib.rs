//! # additive
//!
//! additive evaluates left-to-right integer expressions built from `+` and
//! `-`, with named variables and assignment. A line goes through these
//! phases:
//!
//! 1. lexing into tokens, collapsing operator runs such as `---`,
//! 2. validation of the token order,
//! 3. variable substitution,
//! 4. conversion to postfix,
//! 5. stack evaluation with checked `i32` arithmetic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error a line can fail with. Parse errors come
/// from lexing and validation, runtime errors from substitution, conversion
/// and evaluation. [`EvalError`] wraps both.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Provides the messages a shell prints verbatim.
/// - Implements `std::error::Error` so errors compose with `?` and `Box<dyn
///   Error>`.
pub mod error;
/// Runs each phase of expression evaluation.
///
/// This module holds the lexer, validator, resolver, postfix converter and
/// evaluator, plus the engine that drives them for one line.
pub mod interpreter;
/// The line-oriented shell around the interpreter.
///
/// Recognizes `/help`, `/vars` and `/exit`, keeps the variable table for the
/// lifetime of a session and turns every line into something to print.
pub mod session;
/// Checked numeric helpers shared by the evaluation phases.
pub mod util;

pub use error::EvalError;
pub use interpreter::{
    engine::{EvaluationResult, Expression},
    variables::{VariableTable, format_variables},
};

/// Parses and evaluates one line against a variable table.
///
/// If the line is an assignment, the computed value is stored in
/// `variables` and its name is reported in the result. A failing line never
/// modifies the table.
///
/// # Errors
/// Returns an [`EvalError`] describing the first problem found, whether
/// in parsing or in evaluation.
///
/// # Examples
/// ```
/// use additive::{VariableTable, parse_and_evaluate};
///
/// let mut variables = VariableTable::new();
///
/// let result = parse_and_evaluate("4 + 6 - 8", &mut variables).unwrap();
/// assert_eq!(result.value, 2);
///
/// let result = parse_and_evaluate("x = 5", &mut variables).unwrap();
/// assert_eq!(result.to_string(), "x = 5");
///
/// // 'y' is not defined
/// assert!(parse_and_evaluate("y + 1", &mut variables).is_err());
/// ```
pub fn parse_and_evaluate(line: &str,
                          variables: &mut VariableTable)
                          -> Result<EvaluationResult, EvalError> {
    let expression = Expression::parse(line)?;
    Ok(expression.evaluate(variables)?)
}
