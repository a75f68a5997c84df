use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, lexer::Token},
};

/// Rewrites an infix sequence into postfix order.
///
/// `+` and `-` share one precedence and associate to the left, so a single
/// pending operator slot is enough: each operator flushes the one before it.
///
/// ```text
/// 4 + 6 - 8   =>   4 6 + 8 -
/// - 5 + 3     =>   5 - 3 +
/// ```
///
/// # Errors
/// Returns [`RuntimeError::EmptyExpression`] for an empty sequence.
pub fn to_postfix(tokens: &[Token]) -> EvalResult<Vec<Token>> {
    if tokens.is_empty() {
        return Err(RuntimeError::EmptyExpression);
    }

    let mut output = Vec::with_capacity(tokens.len());
    let mut pending: Option<&Token> = None;

    for token in tokens {
        if token.kind.is_additive() {
            if let Some(op) = pending.replace(token) {
                output.push(op.clone());
            }
        } else {
            output.push(token.clone());
        }
    }
    output.extend(pending.cloned());

    Ok(output)
}
