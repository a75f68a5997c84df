use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::lexer::{Kind, Token},
    util::num,
};

/// Result type used by the evaluation phases.
///
/// Substitution, postfix conversion and evaluation return either a value of
/// type `T` or a `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The value the operand stack starts with.
///
/// It lets a leading `+`/`-` evaluate as `0 + x` / `0 - x`.
pub const SEED: i32 = 0;

/// Evaluates a postfix sequence.
///
/// Numbers are pushed onto a stack seeded with [`SEED`]. An operator pops the
/// top value (`operand1`) and the one below it (`operand2`) and pushes
/// `operand2 - operand1` or `operand2 + operand1`, which keeps the written
/// left-to-right order for subtraction.
///
/// The result is the single value left on the stack. A seed that no operator
/// consumed is not counted, so a lone operand evaluates to itself.
///
/// # Errors
/// - [`RuntimeError::MalformedExpression`] if an operator finds fewer than two
///   values, a token is neither a number nor `+`/`-`, or the stack does not
///   reduce to a single value.
/// - [`RuntimeError::IntegerOverflow`] if a literal or any intermediate value
///   leaves the `i32` range.
///
/// # Examples
/// ```
/// use additive::interpreter::{
///     evaluator::eval_postfix,
///     lexer::{Kind, Token},
/// };
///
/// // - 5 + 3
/// let minus = Token::operator(Kind::Minus).unwrap();
/// let plus = Token::operator(Kind::Plus).unwrap();
/// let postfix = [Token::number(5), minus, Token::number(3), plus];
/// assert_eq!(eval_postfix(&postfix), Ok(-2));
/// ```
pub fn eval_postfix(tokens: &[Token]) -> EvalResult<i32> {
    let mut stack = vec![SEED];
    let mut seed_consumed = false;

    for token in tokens {
        match token.kind {
            Kind::Number => stack.push(num::parse_literal(&token.text)?),
            Kind::Plus | Kind::Minus => {
                let consumes_seed = stack.len() == 2;
                let (Some(operand1), Some(operand2)) = (stack.pop(), stack.pop()) else {
                    return Err(malformed(format!("operator '{token}' is missing an operand")));
                };
                seed_consumed |= consumes_seed;
                let result = if token.kind == Kind::Minus {
                    num::checked_sub(operand2, operand1)?
                } else {
                    num::checked_add(operand2, operand1)?
                };
                trace!(operand2 = operand2, op = %token, operand1 = operand1, result = result,
                       "applied operator");
                stack.push(result);
            },
            _ => return Err(malformed(format!("unexpected token '{token}'"))),
        }
    }

    let values = if seed_consumed { &stack[..] } else { &stack[1..] };
    match values {
        [value] => Ok(*value),
        [] => Err(malformed("no value to return".to_string())),
        _ => Err(malformed(format!("{} values left without an operator", values.len()))),
    }
}

fn malformed(details: String) -> RuntimeError {
    RuntimeError::MalformedExpression { details }
}
