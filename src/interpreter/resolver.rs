use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        lexer::{Kind, Token},
        variables::VariableTable,
    },
};

/// Replaces every variable with a `Number` token holding its value.
///
/// All other tokens are copied unchanged, so running this on an already
/// substituted sequence returns an identical sequence. The table is only
/// read.
///
/// # Errors
/// Returns [`RuntimeError::UndefinedVariable`] for the first variable that has
/// no entry in `variables`.
///
/// # Examples
/// ```
/// use additive::{
///     VariableTable,
///     interpreter::{lexer::tokenize, resolver::substitute},
/// };
///
/// let mut variables = VariableTable::new();
/// variables.insert("a".to_string(), 4);
///
/// let tokens = substitute(&tokenize("a + 1").unwrap(), &variables).unwrap();
/// assert_eq!(tokens[0].text, "4");
/// ```
pub fn substitute(tokens: &[Token], variables: &VariableTable) -> EvalResult<Vec<Token>> {
    tokens.iter()
          .map(|token| match token.kind {
              Kind::Variable => {
                  variables.get(&token.text)
                           .map(|&value| Token::number(value))
                           .ok_or_else(|| RuntimeError::UndefinedVariable { name: token.text
                                                                                   .clone() })
              },
              _ => Ok(token.clone()),
          })
          .collect()
}
