use crate::{
    error::ParseError,
    interpreter::lexer::{Kind, Token},
};

/// Where an assignment writes to, as found by [`validate`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Assignment {
    /// The variable left of `=`.
    pub target:    String,
    /// Index of the first right-hand side token.
    pub rhs_start: usize,
}

/// Checks that a token sequence has the shape of an additive expression.
///
/// Accepted lines look like `operand (op operand)*`, optionally preceded by
/// `variable =`. Runs of operators are allowed; two operands in a row are
/// not. Tokens are checked front to back and the first violation is
/// returned.
///
/// # Parameters
/// - `tokens`: An infix sequence produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The assignment target when the line is an assignment, `None` otherwise.
///
/// # Errors
/// - [`ParseError::UnsupportedToken`] for a token of kind `Unsupported`.
/// - [`ParseError::MultipleAssignments`] for a second `=`.
/// - [`ParseError::InvalidAssignmentTarget`] for an `=` that does not follow
///   a leading variable.
/// - [`ParseError::MissingOperator`] for two adjacent operands.
pub fn validate(tokens: &[Token]) -> Result<Option<Assignment>, ParseError> {
    let mut assignment = None;
    let mut prev: Option<&Token> = None;

    for (index, token) in tokens.iter().enumerate() {
        if token.kind == Kind::Unsupported {
            return Err(ParseError::UnsupportedToken { token: token.text.clone() });
        }

        match (token.kind, prev) {
            (Kind::Equals, _) if assignment.is_some() => {
                return Err(ParseError::MultipleAssignments);
            },
            (Kind::Equals, Some(target)) if target.kind == Kind::Variable && index == 1 => {
                assignment = Some(Assignment { target:    target.text.clone(),
                                               rhs_start: index + 1, });
            },
            (Kind::Equals, _) => {
                let found = prev.map_or_else(String::new, |p| p.text.clone());
                return Err(ParseError::InvalidAssignmentTarget { found: found + &token.text });
            },
            (Kind::Number | Kind::Variable, Some(p)) if !p.kind.is_operator() => {
                return Err(ParseError::MissingOperator { found: format!("{}{}", p.text,
                                                                        token.text) });
            },
            _ => {},
        }

        prev = Some(token);
    }

    Ok(assignment)
}
