use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::{EvalResult, eval_postfix},
        lexer::{Kind, Token, tokenize},
        postfix::to_postfix,
        resolver::substitute,
        validator::{Assignment, validate},
        variables::VariableTable,
    },
    util::num,
};

/// One parsed input line, in infix form.
///
/// Created by [`Expression::parse`]; nothing of it outlives the line except
/// what [`Expression::evaluate`] writes into the variable table.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Expression {
    infix:      Vec<Token>,
    assignment: Option<Assignment>,
}

/// Outcome of evaluating one line.
///
/// Displays as `value`, or as `name = value` for an assignment.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EvaluationResult {
    /// The computed value.
    pub value:             i32,
    /// The variable the value was stored in, if the line was an assignment.
    pub assigned_variable: Option<String>,
}

impl std::fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.assigned_variable {
            Some(name) => write!(f, "{name} = {}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Expression {
    /// Tokenizes and validates a line.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] found by the lexer, or failing that
    /// by the validator.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let infix = tokenize(line)?;
        let assignment = validate(&infix)?;
        debug!(line = line, infix = %join(&infix), target = ?assignment.as_ref().map(|a| &a.target),
               "parsed expression");

        Ok(Self { infix, assignment })
    }

    /// The full infix token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.infix
    }

    /// The variable this line assigns to, if any.
    #[must_use]
    pub fn assignment_target(&self) -> Option<&str> {
        self.assignment.as_ref().map(|a| a.target.as_str())
    }

    /// The tokens that get evaluated: the right-hand side of an assignment,
    /// otherwise the whole line.
    #[must_use]
    pub fn operands(&self) -> &[Token] {
        self.assignment
            .as_ref()
            .map_or(&self.infix[..], |a| &self.infix[a.rhs_start..])
    }

    /// Computes the value of the line and performs its assignment.
    ///
    /// A right-hand side made of a single literal is used as is. Everything
    /// else goes through substitution, postfix conversion and evaluation.
    /// The table is only written after the value has been computed, so a
    /// failed line leaves it untouched.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`](crate::error::RuntimeError) if a variable is
    /// undefined, the expression is empty or malformed, or a value overflows.
    pub fn evaluate(&self, variables: &mut VariableTable) -> EvalResult<EvaluationResult> {
        let value = match (&self.assignment, self.operands()) {
            (Some(_), [literal]) if literal.kind == Kind::Number => {
                num::parse_literal(&literal.text)?
            },
            (_, operands) => compute(operands, variables)?,
        };

        let assigned_variable = self.assignment.as_ref().map(|a| a.target.clone());
        if let Some(name) = &assigned_variable {
            debug!(name = %name, value = value, "assigned variable");
            variables.insert(name.clone(), value);
        }

        Ok(EvaluationResult { value,
                              assigned_variable })
    }
}

fn compute(tokens: &[Token], variables: &VariableTable) -> EvalResult<i32> {
    let substituted = substitute(tokens, variables)?;
    let postfix = to_postfix(&substituted)?;
    debug!(postfix = %join(&postfix), "converted to postfix");

    eval_postfix(&postfix)
}

fn join(tokens: &[Token]) -> String {
    tokens.iter()
          .map(|t| t.text.as_str())
          .collect::<Vec<_>>()
          .join(" ")
}
