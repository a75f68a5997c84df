#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents all errors that can occur during substitution and evaluation.
pub enum RuntimeError {
    /// A variable was used before anything was assigned to it.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// There was nothing to evaluate, e.g. the right side of `x =`.
    EmptyExpression,
    /// The postfix sequence did not reduce to exactly one value.
    MalformedExpression {
        /// What went wrong while reducing the sequence.
        details: String,
    },
    /// A literal or a computed value does not fit a signed 32-bit integer.
    IntegerOverflow {
        /// The literal text or the operation that overflowed.
        value: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable {name}"),
            Self::EmptyExpression => write!(f, "Right side of an expression should not be empty"),
            Self::MalformedExpression { details } => {
                write!(f, "Can't process an expression: {details}")
            },
            Self::IntegerOverflow { value } => write!(f,
                                                      "Numbers in an expression should be in range of Integer type: -2^31 ... 2^31-1, got: {value}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
