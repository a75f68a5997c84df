/// Parsing errors.
///
/// Defines all error types that can occur while a line is split into tokens
/// and while the token sequence is checked for a valid additive shape.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised after a line has been parsed:
/// variable substitution, postfix conversion and evaluation.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, PartialEq, Eq)]
/// The single error type returned by [`crate::parse_and_evaluate`].
///
/// Wraps whichever phase failed. The display form is the message of the
/// wrapped error, unchanged, so a shell can print it verbatim.
pub enum EvalError {
    /// The line could not be tokenized or validated.
    Parse(ParseError),
    /// The line parsed, but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
