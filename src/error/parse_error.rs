#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents all errors that can occur during lexing or validation.
pub enum ParseError {
    /// The line contains a character outside `[a-zA-Z0-9+\-=]` and whitespace.
    InvalidCharacter {
        /// The first offending character.
        character: char,
        /// The whole input line.
        line:      String,
    },
    /// A run of operator characters could not be reduced to `+`, `-` or `=`.
    InvalidOperator {
        /// The raw operator run.
        operator: String,
    },
    /// A token of the unsupported kind reached the token sequence.
    UnsupportedToken {
        /// The token text.
        token: String,
    },
    /// More than one `=` appeared in the line.
    MultipleAssignments,
    /// An `=` was not directly preceded by a leading variable.
    InvalidAssignmentTarget {
        /// The text around the misplaced `=`.
        found: String,
    },
    /// Two operands appeared without an operator between them.
    MissingOperator {
        /// The two adjacent operands, concatenated.
        found: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, line } => {
                write!(f, "Unsupported character '{character}' in expression: {line}")
            },
            Self::InvalidOperator { operator } => write!(f, "Unsupported operator: {operator}"),
            Self::UnsupportedToken { token } => {
                write!(f, "Can't add a word of unsupported type: {token}")
            },
            Self::MultipleAssignments => {
                write!(f, "Expression can't contain more than one assignment")
            },
            Self::InvalidAssignmentTarget { found } => write!(f,
                                                              "Left side of an assignment operator should be a variable, got: \"{found}\""),
            Self::MissingOperator { found } => write!(f,
                                                      "Left side of a variable or value should be an operator, got: \"{found}\""),
        }
    }
}

impl std::error::Error for ParseError {}
