/// The lexer module splits a line into tokens.
///
/// Characters are grouped into runs (digits, letters, `+`/`-`, `=`) and each
/// run becomes one token. Operator runs are normalized, so `---` is a single
/// minus and `--` a single plus.
pub mod lexer;
/// The validator module checks the shape of a token sequence.
///
/// Operands must be separated by operators and at most one assignment may
/// appear, directly after a leading variable.
pub mod validator;
/// Variable substitution.
pub mod resolver;
/// Infix to postfix conversion for left-associative `+` and `-`.
pub mod postfix;
/// The evaluator module reduces a postfix sequence to a single `i32`.
///
/// # Responsibilities
/// - Runs the operand stack, seeded with a dummy zero for unary operators.
/// - Reports malformed sequences and overflowing values.
pub mod evaluator;
/// Variable storage shared across lines of a session.
pub mod variables;
/// The engine module ties the phases together for one input line.
///
/// # Responsibilities
/// - Parses a line into an [`engine::Expression`].
/// - Evaluates the whole line or the right side of an assignment.
/// - Writes the assigned value back into the caller's variable table.
pub mod engine;
