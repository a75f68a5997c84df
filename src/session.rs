use tracing::debug;

use crate::{
    interpreter::variables::{VariableTable, format_variables},
    parse_and_evaluate,
};

/// Text printed for `/help`.
pub const HELP: &str = "Program calculates the expressions like these: 4 + 6 - 8, 2 - 3 - 4 and so \
                        on. It supports both unary and binary minuses. Enter '/exit' to terminate \
                        program. Enter '/vars' to show variables.";
/// Text printed when the session ends.
pub const FAREWELL: &str = "Bye!";
/// Text printed for any other line starting with `/`.
pub const UNSUPPORTED_COMMAND: &str = "Unsupported command";

/// A line starting with `/`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// `/help`
    Help,
    /// `/vars`
    Vars,
    /// `/exit`
    Exit,
    /// Anything else starting with `/`.
    Unsupported(String),
}

impl Command {
    /// Recognizes a command after trimming surrounding whitespace.
    ///
    /// Returns `None` when the line is not a command at all.
    ///
    /// # Examples
    /// ```
    /// use additive::session::Command;
    ///
    /// assert_eq!(Command::parse("  /vars "), Some(Command::Vars));
    /// assert_eq!(Command::parse("/Vars"), Some(Command::Unsupported("/Vars".to_string())));
    /// assert_eq!(Command::parse("x = 1"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }

        Some(match line {
            "/help" => Self::Help,
            "/vars" => Self::Vars,
            "/exit" => Self::Exit,
            other => Self::Unsupported(other.to_string()),
        })
    }
}

/// What the shell should do after one line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Reply {
    /// Print nothing; the line was blank.
    Nothing,
    /// Print this text.
    Output(String),
    /// Stop reading input.
    Exit,
}

/// An interactive session: a variable table plus command handling.
///
/// Each session owns its own table, so separate sessions never see each
/// other's variables.
#[derive(Debug, Default)]
pub struct Session {
    variables: VariableTable,
}

impl Session {
    /// Starts a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Handles one input line.
    ///
    /// Errors never end the session; their message becomes the output.
    ///
    /// # Examples
    /// ```
    /// use additive::session::{Reply, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.handle("x = 5"), Reply::Output("x = 5".to_string()));
    /// assert_eq!(session.handle("x + 3"), Reply::Output("8".to_string()));
    /// assert_eq!(session.handle("   "), Reply::Nothing);
    /// assert_eq!(session.handle("/exit"), Reply::Exit);
    /// ```
    pub fn handle(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Nothing;
        }

        match Command::parse(line) {
            Some(Command::Help) => Reply::Output(HELP.to_string()),
            Some(Command::Vars) => Reply::Output(format_variables(&self.variables)),
            Some(Command::Exit) => Reply::Exit,
            Some(Command::Unsupported(command)) => {
                debug!(command = %command, "unsupported command");
                Reply::Output(UNSUPPORTED_COMMAND.to_string())
            },
            None => match parse_and_evaluate(line, &mut self.variables) {
                Ok(result) => Reply::Output(result.to_string()),
                Err(e) => {
                    debug!(line = line, error = ?e, "evaluation failed");
                    Reply::Output(e.to_string())
                },
            },
        }
    }
}
