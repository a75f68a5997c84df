use logos::Logos;

use crate::error::ParseError;

/// Classification of a single token.
///
/// [`Kind::Unsupported`] only exists while characters are being classified;
/// [`tokenize`] never emits it and the validator rejects it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    /// A decimal literal, e.g. `42`.
    Number,
    /// A variable name made of ASCII letters, e.g. `count`.
    Variable,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `=`
    Equals,
    /// Anything else.
    Unsupported,
}

impl Kind {
    /// Classifies one character.
    ///
    /// # Examples
    /// ```
    /// use additive::interpreter::lexer::Kind;
    ///
    /// assert_eq!(Kind::of_char('7'), Kind::Number);
    /// assert_eq!(Kind::of_char('q'), Kind::Variable);
    /// assert_eq!(Kind::of_char('*'), Kind::Unsupported);
    /// ```
    #[must_use]
    pub const fn of_char(c: char) -> Self {
        match c {
            '0'..='9' => Self::Number,
            'a'..='z' | 'A'..='Z' => Self::Variable,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '=' => Self::Equals,
            _ => Self::Unsupported,
        }
    }

    /// `+`, `-` and `=` count as operators; an operand must follow one of
    /// them.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Equals)
    }

    /// The operators that take part in evaluation.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

/// A classified fragment of one input line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// What the fragment is.
    pub kind: Kind,
    /// The fragment itself; normalized operators hold a single character.
    pub text: String,
}

impl Token {
    /// Creates a token of any kind.
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates a `Number` token holding `value`.
    #[must_use]
    pub fn number(value: i32) -> Self {
        Self::new(Kind::Number, value.to_string())
    }

    /// Creates a normalized operator token.
    ///
    /// Returns `None` unless `kind` is `Plus`, `Minus` or `Equals`.
    ///
    /// # Examples
    /// ```
    /// use additive::interpreter::lexer::{Kind, Token};
    ///
    /// assert_eq!(Token::operator(Kind::Minus).map(|t| t.text), Some("-".to_string()));
    /// assert_eq!(Token::operator(Kind::Number), None);
    /// ```
    #[must_use]
    pub fn operator(kind: Kind) -> Option<Self> {
        let symbol = match kind {
            Kind::Plus => "+",
            Kind::Minus => "-",
            Kind::Equals => "=",
            Kind::Number | Kind::Variable | Kind::Unsupported => return None,
        };
        Some(Self::new(kind, symbol))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Maximal runs of characters belonging to one group.
///
/// Spaces separate runs but are never part of one, so `"+ +"` gives two runs
/// while `"++"` gives one. Any other whitespace is an invalid character.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
enum Run {
    /// Digits.
    #[regex(r"[0-9]+")]
    Digits,
    /// ASCII letters.
    #[regex(r"[a-zA-Z]+")]
    Letters,
    /// Any mix of `+` and `-`.
    #[regex(r"[+-]+")]
    Signs,
    /// One or more `=`.
    #[regex(r"=+")]
    Equals,
}

/// Splits a line into normalized tokens.
///
/// Consecutive characters of the same group (digits, letters, `+`/`-`, `=`)
/// form one run. Digit and letter runs become `Number` and `Variable` tokens
/// as they are; operator runs are collapsed by [`normalize_operator`].
///
/// No grammar checks happen here; see
/// [`validate`](crate::interpreter::validator::validate).
///
/// # Errors
/// - [`ParseError::InvalidCharacter`] for a character outside the alphabet.
/// - [`ParseError::InvalidOperator`] for an operator run that cannot be
///   normalized.
///
/// # Examples
/// ```
/// use additive::interpreter::lexer::{Kind, tokenize};
///
/// let tokens = tokenize("a---b").unwrap();
/// let kinds: Vec<Kind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [Kind::Variable, Kind::Minus, Kind::Variable]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Run::lexer(line);

    while let Some(run) = lexer.next() {
        let text = lexer.slice();
        let token = match run {
            Ok(Run::Digits) => Token::new(Kind::Number, text),
            Ok(Run::Letters) => Token::new(Kind::Variable, text),
            Ok(Run::Signs | Run::Equals) => {
                Token::operator(normalize_operator(text)?).ok_or_else(|| {
                    ParseError::InvalidOperator { operator: text.to_string() }
                })?
            },
            Err(()) => return Err(invalid_character(text, line)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Collapses a run of operator characters into a single operator.
///
/// - only `=`: `Equals`
/// - only `+`: `Plus`
/// - `+` mixed with `-`: the `+` characters are dropped, then the `-` rule
///   applies
/// - only `-`: `Plus` for an even count, `Minus` for an odd count
///
/// # Errors
/// Returns [`ParseError::InvalidOperator`] for anything else, such as a run
/// mixing `=` with `+`.
///
/// # Examples
/// ```
/// use additive::interpreter::lexer::{Kind, normalize_operator};
///
/// assert_eq!(normalize_operator("---"), Ok(Kind::Minus));
/// assert_eq!(normalize_operator("-+-"), Ok(Kind::Plus));
/// assert_eq!(normalize_operator("=="), Ok(Kind::Equals));
/// assert!(normalize_operator("+=").is_err());
/// ```
pub fn normalize_operator(run: &str) -> Result<Kind, ParseError> {
    if !run.is_empty() && run.chars().all(|c| c == '=') {
        return Ok(Kind::Equals);
    }
    if run.chars().all(|c| c == '+') {
        return Ok(Kind::Plus);
    }
    if run.chars().all(|c| c == '+' || c == '-') {
        let minuses = run.chars().filter(|&c| c == '-').count();
        return Ok(if minuses % 2 == 0 { Kind::Plus } else { Kind::Minus });
    }

    Err(ParseError::InvalidOperator { operator: run.to_string() })
}

fn invalid_character(slice: &str, line: &str) -> ParseError {
    let character = slice.chars()
                         .find(|&c| Kind::of_char(c) == Kind::Unsupported)
                         .or_else(|| slice.chars().next())
                         .unwrap_or_default();
    ParseError::InvalidCharacter { character,
                                   line: line.to_string() }
}
