use std::fs;

use additive::{
    EvalError, VariableTable,
    error::{ParseError, RuntimeError},
    format_variables, parse_and_evaluate,
    session::{FAREWELL, Reply, Session},
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "session")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for (input, expected) in parse_transcript(&content) {
            count += 1;
            let actual = match session.handle(&input) {
                Reply::Nothing => vec![],
                Reply::Output(text) => vec![text],
                Reply::Exit => vec![FAREWELL.to_string()],
            };
            assert_eq!(actual, expected, "input {input:?} in {path:?}");
        }
    }

    assert!(count > 0, "No transcript lines found in tests/sessions");
}

/// Splits a transcript into `(input, expected output lines)` pairs.
///
/// Inputs start with `>`; every other non-blank line that does not start with
/// `#` is output of the latest input.
fn parse_transcript(content: &str) -> Vec<(String, Vec<String>)> {
    let mut steps: Vec<(String, Vec<String>)> = Vec::new();

    for line in content.lines() {
        if let Some(input) = line.strip_prefix('>') {
            let input = input.strip_prefix(' ').unwrap_or(input);
            steps.push((input.to_string(), Vec::new()));
        } else if !line.trim().is_empty() && !line.starts_with('#') {
            let (_, outputs) = steps.last_mut().expect("output before any input");
            outputs.push(line.to_string());
        }
    }

    steps
}

fn eval(src: &str) -> Result<i32, EvalError> {
    parse_and_evaluate(src, &mut VariableTable::new()).map(|r| r.value)
}

fn assert_value(src: &str, expected: i32) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

#[test]
fn literal_chains_fold_left_to_right() {
    assert_value("4 + 6 - 8", 2);
    assert_value("2 - 3 - 4", -5);
    assert_value("10 - 2 + 3", 11);
    assert_value("1+2+3+4", 10);
    assert_value("  7  ", 7);
}

#[test]
fn operator_runs_are_normalized() {
    assert_value("3 --- 2", 1);
    assert_value("3 ---- 2", 5);
    assert_value("3 +++ 2", 5);
    assert_value("3 +-+ 2", 1);
    assert_value("3 -+- 2", 5);
    assert_value("3---2", 1);
}

#[test]
fn separated_operators_stay_separate_tokens() {
    assert_value("4 + + 2", 6);
    assert_value("4 ++ 2", 6);
}

#[test]
fn leading_operator_applies_to_zero() {
    assert_value("- 5 + 3", -2);
    assert_value("-5", -5);
    assert_value("+5", 5);
    assert_value("--5", 5);
}

#[test]
fn assignment_round_trip() {
    let mut variables = VariableTable::new();

    let result = parse_and_evaluate("x = 5", &mut variables).unwrap();
    assert_eq!(result.to_string(), "x = 5");
    assert_eq!(parse_and_evaluate("x + 3", &mut variables).unwrap().value, 8);

    let result = parse_and_evaluate("x = x + 2", &mut variables).unwrap();
    assert_eq!(result.to_string(), "x = 7");
    assert_eq!(result.assigned_variable.as_deref(), Some("x"));
    assert_eq!(variables.get("x"), Some(&7));
}

#[test]
fn assignment_forms() {
    let mut variables = VariableTable::new();

    assert_eq!(parse_and_evaluate("a=-3", &mut variables).unwrap().value, -3);
    assert_eq!(parse_and_evaluate("b = a", &mut variables).unwrap().value, -3);
    assert_eq!(parse_and_evaluate("c == 4", &mut variables).unwrap().value, 4);
    assert_eq!(parse_and_evaluate("Total = a - b + c", &mut variables).unwrap().value, 4);
    assert_eq!(format_variables(&variables), "Variables: a = -3 b = -3 c = 4 Total = 4");
}

#[test]
fn reassignment_keeps_insertion_order() {
    let mut variables = VariableTable::new();
    parse_and_evaluate("a = 1", &mut variables).unwrap();
    parse_and_evaluate("b = 2", &mut variables).unwrap();
    parse_and_evaluate("a = 3", &mut variables).unwrap();

    assert_eq!(format_variables(&variables), "Variables: a = 3 b = 2");
}

#[test]
fn variable_names_are_case_sensitive() {
    let mut variables = VariableTable::new();
    parse_and_evaluate("n = 1", &mut variables).unwrap();

    assert_eq!(parse_and_evaluate("N", &mut variables),
               Err(EvalError::Runtime(RuntimeError::UndefinedVariable { name: "N".to_string() })));
}

#[test]
fn undefined_variable_is_error() {
    assert_eq!(eval("y + 1"),
               Err(EvalError::Runtime(RuntimeError::UndefinedVariable { name: "y".to_string() })));
}

#[test]
fn missing_operator_is_error() {
    assert_eq!(eval("4 5"),
               Err(EvalError::Parse(ParseError::MissingOperator { found: "45".to_string() })));
    assert!(matches!(eval("a 1"),
                     Err(EvalError::Parse(ParseError::MissingOperator { .. }))));
}

#[test]
fn letters_and_digits_split_into_adjacent_operands() {
    assert!(matches!(eval("a1"), Err(EvalError::Parse(ParseError::MissingOperator { .. }))));
}

#[test]
fn multiple_assignments_are_rejected() {
    assert_eq!(eval("x = y = 5"), Err(EvalError::Parse(ParseError::MultipleAssignments)));
    assert!(matches!(eval("x = 5 = y"), Err(EvalError::Parse(_))));
}

#[test]
fn assignment_target_must_be_a_leading_variable() {
    assert!(matches!(eval("5 = 3"),
                     Err(EvalError::Parse(ParseError::InvalidAssignmentTarget { .. }))));
    assert!(matches!(eval("= 3"),
                     Err(EvalError::Parse(ParseError::InvalidAssignmentTarget { .. }))));
    assert!(matches!(eval("a + b = 3"),
                     Err(EvalError::Parse(ParseError::InvalidAssignmentTarget { .. }))));
}

#[test]
fn invalid_characters_are_rejected() {
    assert_eq!(eval("2 * 3"),
               Err(EvalError::Parse(ParseError::InvalidCharacter { character: '*',
                                                                   line:      "2 * 3".to_string(), })));
    assert!(matches!(eval("(1)"), Err(EvalError::Parse(ParseError::InvalidCharacter { .. }))));
    assert!(matches!(eval("1.5"), Err(EvalError::Parse(ParseError::InvalidCharacter { .. }))));
    assert!(matches!(eval("x_1 = 2"),
                     Err(EvalError::Parse(ParseError::InvalidCharacter { .. }))));
}

#[test]
fn empty_right_side_is_error() {
    let mut variables = VariableTable::new();
    assert_eq!(parse_and_evaluate("x =", &mut variables),
               Err(EvalError::Runtime(RuntimeError::EmptyExpression)));
    assert!(variables.is_empty());
    assert_eq!(eval(""), Err(EvalError::Runtime(RuntimeError::EmptyExpression)));
}

#[test]
fn overflow_is_error() {
    let mut variables = VariableTable::new();
    assert!(matches!(parse_and_evaluate("x = 2147483647 + 1", &mut variables),
                     Err(EvalError::Runtime(RuntimeError::IntegerOverflow { .. }))));
    assert!(variables.is_empty());

    assert!(matches!(eval("2147483648"),
                     Err(EvalError::Runtime(RuntimeError::IntegerOverflow { .. }))));
    assert!(matches!(eval("x = 99999999999"),
                     Err(EvalError::Runtime(RuntimeError::IntegerOverflow { .. }))));
    assert!(matches!(eval("- 2147483647 - 2"),
                     Err(EvalError::Runtime(RuntimeError::IntegerOverflow { .. }))));
}

#[test]
fn extreme_values_fit() {
    assert_value("2147483647", i32::MAX);
    assert_value("- 2147483647 - 1", i32::MIN);
    assert_value("2147483647 - 1 + 1", i32::MAX);
}

#[test]
fn failed_line_leaves_variables_untouched() {
    let mut variables = VariableTable::new();
    parse_and_evaluate("x = 1", &mut variables).unwrap();

    assert!(parse_and_evaluate("x = x + y", &mut variables).is_err());
    assert_eq!(variables.get("x"), Some(&1));
}

#[test]
fn errors_print_their_message() {
    let error = eval("y").unwrap_err();
    assert_eq!(error.to_string(), "Undefined variable y");

    let error = eval("x = y = 1").unwrap_err();
    assert_eq!(error.to_string(), "Expression can't contain more than one assignment");
}

#[test]
fn sessions_do_not_share_variables() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.handle("x = 1");
    assert_eq!(second.handle("x"), Reply::Output("Undefined variable x".to_string()));
    assert_eq!(first.variables().len(), 1);
    assert!(second.variables().is_empty());
}
