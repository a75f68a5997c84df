use additive::{
    VariableTable,
    interpreter::{lexer::tokenize, resolver::substitute},
    parse_and_evaluate,
};
use proptest::prelude::*;

fn chain() -> impl Strategy<Value = (i32, Vec<(bool, i32)>)> {
    (0..10_000i32, prop::collection::vec((any::<bool>(), 0..10_000i32), 0..12))
}

proptest! {
    #[test]
    fn literal_chain_equals_left_fold((first, rest) in chain()) {
        let mut line = first.to_string();
        let mut expected = first;
        for &(plus, value) in &rest {
            line.push_str(if plus { " + " } else { " - " });
            line.push_str(&value.to_string());
            expected = if plus { expected + value } else { expected - value };
        }

        let result = parse_and_evaluate(&line, &mut VariableTable::new()).unwrap();
        prop_assert_eq!(result.value, expected);
        prop_assert_eq!(result.assigned_variable, None);
    }

    #[test]
    fn minus_runs_follow_parity(count in 1usize..9, lhs in 0..1000i32, rhs in 0..1000i32) {
        let line = format!("{lhs} {} {rhs}", "-".repeat(count));
        let expected = if count % 2 == 0 { lhs + rhs } else { lhs - rhs };

        let result = parse_and_evaluate(&line, &mut VariableTable::new()).unwrap();
        prop_assert_eq!(result.value, expected);
    }

    #[test]
    fn assignment_stores_the_reported_value(name in "[a-zA-Z]{1,8}", value in (i32::MIN + 1)..=i32::MAX) {
        let mut variables = VariableTable::new();
        let line = format!("{name} = {value}");

        let result = parse_and_evaluate(&line, &mut variables).unwrap();
        prop_assert_eq!(result.value, value);
        prop_assert_eq!(variables.get(&name), Some(&value));
        prop_assert_eq!(result.to_string(), format!("{name} = {value}"));
    }

    #[test]
    fn substitution_twice_is_substitution_once(a in any::<i32>(), b in any::<i32>()) {
        let mut variables = VariableTable::new();
        variables.insert("a".to_string(), a);
        variables.insert("b".to_string(), b);

        let tokens = tokenize("a - b + 1 - a").unwrap();
        let once = substitute(&tokens, &variables).unwrap();
        let twice = substitute(&once, &variables).unwrap();
        prop_assert_eq!(once, twice);
    }
}
