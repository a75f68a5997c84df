use indexmap::IndexMap;

/// Variable name to last assigned value.
///
/// Iteration follows insertion order; re-assigning a name keeps its original
/// position. Entries are never removed.
pub type VariableTable = IndexMap<String, i32>;

/// Renders the table the way `/vars` shows it.
///
/// # Examples
/// ```
/// use additive::{VariableTable, format_variables};
///
/// let mut variables = VariableTable::new();
/// assert_eq!(format_variables(&variables), "Variables are not set");
///
/// variables.insert("b".to_string(), 2);
/// variables.insert("a".to_string(), -1);
/// assert_eq!(format_variables(&variables), "Variables: b = 2 a = -1");
/// ```
#[must_use]
pub fn format_variables(variables: &VariableTable) -> String {
    if variables.is_empty() {
        return "Variables are not set".to_string();
    }

    let entries = variables.iter()
                           .map(|(name, value)| format!("{name} = {value}"))
                           .collect::<Vec<_>>()
                           .join(" ");
    format!("Variables: {entries}")
}
