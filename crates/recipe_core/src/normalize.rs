use serde::{Deserialize, Serialize};

/// Delimiter used when ingredients arrive as a single string.
pub const INGREDIENT_DELIMITER: char = ',';
/// Delimiter used when steps arrive as a single string.
pub const STEP_DELIMITER: char = '.';

/// A list-valued field as the store or a form may hold it: either one
/// delimited string or an already-split sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// True when there is nothing to submit: empty text or a zero-length list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Converts either field shape into the canonical sequence of trimmed strings.
///
/// Lists are trimmed element-wise and never re-split. Text is split on every
/// `delimiter`. Empty pieces are kept, so `"a.b."` yields a trailing `""`.
pub fn normalize(value: &FieldValue, delimiter: char) -> Vec<String> {
    match value {
        FieldValue::List(items) => items.iter().map(|item| item.trim().to_string()).collect(),
        FieldValue::Text(text) => text
            .split(delimiter)
            .map(|piece| piece.trim().to_string())
            .collect(),
    }
}

/// Joins a canonical sequence back into editable text, e.g. `", "` for
/// ingredients and `". "` for steps.
pub fn join_for_editing(items: &[String], delimiter: char) -> String {
    let separator = format!("{delimiter} ");
    items.join(&separator)
}
