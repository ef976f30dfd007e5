//! JSON-bag columns (preferences, insights) are written by external tooling in
//! whatever shape it likes. Clients only ever see them as lists of strings.

use serde_json::Value;

const TEXT_KEYS: [&str; 5] = ["name", "value", "label", "text", "description"];

/// Flatten a stored bag into display strings. Nulls are dropped, a scalar
/// becomes a one-element list, a missing column becomes an empty list.
pub fn flatten(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(item_text).collect(),
        Some(other) => item_text(other).into_iter().collect(),
    }
}

fn item_text(item: &Value) -> Option<String> {
    match item {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => TEXT_KEYS
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| Some(item.to_string())),
        Value::Array(_) => Some(item.to_string()),
    }
}

/// Build a bag from plain strings.
pub fn from_strings<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Array(items.into_iter().map(|s| Value::String(s.into())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mixed_documents_flatten_to_strings() {
        let bag = json!(["Quiet room", 3, true, null, {"name": "Vegan"}, {"label": "Late checkout"}, {"x": 1}]);
        assert_eq!(
            flatten(Some(&bag)),
            vec!["Quiet room", "3", "true", "Vegan", "Late checkout", r#"{"x":1}"#]
        );
    }

    #[test]
    fn missing_or_null_is_empty() {
        assert!(flatten(None).is_empty());
        assert!(flatten(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn scalar_becomes_single_item() {
        assert_eq!(flatten(Some(&json!("High floor"))), vec!["High floor"]);
    }

    #[test]
    fn strings_round_into_bag() {
        let bag = from_strings(["a", "b"]);
        assert_eq!(flatten(Some(&bag)), vec!["a", "b"]);
    }
}
