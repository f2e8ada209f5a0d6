use std::str::FromStr;

use rust_decimal::Decimal;

/// A node in a document: scalar, map or sequence.
///
/// Documents are plain `serde_json` values. The crate enables serde_json's
/// `preserve_order` feature, so map keys keep their insertion order.
pub type Value = serde_json::Value;

/// A map node with string keys.
pub type Map = serde_json::Map<String, Value>;

/// The edit carried down a query path.
///
/// # Examples
///
/// ```
/// use pathmod::Edit;
/// use serde_json::json;
///
/// let set = Edit::Set(json!({"ref": "Object"}));
/// let null = Edit::Set(json!(null)); // a real null, not a delete
/// let delete = Edit::Delete;
///
/// assert!(!set.is_delete());
/// assert!(!null.is_delete());
/// assert!(delete.is_delete());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Set, insert or append this value at the target
    Set(Value),

    /// Remove the target
    Delete,
}

impl Edit {
    pub fn is_delete(&self) -> bool {
        matches!(self, Edit::Delete)
    }
}

impl From<Value> for Edit {
    fn from(value: Value) -> Self {
        Edit::Set(value)
    }
}

impl From<Option<Value>> for Edit {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Edit::Delete, Edit::Set)
    }
}

/// Returns a human-readable shape name for a Value
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Stringify a field value for comparison against a query predicate.
///
/// Numbers are normalized through a decimal so that `1`, `1.0` and `1.00`
/// all compare as `"1"`. Arrays and objects have no text form and never match.
pub fn predicate_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Number(n) => {
            let raw = n.to_string();
            let text = match Decimal::from_str(&raw) {
                Ok(d) => d.normalize().to_string(),
                Err(_) => raw,
            };
            Some(text)
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}
