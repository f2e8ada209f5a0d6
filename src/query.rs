use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeStruct};

use crate::{
    error::Result,
    token::QueryToken,
    value::{Edit, Value},
};

/// Split a query string into raw segments on runs of whitespace.
///
/// A blank query yields the single empty segment, which addresses the root
/// node as a whole.
pub fn split_query(query: &str) -> Vec<&str> {
    let segments: Vec<&str> = query.split_whitespace().collect();
    if segments.is_empty() {
        return vec![""];
    }
    segments
}

/// A fully validated query.
///
/// The mutation engine parses segments lazily while it descends, so a query
/// does not need to go through this type to be applied. It exists for callers
/// that want to reject bad syntax before touching a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub tokens: Vec<QueryToken>,
}

impl Query {
    pub fn parse(query: &str) -> Result<Self> {
        let tokens = split_query(query)
            .into_iter()
            .map(QueryToken::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Query { tokens })
    }
}

/// A single "at this path, do this" request.
///
/// Serialized as `{"query": "...", "value": ...}`. A missing `value` field
/// means [`Edit::Delete`]; an explicit `null` sets a null.
///
/// # Examples
///
/// ```
/// use pathmod::{Edit, Modification};
/// use serde_json::json;
///
/// let m: Modification = serde_json::from_value(json!({"query": "items id=b"})).unwrap();
/// assert_eq!(m.value, Edit::Delete);
///
/// let m: Modification = serde_json::from_value(json!({"query": "a", "value": null})).unwrap();
/// assert_eq!(m.value, Edit::Set(json!(null)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Modification {
    pub query: String,
    pub value: Edit,
}

impl Modification {
    pub fn set(query: impl Into<String>, value: Value) -> Self {
        Modification {
            query: query.into(),
            value: Edit::Set(value),
        }
    }

    pub fn delete(query: impl Into<String>) -> Self {
        Modification {
            query: query.into(),
            value: Edit::Delete,
        }
    }
}

#[derive(Deserialize)]
struct RawModification {
    query: String,
    #[serde(default, deserialize_with = "present")]
    value: Option<Value>,
}

/// Wraps any present value (including `null`) in `Some`; absence stays `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl<'de> Deserialize<'de> for Modification {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawModification::deserialize(deserializer)?;
        Ok(Modification {
            query: raw.query,
            value: raw.value.into(),
        })
    }
}

impl Serialize for Modification {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.value {
            Edit::Set(value) => {
                let mut state = serializer.serialize_struct("Modification", 2)?;
                state.serialize_field("query", &self.query)?;
                state.serialize_field("value", value)?;
                state.end()
            }
            Edit::Delete => {
                let mut state = serializer.serialize_struct("Modification", 1)?;
                state.serialize_field("query", &self.query)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delete_serializes_without_value() {
        let encoded = serde_json::to_value(Modification::delete("items id=b")).unwrap();
        assert_eq!(encoded, json!({ "query": "items id=b" }));
    }

    #[test]
    fn test_set_null_serializes_value() {
        let encoded = serde_json::to_value(Modification::set("a", Value::Null)).unwrap();
        assert_eq!(encoded, json!({ "query": "a", "value": null }));
    }

    #[test]
    fn test_deserialize_list() {
        let mods: Vec<Modification> = serde_json::from_str(
            r#"[{"query": "a", "value": {"b": 1}}, {"query": "c"}]"#,
        )
        .unwrap();
        assert_eq!(
            mods,
            vec![
                Modification::set("a", json!({ "b": 1 })),
                Modification::delete("c"),
            ]
        );
    }
}
