//! The mutation engine.
//!
//! A query is consumed one segment per level. At each level the current node
//! is matched on its shape: maps go to `mod_map`, sequences to `mod_seq`,
//! and anything else cannot be addressed further. The last segment performs
//! the terminal edit in place.
//!
//! # Terminal edits
//!
//! | Node     | Segment        | `Edit::Set(v)`            | `Edit::Delete`          |
//! |----------|----------------|---------------------------|-------------------------|
//! | map      | `key`          | `node[key] = v`           | remove `key` (if any)   |
//! | map      | `` / `{}`      | replace contents with `v` | invalid                 |
//! | sequence | `@`            | push `v`                  | invalid                 |
//! | sequence | `field=value`  | insert `v` before match   | remove match            |

use tracing::{debug, trace};

use crate::{
    error::{ModError, Result},
    query::{Modification, split_query},
    token::{Init, QueryToken},
    value::{Edit, Map, Value, predicate_text, type_name},
};

/// Entry point behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifyOptions {
    /// Swallow [`ModError::TargetNotFound`] and treat the call as a no-op
    pub ignore_missing: bool,
}

impl Default for ModifyOptions {
    fn default() -> Self {
        ModifyOptions {
            ignore_missing: true,
        }
    }
}

impl ModifyOptions {
    /// Options that propagate every failure.
    pub fn strict() -> Self {
        ModifyOptions {
            ignore_missing: false,
        }
    }
}

/// Apply a modification with default options (missing targets are ignored).
///
/// # Examples
///
/// ```
/// use pathmod::{Modification, modify};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// modify(&mut doc, Modification::set("nodes{} n2", json!({"ref": "Object"}))).unwrap();
/// assert_eq!(doc, json!({"nodes": {"n2": {"ref": "Object"}}}));
/// ```
pub fn modify(document: &mut Value, modification: Modification) -> Result<()> {
    modify_with(document, modification, ModifyOptions::default())
}

/// Apply a modification with explicit options.
pub fn modify_with(
    document: &mut Value,
    modification: Modification,
    options: ModifyOptions,
) -> Result<()> {
    let Modification { query, value } = modification;
    let segments = split_query(&query);

    match apply_mod(document, segments.as_slice(), value) {
        Err(e) if e.is_not_found() && options.ignore_missing => {
            debug!(query = %query, error = %e, "ignoring missing target");
            Ok(())
        }
        other => other,
    }
}

/// Apply modifications in order, stopping at the first failure that is not
/// suppressed by `options`.
///
/// Edits applied before the failure stay applied.
pub fn modify_all<I>(document: &mut Value, modifications: I, options: ModifyOptions) -> Result<()>
where
    I: IntoIterator<Item = Modification>,
{
    for modification in modifications {
        modify_with(document, modification, options)?;
    }
    Ok(())
}

/// Apply an edit along pre-split query segments.
///
/// Segments are parsed one at a time as the walk descends. Unlike
/// [`modify`], no failure is ever suppressed here.
///
/// # Examples
///
/// ```
/// use pathmod::{Edit, apply_mod};
/// use serde_json::json;
///
/// let mut doc = json!({"items": [{"id": "a"}, {"id": "b"}]});
/// apply_mod(&mut doc, &["items", "id=b", "value"], Edit::Set(json!("qux"))).unwrap();
/// assert_eq!(doc, json!({"items": [{"id": "a"}, {"id": "b", "value": "qux"}]}));
/// ```
pub fn apply_mod<S: AsRef<str>>(node: &mut Value, query: &[S], edit: Edit) -> Result<()> {
    let Some((segment, rest)) = query.split_first() else {
        return Err(ModError::invalid("Query must contain at least one segment"));
    };
    let segment = segment.as_ref();
    trace!(segment, remaining = rest.len(), node = type_name(node), "descending");

    match node {
        Value::Object(map) => mod_map(map, segment, rest, edit),
        Value::Array(seq) => mod_seq(seq, segment, rest, edit),
        other => Err(ModError::invalid(format!(
            "Cannot apply {} to {}: data must be either an object or array",
            segment,
            type_name(other)
        ))),
    }
}

fn mod_map<S: AsRef<str>>(map: &mut Map, segment: &str, rest: &[S], edit: Edit) -> Result<()> {
    let token = QueryToken::parse(segment)?;
    if token.predicate.is_some() {
        return Err(ModError::invalid(format!("Cannot apply {segment} to object")));
    }
    if token.is_append() {
        return Err(ModError::invalid(format!(
            "Cannot apply {segment} to object: append is only valid on arrays"
        )));
    }
    if token.is_whole_node() && token.init == Some(Init::Sequence) {
        return Err(ModError::invalid(format!(
            "Cannot apply {segment} to object: empty key with [] is not supported"
        )));
    }

    if rest.is_empty() {
        if token.is_whole_node() {
            return replace_map(map, segment, edit);
        }
        match edit {
            Edit::Delete => {
                if map.shift_remove(&token.key).is_some() {
                    debug!(key = %token.key, "deleted key");
                }
            }
            Edit::Set(value) => {
                debug!(key = %token.key, "set key");
                map.insert(token.key, value);
            }
        }
        return Ok(());
    }

    if map.get(&token.key).is_none_or(Value::is_null) {
        let seed = match token.init {
            Some(Init::Map) => Value::Object(Map::new()),
            Some(Init::Sequence) => Value::Array(Vec::new()),
            None => return Err(ModError::not_found(segment)),
        };
        debug!(key = %token.key, init = type_name(&seed), "initialized missing target");
        map.insert(token.key.clone(), seed);
    }

    let child = map.entry(token.key).or_insert(Value::Null);
    apply_mod(child, rest, edit)
}

/// Clear `map` and refill it from `edit`, keeping the node itself in place.
fn replace_map(map: &mut Map, segment: &str, edit: Edit) -> Result<()> {
    match edit {
        Edit::Set(Value::Object(replacement)) => {
            debug!(keys = replacement.len(), "replaced object contents");
            map.clear();
            map.extend(replacement);
            Ok(())
        }
        Edit::Set(other) => Err(ModError::invalid(format!(
            "Cannot apply {segment}: replacement must be an object, got {}",
            type_name(&other)
        ))),
        Edit::Delete => Err(ModError::invalid(format!(
            "Cannot apply {segment}: replacement value is missing"
        ))),
    }
}

fn mod_seq<S: AsRef<str>>(
    seq: &mut Vec<Value>,
    segment: &str,
    rest: &[S],
    edit: Edit,
) -> Result<()> {
    let token = QueryToken::parse(segment)?;

    if token.is_whole_node() && token.init == Some(Init::Sequence) {
        return Err(ModError::invalid(format!(
            "Cannot apply {segment} to array: empty key with [] is not supported"
        )));
    }

    if token.is_append() {
        if !rest.is_empty() || token.predicate.is_some() {
            return Err(ModError::invalid(format!(
                "Cannot apply {segment} to array: append must be the last segment"
            )));
        }
        return match edit {
            Edit::Set(value) => {
                debug!(len = seq.len() + 1, "appended element");
                seq.push(value);
                Ok(())
            }
            Edit::Delete => Err(ModError::invalid("Cannot push undefined")),
        };
    }

    let Some(predicate) = token.predicate.as_deref() else {
        return Err(ModError::invalid(format!("Cannot apply {segment} to array")));
    };

    let index = match find_index(seq, &token.key, predicate) {
        Some(index) => index,
        None if token.init == Some(Init::Map) => {
            let mut element = Map::new();
            element.insert(token.key.clone(), Value::String(predicate.to_string()));
            seq.push(Value::Object(element));
            debug!(key = %token.key, predicate, "initialized missing element");
            seq.len() - 1
        }
        None => return Err(ModError::not_found(segment)),
    };

    if rest.is_empty() {
        match edit {
            Edit::Delete => {
                seq.remove(index);
                debug!(index, "removed element");
            }
            Edit::Set(value) => {
                seq.insert(index, value);
                debug!(index, "inserted element");
            }
        }
        return Ok(());
    }

    apply_mod(&mut seq[index], rest, edit)
}

/// First element whose `key` field stringifies to `predicate`.
fn find_index(seq: &[Value], key: &str, predicate: &str) -> Option<usize> {
    seq.iter().position(|element| {
        element
            .get(key)
            .and_then(predicate_text)
            .is_some_and(|text| text == predicate)
    })
}
