use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::{ModError, Result};

/// Reserved key that appends to a sequence.
pub const APPEND_KEY: &str = "@";

/// `key[=predicate][{}|[]]`
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([@$_a-zA-Z0-9-]*)(?:=([a-zA-Z0-9_$-]+))?(\{\}|\[\])?$")
        .unwrap_or_else(|e| panic!("segment pattern must compile: {e}"))
});

/// Shape to create when a target does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Init {
    /// `{}` suffix
    Map,
    /// `[]` suffix
    Sequence,
}

/// One parsed segment of a query.
///
/// # Examples
///
/// ```
/// use pathmod::token::{Init, QueryToken};
///
/// let token = QueryToken::parse("id=c{}").unwrap();
/// assert_eq!(token.key, "id");
/// assert_eq!(token.predicate.as_deref(), Some("c"));
/// assert_eq!(token.init, Some(Init::Map));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryToken {
    /// Map key, or the field a sequence predicate tests. May be empty.
    pub key: String,
    /// Equality constraint used to locate a sequence element
    pub predicate: Option<String>,
    pub init: Option<Init>,
}

impl QueryToken {
    /// Parse a single whitespace-free query segment.
    pub fn parse(segment: &str) -> Result<Self> {
        let caps = SEGMENT
            .captures(segment)
            .ok_or_else(|| ModError::invalid(format!("Invalid query: {segment}")))?;

        let key = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let predicate = caps.get(2).map(|m| m.as_str().to_string());
        let init = caps.get(3).map(|m| match m.as_str() {
            "{}" => Init::Map,
            _ => Init::Sequence,
        });

        Ok(QueryToken {
            key,
            predicate,
            init,
        })
    }

    /// `@`: append to a sequence
    pub fn is_append(&self) -> bool {
        self.key == APPEND_KEY
    }

    /// Empty key: addresses the current node as a whole
    pub fn is_whole_node(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if let Some(predicate) = &self.predicate {
            write!(f, "={}", predicate)?;
        }
        match self.init {
            Some(Init::Map) => write!(f, "{{}}"),
            Some(Init::Sequence) => write!(f, "[]"),
            None => Ok(()),
        }
    }
}
