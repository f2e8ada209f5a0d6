//! Apply modifications to JSON input

use super::CliError;
use crate::{Edit, Modification, ModifyOptions, Query, QueryToken, modify_all, modify_with};

/// Options for the apply command
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// The query addressing the target
    pub query: String,
    /// JSON text of the value to set; `None` deletes the target
    pub value: Option<String>,
    /// JSON input document
    pub input: Option<String>,
    /// Propagate missing-target errors instead of ignoring them
    pub strict: bool,
}

/// Options for the batch command
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// JSON array of `{"query": ..., "value": ...}` objects
    pub modifications: String,
    /// JSON input document
    pub input: Option<String>,
    /// Propagate missing-target errors instead of ignoring them
    pub strict: bool,
}

fn options_for(strict: bool) -> ModifyOptions {
    if strict {
        ModifyOptions::strict()
    } else {
        ModifyOptions::default()
    }
}

fn parse_document(input: Option<&String>) -> Result<serde_json::Value, CliError> {
    let json_str = input.ok_or(CliError::NoInput)?;
    Ok(serde_json::from_str(json_str)?)
}

/// Apply one modification and return the resulting document
pub fn execute_apply(options: &ApplyOptions) -> Result<serde_json::Value, CliError> {
    let mut document = parse_document(options.input.as_ref())?;

    let value = match &options.value {
        Some(text) => Edit::Set(serde_json::from_str(text)?),
        None => Edit::Delete,
    };
    let modification = Modification {
        query: options.query.clone(),
        value,
    };

    modify_with(&mut document, modification, options_for(options.strict))?;
    Ok(document)
}

/// Apply a list of modifications in order and return the resulting document
pub fn execute_batch(options: &BatchOptions) -> Result<serde_json::Value, CliError> {
    let mut document = parse_document(options.input.as_ref())?;
    let modifications: Vec<Modification> = serde_json::from_str(&options.modifications)?;

    modify_all(&mut document, modifications, options_for(options.strict))?;
    Ok(document)
}

/// Validate query syntax without touching a document
pub fn check_query(query: &str) -> Result<Vec<QueryToken>, CliError> {
    Ok(Query::parse(query)?.tokens)
}
