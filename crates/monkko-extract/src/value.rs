//! Literal values produced by the evaluator.

use indexmap::IndexMap;
use serde::Serialize;

/// A constant value reduced from a literal expression.
///
/// Maps keep the order in which keys were first written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenericValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<GenericValue>),
    Map(IndexMap<String, GenericValue>),
}

impl GenericValue {
    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            GenericValue::Null => "null",
            GenericValue::Bool(_) => "boolean",
            GenericValue::Number(_) => "number",
            GenericValue::String(_) => "string",
            GenericValue::List(_) => "list",
            GenericValue::Map(_) => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GenericValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GenericValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, GenericValue>> {
        match self {
            GenericValue::Map(map) => Some(map),
            _ => None,
        }
    }
}
