use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
pub struct GraphError {
    pub message: String,
}

/// Response envelope returned by a subgraph endpoint.
#[derive(Debug, Deserialize)]
pub struct GraphResponse {
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphError>,
}

impl GraphResponse {
    /// Returns `data`, or the joined error messages if the query failed.
    pub fn into_data(self) -> Result<Value> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            warn!(count = messages.len(), "[GRAPHQL] response carried errors");
            return Err(AppError::Graph(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| AppError::Graph("response has neither data nor errors".to_string()))
    }
}

/// A document with any GraphQL envelope removed.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The document had no envelope.
    Bare(Value),
    /// The `data` object of an envelope.
    Data(Value),
}

impl Payload {
    /// The selected record. `{"data": {"bet": {...}}}` yields the inner bet:
    /// when `data` has a single root field that field's value is returned.
    /// Bare documents and multi-field `data` objects come back whole.
    pub fn into_record(self) -> Value {
        match self {
            Payload::Data(Value::Object(fields)) if fields.len() == 1 => {
                fields.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null)
            }
            Payload::Data(v) | Payload::Bare(v) => v,
        }
    }

    /// `data` (or the bare document) with its root fields kept, for inputs
    /// that are keyed by root field name.
    pub fn into_root(self) -> Value {
        match self {
            Payload::Data(v) | Payload::Bare(v) => v,
        }
    }
}

/// Strips a GraphQL envelope from a document if it has one. Documents without
/// a top-level `data` or `errors` key are returned as [`Payload::Bare`].
pub fn unwrap_envelope(doc: Value) -> Result<Payload> {
    let is_envelope = doc
        .as_object()
        .is_some_and(|o| o.contains_key("data") || o.contains_key("errors"));
    if !is_envelope {
        return Ok(Payload::Bare(doc));
    }

    let envelope: GraphResponse = serde_json::from_value(doc)?;
    Ok(Payload::Data(envelope.into_data()?))
}
