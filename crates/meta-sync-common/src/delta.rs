use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of a single delta operation.
///
/// Text inserts carry a string; anything else (images, formulas, videos)
/// is kept verbatim as an embed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Insert {
    Text(String),
    Embed(Value),
}

impl From<Value> for Insert {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Insert::Text(text),
            other => Insert::Embed(other),
        }
    }
}

/// One entry of a delta's `ops` list. Only `insert` is read; formatting
/// attributes and retain/delete ops deserialize to an empty operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert: Option<Insert>,
}

impl Operation {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Some(Insert::Text(text.into())),
        }
    }

    pub fn embed(value: Value) -> Self {
        Self {
            insert: Some(Insert::Embed(value)),
        }
    }

    /// The inserted string, if this operation inserts text.
    pub fn as_text(&self) -> Option<&str> {
        match &self.insert {
            Some(Insert::Text(text)) => Some(text),
            _ => None,
        }
    }
}

impl From<Value> for Operation {
    fn from(value: Value) -> Self {
        let insert = match value {
            Value::Object(mut map) => match map.remove("insert") {
                None | Some(Value::Null) => None,
                Some(v) => Some(Insert::from(v)),
            },
            _ => None,
        };
        Self { insert }
    }
}

/// A rich-text document in Quill delta form: `{ "ops": [ { "insert": ... } ] }`.
///
/// Deserialization is lenient. A missing or non-array `ops` yields `None`,
/// and malformed entries become operations without an insert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RichTextDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops: Option<Vec<Operation>>,
}

impl RichTextDocument {
    pub fn from_ops(ops: impl IntoIterator<Item = Operation>) -> Self {
        Self {
            ops: Some(ops.into_iter().collect()),
        }
    }

    /// Parse a delta from JSON text. Only syntactically invalid JSON fails.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Value> for RichTextDocument {
    fn from(value: Value) -> Self {
        let ops = match value {
            Value::Object(mut map) => match map.remove("ops") {
                Some(Value::Array(items)) => {
                    Some(items.into_iter().map(Operation::from).collect())
                }
                _ => None,
            },
            _ => None,
        };
        Self { ops }
    }
}
