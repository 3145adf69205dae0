//! Input document model: Application → Team → Agent → Tool → Api.
//!
//! In the JSON every list entry is a single-key wrapper object
//! (`{"team_1": {...}}`). The key only labels the entry, so it is
//! discarded here and each list becomes a plain `Vec` of records in
//! document order. Entries that cannot be read (not an object, no inner
//! object, a missing or falsy `name`) are dropped without error. A name
//! that is not a string but is still truthy, such as `7`, is kept as text.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{LoadError, json_type_name};

pub const DEFAULT_APPLICATION_NAME: &str = "Application";

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    #[serde(default = "default_application_name", deserialize_with = "application_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// External identifier shown by renderers above the node.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wrapped_list")]
    pub business_teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wrapped_list")]
    pub agents: Vec<Agent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Agent {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wrapped_list")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tool {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "wrapped_list")]
    pub apis: Vec<Api>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Api {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub method: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub payload: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub input_params: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub output_params: String,
}

impl Application {
    /// Create an application with no teams.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            id: None,
            business_teams: Vec::new(),
        }
    }

    /// Parse a JSON document.
    ///
    /// Fails only when the text is not JSON or the top level is not an object.
    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(src).map_err(LoadError::NotJson)?;
        Self::from_value(value)
    }

    /// Read an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        if !value.is_object() {
            return Err(LoadError::NotAnObject {
                found: json_type_name(&value),
            });
        }
        serde_json::from_value(value).map_err(LoadError::NotJson)
    }
}

macro_rules! plain_record {
    ($ty:ident { $($field:ident),* }) => {
        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    description: String::new(),
                    id: None,
                    $($field: Default::default(),)*
                }
            }
        }

        impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

plain_record!(Team { agents });
plain_record!(Agent { tools });
plain_record!(Tool { apis });
plain_record!(Api { method, endpoint, payload, input_params, output_params });

// ─── Lenient field readers ───────────────────────────────────────────────────

/// Records that are dropped when their name is empty.
trait Named {
    fn name(&self) -> &str;
}

fn default_application_name() -> String {
    DEFAULT_APPLICATION_NAME.to_string()
}

fn application_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(name_text(Value::deserialize(d)?).unwrap_or_else(default_application_name))
}

/// Record name; "" for a falsy value, which drops the record.
fn lenient_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(name_text(Value::deserialize(d)?).unwrap_or_default())
}

/// Text of a name value, or `None` when it is null, `false`, zero or "".
fn name_text(value: Value) -> Option<String> {
    let falsy = match &value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => false,
    };
    (!falsy).then(|| value_text(value))
}

/// Text field that never fails: null → "", scalars and objects → compact JSON.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(d)?))
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let text = value_text(Value::deserialize(d)?);
    Ok((!text.is_empty()).then_some(text))
}

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Array of single-key wrappers → records, dropping unreadable entries.
fn wrapped_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Named,
{
    let Value::Array(entries) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(entries.into_iter().filter_map(unwrap_entry).collect())
}

fn unwrap_entry<T: DeserializeOwned + Named>(entry: Value) -> Option<T> {
    let Value::Object(wrapper) = entry else {
        return None;
    };
    let (_key, inner) = wrapper.into_iter().next()?;
    if !inner.is_object() {
        return None;
    }
    let record: T = serde_json::from_value(inner).ok()?;
    (!record.name().is_empty()).then_some(record)
}

#[cfg(test)]
#[path = "../tests/rust/test_document.rs"]
mod tests;
