//! Remote snapshot pushed by the backend.
//!
//! Every field is deserialized leniently: the backend speaks a loosely typed
//! protocol where booleans arrive as `0`/`1`, counts may be missing and lists
//! may be `null`. Nothing here rejects a snapshot because of one bad field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ErtError, Result};

/// Response tier of the team being assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErtType {
    Amber,
    Red,
    Gamma,
}

impl ErtType {
    /// All tiers in header order
    pub const ALL: [ErtType; 3] = [ErtType::Amber, ErtType::Red, ErtType::Gamma];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErtType::Amber => "Amber",
            ErtType::Red => "Red",
            ErtType::Gamma => "Gamma",
        }
    }
}

impl fmt::Display for ErtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErtType {
    type Err = ErtError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "amber" => Ok(ErtType::Amber),
            "red" => Ok(ErtType::Red),
            "gamma" => Ok(ErtType::Gamma),
            _ => Err(ErtError::InvalidSnapshot(format!("unknown ERT type: {s}"))),
        }
    }
}

/// A single player-submitted ERT request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMessage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_real_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender_uid: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

/// Full remote state shown by the panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSnapshot {
    #[serde(default, deserialize_with = "lenient_string")]
    pub security_level: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub security_level_color: String,
    #[serde(default, deserialize_with = "boolean_like")]
    pub ert_request_answered: bool,

    #[serde(default, deserialize_with = "lenient_ert_type")]
    pub ert_type: Option<ErtType>,
    /// "Spawn on briefing" toggle
    #[serde(default, deserialize_with = "boolean_like")]
    pub admin_slots: bool,
    #[serde(default, deserialize_with = "boolean_like")]
    pub commander_slots: bool,
    #[serde(default, deserialize_with = "lenient_count")]
    pub security_slots: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub medical_slots: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub engineering_slots: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub inquisitor_slots: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub janitor_slots: Option<i64>,
    #[serde(default, deserialize_with = "lenient_total")]
    pub total_slots: i64,
    #[serde(default, deserialize_with = "lenient_total")]
    pub ert_spawnpoints: i64,

    #[serde(default, deserialize_with = "lenient_messages")]
    pub ert_request_messages: Vec<RequestMessage>,
}

impl RemoteSnapshot {
    /// Parse a snapshot from JSON.
    ///
    /// Accepts either the bare data object or an update envelope carrying it
    /// under a `data` key.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let data = match value {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Object(inner)) => Value::Object(inner),
                Some(other) => {
                    map.insert("data".to_string(), other);
                    Value::Object(map)
                }
                None => Value::Object(map),
            },
            other => {
                return Err(ErtError::InvalidSnapshot(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )));
            }
        };
        Ok(serde_json::from_value(data)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Truthiness of a loosely typed value.
///
/// Numbers are true when non-zero, strings when non-empty and not `"0"`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn boolean_like<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_integer))
}

fn lenient_total<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_integer).unwrap_or(0))
}

fn lenient_ert_type<'de, D>(deserializer: D) -> std::result::Result<Option<ErtType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

fn lenient_messages<'de, D>(deserializer: D) -> std::result::Result<Vec<RequestMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RequestMessage>(item) {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::warn!("Skipping malformed ERT request message: {e}");
                None
            }
        })
        .collect())
}
