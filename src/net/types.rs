//! Wire DTOs for the task-board REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's PascalCase JSON (`Id`, `Name`, `IsActive`,
//! `BoardId`). Ids are opaque: the backend may send numbers or strings, so
//! they are normalized to their text form on the way in and written back as
//! strings only when the client builds a URL.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque board identifier, stored in its canonical text form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardId(String);

impl BoardId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoardId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for BoardId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for BoardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BoardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        opaque_id_text(serde_json::Value::deserialize(deserializer)?)
            .map(Self)
            .map_err(D::Error::custom)
    }
}

/// A board as returned by `GET /Boards` and `POST /Boards`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Payload for `POST /Boards`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewBoard {
    pub name: String,
    pub is_active: bool,
}

impl NewBoard {
    /// New boards are always created active.
    pub fn active(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_active: true }
    }
}

/// A column of a board as returned by `GET /ColumnByBoardId`.
///
/// Only the join key is required. Display fields beyond `Name` vary between
/// backend versions and are kept verbatim in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Column {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub board_id: BoardId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Signed-in user's identity record cached in browser storage under `user`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_active() -> bool {
    true
}

fn opaque_id_text(value: serde_json::Value) -> Result<String, &'static str> {
    match value {
        serde_json::Value::String(text) if !text.is_empty() => Ok(text),
        serde_json::Value::String(_) => Err("expected non-empty id"),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err("expected string or number id"),
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => opaque_id_text(value).map(Some).map_err(D::Error::custom),
    }
}
