//! Wire types for the todo API.
//!
//! # Design
//! `Todo` is both the stored record and the response body. Request bodies
//! decode into `TodoInput`, which only carries the client-writable fields;
//! identity and timestamps always come from the server.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A single stored todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Build a fresh record with both timestamps taken from one clock reading.
    pub fn new(id: i64, input: TodoInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the client-writable fields and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards or stays put, even if `now` does.
    pub fn apply(&mut self, input: TodoInput, now: DateTime<Utc>) {
        self.title = input.title;
        self.completed = input.completed;
        self.updated_at = now.max(self.updated_at + Duration::nanoseconds(1));
    }
}

/// Body of `POST /api/todos` and `PUT /api/todos/{id}`.
///
/// Missing or `null` fields fall back to their zero values. `id` and the
/// timestamps are accepted so that a full `Todo` can be echoed back, but only
/// their types are checked; the values are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, rename = "id")]
    _id: Option<i64>,
    #[serde(default, rename = "created_at")]
    _created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updated_at")]
    _updated_at: Option<DateTime<Utc>>,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
            ..Self::default()
        }
    }

    /// Decode a raw request body.
    ///
    /// Binding is lenient in the same places a zero-value JSON binder is: a
    /// bare `null` body is an empty input, `null` fields are skipped, keys
    /// match field names ignoring ASCII case, and the last occurrence of a
    /// key wins. Anything that is not an object or `null` is rejected.
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        let RawBody(entries) = serde_json::from_slice(body).map_err(validation)?;
        match entries {
            None => Ok(Self::default()),
            Some(entries) => {
                serde_json::from_value(Value::Object(canonical_fields(entries))).map_err(validation)
            }
        }
    }
}

const INPUT_FIELDS: [&str; 5] = ["id", "title", "completed", "created_at", "updated_at"];

/// Rename keys to their field names, dropping nulls and unknown keys.
/// Entries are applied in document order, so later keys overwrite earlier ones.
fn canonical_fields(entries: Vec<(String, Value)>) -> Map<String, Value> {
    let mut canonical = Map::new();
    for (key, value) in entries {
        if value.is_null() {
            continue;
        }
        if let Some(name) = INPUT_FIELDS.iter().find(|name| key.eq_ignore_ascii_case(name)) {
            canonical.insert(name.to_string(), value);
        }
    }
    canonical
}

fn validation(err: serde_json::Error) -> ApiError {
    ApiError::Validation(err.to_string())
}

/// A body as written: `null`, or an object's entries in document order with
/// duplicates kept.
struct RawBody(Option<Vec<(String, Value)>>);

impl<'de> Deserialize<'de> for RawBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawBodyVisitor)
    }
}

struct RawBodyVisitor;

impl<'de> Visitor<'de> for RawBodyVisitor {
    type Value = RawBody;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawBody, E> {
        Ok(RawBody(None))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawBody, A::Error> {
        let mut entries = Vec::new();
        while let Some(entry) = map.next_entry::<String, Value>()? {
            entries.push(entry);
        }
        Ok(RawBody(Some(entries)))
    }
}

/// Body returned by a successful delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn deleted() -> Self {
        Self {
            message: "Todo deleted".to_string(),
        }
    }
}
