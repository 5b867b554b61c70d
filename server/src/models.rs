//! Records held by the registry and the JSON bodies accepted by the API.
//!
//! # Design
//! Timestamps go out as UTC with millisecond precision and a `Z` suffix
//! (`2024-01-01T00:00:00.000Z`). A deadline the client sent that could not be
//! parsed is kept as `None` and rendered as `null`; it is never a reason to
//! reject the request. Missing string fields in a body default to `""`.
//!
//! Deadlines are read from ISO-8601 dates and date-times, `YYYY/MM/DD`,
//! `MM/DD/YYYY`, month-name dates (`Jan 1 2024`, `January 1, 2024`,
//! `Mon Jan 01 2024`) and numbers of milliseconds since the Unix epoch.
//! Values without an offset are taken as UTC rather than server-local time.
//! Other free-form date strings are not recognised and come out as `null`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

/// A registered user and the todos it owns.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub todos: Vec<Todo>,
    pub id: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    #[serde(serialize_with = "serialize_optional_timestamp")]
    pub deadline: Option<DateTime<Utc>>,
    pub done: bool,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub deadline: Option<Value>,
}

impl TodoInput {
    pub fn parsed_deadline(&self) -> Option<DateTime<Utc>> {
        match self.deadline.as_ref()? {
            Value::String(raw) => parse_deadline(raw),
            Value::Number(millis) => millis
                .as_i64()
                .or_else(|| millis.as_f64().filter(|ms| ms.is_finite()).map(|ms| ms.trunc() as i64))
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        }
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%a %B %d %Y",
];

/// Parse a client-supplied deadline. Offsets are honoured; values without one
/// are taken as UTC. Returns `None` for anything unrecognised.
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn serialize_optional_timestamp<S: Serializer>(
    ts: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => serialize_timestamp(ts, serializer),
        None => serializer.serialize_none(),
    }
}
