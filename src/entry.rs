//! Log entries and message values
//!
//! An entry is built per call, rendered, written and dropped. Message values
//! are held as `serde_json::Value` so anything serializable can be logged.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::Result;
use crate::level::Severity;

/// Convert any serializable value into a message value
pub fn to_message<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// A single log call, captured at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Severity,
    pub messages: Vec<Value>,
}

impl LogEntry {
    pub fn new<I, M>(timestamp: DateTime<Utc>, level: Severity, messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Value>,
    {
        Self {
            timestamp,
            level,
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-01-03T12:00:00.000Z`
    pub fn timestamp_text(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Calendar date (UTC) the entry belongs to
    pub fn log_date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// Name of the day file this entry is appended to
    pub fn file_name(&self) -> String {
        log_file_name(self.timestamp.date_naive())
    }

    /// The structured record: `timestamp`, `level`, `messages`, in that order
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert("timestamp".to_string(), Value::String(self.timestamp_text()));
        record.insert("level".to_string(), Value::String(self.level.as_str().to_string()));
        record.insert(
            "messages".to_string(),
            Value::Array(self.messages.iter().map(structured_message).collect()),
        );
        Value::Object(record)
    }

    /// Messages stringified and joined with single spaces
    pub fn joined_text(&self) -> String {
        self.messages.iter().map(plain_message).collect::<Vec<_>>().join(" ")
    }
}

/// `YYYY-MM-DD.log`
pub fn log_file_name(date: NaiveDate) -> String {
    format!("{}.log", date.format("%Y-%m-%d"))
}

/// Structured data passes through; scalars become their string form.
fn structured_message(value: &Value) -> Value {
    match value {
        Value::Object(_) | Value::Array(_) | Value::Null | Value::String(_) => value.clone(),
        Value::Number(n) => Value::String(number_text(n)),
        Value::Bool(b) => Value::String(b.to_string()),
    }
}

/// Integers as written; floats in their shortest natural form (`1.0` -> `1`)
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn plain_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        // Display on Value is compact JSON
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(7)
    }

    #[test]
    fn test_timestamp_millis() {
        let entry = LogEntry::new(at(), Severity::Info, ["x"]);
        assert_eq!(entry.timestamp_text(), "2026-01-03T12:00:00.007Z");
        assert_eq!(entry.log_date(), "2026-01-03");
        assert_eq!(entry.file_name(), "2026-01-03.log");
    }

    #[test]
    fn test_record_field_order() {
        let entry = LogEntry::new(at(), Severity::Warn, ["disk low"]);
        let text = serde_json::to_string(&entry.to_record()).unwrap();
        assert_eq!(
            text,
            r#"{"timestamp":"2026-01-03T12:00:00.007Z","level":"warn","messages":["disk low"]}"#
        );
    }

    #[test]
    fn test_record_normalizes_scalars() {
        let entry = LogEntry::new(
            at(),
            Severity::Info,
            vec![json!(42), json!(true), json!(null), json!({"b": 1, "a": [1, 2]})],
        );
        let record = entry.to_record();
        assert_eq!(record["messages"], json!(["42", "true", null, {"b": 1, "a": [1, 2]}]));
    }

    #[test]
    fn test_single_message_is_still_a_sequence() {
        let entry = LogEntry::new(at(), Severity::Info, ["only"]);
        assert!(entry.to_record()["messages"].is_array());
        assert!(entry.to_record().get("message").is_none());
    }

    #[test]
    fn test_joined_text() {
        let entry = LogEntry::new(
            at(),
            Severity::Info,
            vec![json!("user"), json!({"id": 7}), json!(3.5), json!(false), json!(null)],
        );
        assert_eq!(entry.joined_text(), r#"user {"id":7} 3.5 false null"#);
    }

    #[test]
    fn test_whole_floats_print_naturally() {
        let entry = LogEntry::new(at(), Severity::Info, vec![json!(1.0), json!(2.5), json!(7)]);
        assert_eq!(entry.joined_text(), "1 2.5 7");
        assert_eq!(entry.to_record()["messages"], json!(["1", "2.5", "7"]));
    }

    #[test]
    fn test_empty_messages() {
        let entry = LogEntry::new(at(), Severity::Debug, Vec::<Value>::new());
        assert_eq!(entry.joined_text(), "");
        assert_eq!(entry.to_record()["messages"], json!([]));
    }

    #[test]
    fn test_to_message_custom_struct() {
        #[derive(Serialize)]
        struct Request {
            method: &'static str,
            status: u16,
        }

        let value = to_message(&Request { method: "GET", status: 200 }).unwrap();
        assert_eq!(value, json!({"method": "GET", "status": 200}));
    }

    #[test]
    fn test_to_message_rejects_non_string_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], "value");
        assert!(to_message(&map).is_err());
    }
}
