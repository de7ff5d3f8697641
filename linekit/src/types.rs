use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of a metric array exactly as the backend sent it.
///
/// Backends report samples as bare numbers, numeric strings, or objects
/// carrying `value`/`_value` and `time`/`_time`. Decoding happens once at
/// the ingestion boundary; everything downstream works on [`Sample`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawSample {
    Number(f64),
    Text(String),
    Record {
        value: Option<Value>,
        time: Option<Value>,
    },
    Empty,
}

impl From<Value> for RawSample {
    fn from(value: Value) -> Self {
        RawSample::decode(&value)
    }
}

impl RawSample {
    pub fn decode(value: &Value) -> Self {
        match value {
            Value::Number(n) => RawSample::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => RawSample::Text(s.clone()),
            Value::Bool(b) => RawSample::Number(if *b { 1.0 } else { 0.0 }),
            Value::Object(map) => RawSample::Record {
                value: pick(map, "value", "_value"),
                time: pick(map, "time", "_time"),
            },
            Value::Null | Value::Array(_) => RawSample::Empty,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            RawSample::Number(n) => finite_or_zero(*n),
            RawSample::Text(s) => parse_number(s),
            RawSample::Record { value: Some(v), .. } => coerce_number(v),
            RawSample::Record { value: None, .. } | RawSample::Empty => 0.0,
        }
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        match self {
            RawSample::Record { time: Some(t), .. } => parse_time(t),
            _ => None,
        }
    }

    /// Resolve into the canonical form. `index` is the element's position
    /// in its array and stands in for a missing or unparseable timestamp.
    pub fn resolve(&self, index: usize) -> Sample {
        match self.time() {
            Some(time) => Sample {
                time,
                value: self.value(),
                time_source: TimeSource::Reported,
            },
            None => Sample {
                time: positional_time(index),
                value: self.value(),
                time_source: TimeSource::Positional,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSource {
    Reported,
    Positional,
}

/// Canonical observation. `value` is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub value: f64,
    pub time_source: TimeSource,
}

impl Sample {
    pub fn has_reported_time(&self) -> bool {
        self.time_source == TimeSource::Reported
    }
}

// `value` wins over `_value` unless it is absent or null.
fn pick(map: &Map<String, Value>, primary: &str, alternate: &str) -> Option<Value> {
    map.get(primary)
        .filter(|v| !v.is_null())
        .or_else(|| map.get(alternate).filter(|v| !v.is_null()))
        .cloned()
}

pub fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn parse_number(s: &str) -> f64 {
    s.trim().parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Numeric coercion for loosely typed JSON scalars; anything unusable is 0.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(finite_or_zero).unwrap_or(0.0),
        Value::String(s) => parse_number(s),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Accepts epoch milliseconds, RFC 3339, naive `YYYY-MM-DD[T ]HH:MM:SS`
/// (read as UTC) and bare dates.
pub fn parse_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|ms| ms.is_finite())
            .and_then(|ms| DateTime::from_timestamp_millis(ms as i64)),
        Value::String(s) => parse_time_str(s.trim()),
        _ => None,
    }
}

fn parse_time_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn positional_time(index: usize) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(index as i64).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_shapes() {
        assert_eq!(RawSample::decode(&json!(4.5)).value(), 4.5);
        assert_eq!(RawSample::decode(&json!("12")).value(), 12.0);
        assert_eq!(RawSample::decode(&json!({ "value": 2 })).value(), 2.0);
        assert_eq!(RawSample::decode(&json!({ "_value": 4 })).value(), 4.0);
        assert_eq!(RawSample::decode(&json!(null)).value(), 0.0);
        assert_eq!(RawSample::decode(&json!([1, 2])).value(), 0.0);
    }

    #[test]
    fn test_value_prefers_primary_field_unless_null() {
        let both = RawSample::decode(&json!({ "value": 0, "_value": 5 }));
        assert_eq!(both.value(), 0.0);

        let null_primary = RawSample::decode(&json!({ "value": null, "_value": 5 }));
        assert_eq!(null_primary.value(), 5.0);
    }

    #[test]
    fn test_invalid_numbers_coerce_to_zero() {
        assert_eq!(RawSample::decode(&json!({ "value": "abc" })).value(), 0.0);
        assert_eq!(RawSample::decode(&json!("NaN")).value(), 0.0);
        assert_eq!(RawSample::decode(&json!("inf")).value(), 0.0);
        assert_eq!(RawSample::decode(&json!({ "value": {} })).value(), 0.0);
        assert_eq!(RawSample::decode(&json!({})).value(), 0.0);
    }

    #[test]
    fn test_time_fields() {
        let s = RawSample::decode(&json!({ "_time": "2024-01-01T07:00:00Z", "value": 1 }));
        assert_eq!(s.time().unwrap().to_rfc3339(), "2024-01-01T07:00:00+00:00");

        let ms = RawSample::decode(&json!({ "time": 1_000, "value": 1 }));
        assert_eq!(ms.time().unwrap().timestamp_millis(), 1_000);

        let naive = RawSample::decode(&json!({ "time": "2024-01-01 07:30:00" }));
        assert_eq!(naive.time().unwrap().to_rfc3339(), "2024-01-01T07:30:00+00:00");

        assert!(RawSample::decode(&json!({ "time": "not a date" })).time().is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_position() {
        let sample = RawSample::decode(&json!(7)).resolve(3);
        assert_eq!(sample.time.timestamp_millis(), 3);
        assert_eq!(sample.time_source, TimeSource::Positional);
        assert_eq!(sample.value, 7.0);

        let bad_time = RawSample::decode(&json!({ "time": "garbage", "value": 1 })).resolve(2);
        assert!(!bad_time.has_reported_time());
        assert_eq!(bad_time.time.timestamp_millis(), 2);
    }

    #[test]
    fn test_deserialize_array_of_raw_samples() {
        let raw: Vec<RawSample> =
            serde_json::from_value(json!([1, { "_value": "2.5" }, null])).unwrap();
        let values: Vec<f64> = raw.iter().map(RawSample::value).collect();
        assert_eq!(values, vec![1.0, 2.5, 0.0]);
    }
}
