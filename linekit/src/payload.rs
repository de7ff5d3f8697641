use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{metric, TrackingConfig};
use crate::errors::{DashError, Result};
use crate::series::Series;
use crate::types::coerce_number;

/// Response body of the line data endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn into_result(self) -> Result<Payload> {
        if self.success {
            Ok(self.data.map(Payload::from_value).unwrap_or_default())
        } else {
            Err(DashError::BackendError(
                self.message
                    .unwrap_or_else(|| "backend reported failure".to_string()),
            ))
        }
    }
}

/// Line name -> metric name -> scalar, sample array or hourly map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    lines: Map<String, Value>,
}

impl Payload {
    /// Non-object data is treated as an empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(lines) => Self { lines },
            _ => Self::default(),
        }
    }

    pub fn line(&self, line: &str) -> Option<&Map<String, Value>> {
        self.lines.get(line).and_then(Value::as_object)
    }

    pub fn line_names(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    pub fn metric(&self, line: &str, metric: &str) -> Option<&Value> {
        self.line(line).and_then(|m| m.get(metric))
    }

    /// Samples in the order the backend sent them.
    pub fn series(&self, line: &str, metric: &str) -> Series {
        Series::decode(self.metric(line, metric))
    }

    pub fn normalized(&self, line: &str, metric: &str) -> Series {
        Series::normalized(self.metric(line, metric))
    }

    /// A metric read as one number: scalars are coerced, sample arrays
    /// are averaged, anything else is 0.
    pub fn scalar(&self, line: &str, metric: &str) -> f64 {
        match self.metric(line, metric) {
            Some(v @ Value::Array(_)) => Series::decode(Some(v)).average(),
            Some(v) => coerce_number(v),
            None => 0.0,
        }
    }

    /// Hourly-bucket entries for a line. Keys are looked up inside the
    /// line's `JPH` object first, then directly on the line. When the same
    /// key appears in both places, an entry with samples replaces an empty one.
    pub fn hourly_entries<'a>(&'a self, line: &str, prefix: &str) -> Vec<(&'a str, &'a Value)> {
        let Some(metrics) = self.line(line) else {
            return Vec::new();
        };
        let nested = metrics.get(metric::JPH).and_then(Value::as_object);
        let mut entries: Vec<(&str, &Value)> = Vec::new();
        for map in nested.into_iter().chain(std::iter::once(metrics)) {
            for (key, value) in map.iter().filter(|(k, _)| k.starts_with(prefix)) {
                match entries.iter_mut().find(|(k, _)| *k == key.as_str()) {
                    Some(existing) if !has_samples(existing.1) && has_samples(value) => {
                        existing.1 = value;
                    }
                    Some(_) => {}
                    None => entries.push((key.as_str(), value)),
                }
            }
        }
        entries
    }

    /// Per-line average JPH. A scalar or sample array is read directly; the
    /// nested hourly shape averages the latest value of every bucket that
    /// carries samples.
    pub fn jph_average(&self, line: &str, prefix: &str) -> f64 {
        if !matches!(self.metric(line, metric::JPH), Some(Value::Object(_))) {
            return self.scalar(line, metric::JPH);
        }
        let latest: Vec<f64> = self
            .hourly_entries(line, prefix)
            .into_iter()
            .map(|(_, value)| Series::decode(Some(value)))
            .filter(|series| !series.is_empty())
            .map(|series| series.latest())
            .collect();
        if latest.is_empty() {
            0.0
        } else {
            latest.iter().sum::<f64>() / latest.len() as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelector {
    #[default]
    Today,
    Yesterday,
    Custom(NaiveDate),
}

impl DateSelector {
    pub fn query_value(&self) -> String {
        match self {
            DateSelector::Today => "today".to_string(),
            DateSelector::Yesterday => "yesterday".to_string(),
            DateSelector::Custom(date) => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Cycles Today -> Yesterday -> Today; a custom date goes back to Today.
    pub fn next(&self) -> Self {
        match self {
            DateSelector::Today => DateSelector::Yesterday,
            _ => DateSelector::Today,
        }
    }

    pub fn shift_days(&self, today: NaiveDate, days: i64) -> Self {
        let base = match self {
            DateSelector::Today => today,
            DateSelector::Yesterday => today - chrono::Duration::days(1),
            DateSelector::Custom(date) => *date,
        };
        let target = base + chrono::Duration::days(days);
        if target == today {
            DateSelector::Today
        } else if target == today - chrono::Duration::days(1) {
            DateSelector::Yesterday
        } else {
            DateSelector::Custom(target)
        }
    }
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSelector::Today => write!(f, "Today"),
            DateSelector::Yesterday => write!(f, "Yesterday"),
            DateSelector::Custom(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl FromStr for DateSelector {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(DateSelector::Today),
            "yesterday" => Ok(DateSelector::Yesterday),
            other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
                .map(DateSelector::Custom)
                .map_err(|e| DashError::ConfigError(format!("invalid date '{}': {}", s, e))),
        }
    }
}

fn has_samples(value: &Value) -> bool {
    matches!(value, Value::Array(items) if !items.is_empty())
}

/// Filter set sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQuery {
    pub shift: String,
    pub date: DateSelector,
    pub lines: Vec<String>,
    pub fields: Vec<String>,
}

impl DataQuery {
    pub fn new(tracking: &TrackingConfig, shift: &str, date: DateSelector) -> Self {
        Self {
            shift: shift.to_string(),
            date,
            lines: tracking.lines.iter().map(|l| l.name.clone()).collect(),
            fields: tracking.fields.clone(),
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("shift", self.shift.clone()),
            ("date", self.date.query_value()),
            ("lines", self.lines.join(",")),
            ("fields", self.fields.join(",")),
        ]
    }
}
