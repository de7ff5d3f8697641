// Hourly JPH alignment
//
// Every tracked line is plotted against one shared, contiguous hour axis:
// the configured operating window unioned with whatever hours the payload
// reports. Missing hours are real zeros, never gaps.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::config::TrackingConfig;
use crate::payload::Payload;
use crate::series::Series;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineBuckets {
    pub line: String,
    pub display_name: String,
    pub values: Vec<f64>,
}

impl LineBuckets {
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().sum::<f64>() / self.values.len() as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySeries {
    pub hours: Vec<u32>,
    pub labels: Vec<String>,
    pub lines: Vec<LineBuckets>,
}

impl HourlySeries {
    pub fn line(&self, name: &str) -> Option<&LineBuckets> {
        self.lines.iter().find(|l| l.line == name)
    }
}

/// Hour embedded in a bucket key such as `HRP06:00` or `HRP6:00`.
pub fn bucket_hour(key: &str, prefix: &str) -> Option<u32> {
    key.strip_prefix(prefix)?
        .split(':')
        .next()?
        .trim()
        .parse()
        .ok()
}

pub fn bucket_key(prefix: &str, hour: u32) -> String {
    format!("{}{}", prefix, bucket_label(hour))
}

pub fn bucket_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

pub fn build_hourly_series(payload: &Payload, tracking: &TrackingConfig) -> HourlySeries {
    let prefix = tracking.bucket_prefix.as_str();
    let mut hours: BTreeSet<u32> = tracking.hour_window.hours().collect();
    let mut per_line: Vec<HashMap<u32, f64>> = Vec::with_capacity(tracking.lines.len());

    for spec in &tracking.lines {
        let mut values = HashMap::new();
        for (key, raw) in payload.hourly_entries(&spec.name, prefix) {
            let Some(hour) = bucket_hour(key, prefix) else {
                debug!("Skipping bucket key without an hour: {}.{}", spec.name, key);
                continue;
            };
            hours.insert(hour);
            let series = Series::decode(Some(raw));
            if !series.is_empty() {
                values.entry(hour).or_insert_with(|| series.latest());
            }
        }
        per_line.push(values);
    }

    let hours: Vec<u32> = hours.into_iter().collect();
    let lines = tracking
        .lines
        .iter()
        .zip(per_line)
        .map(|(spec, values)| LineBuckets {
            line: spec.name.clone(),
            display_name: spec.display_name.clone(),
            values: hours
                .iter()
                .map(|h| values.get(h).copied().unwrap_or(0.0))
                .collect(),
        })
        .collect();

    HourlySeries {
        labels: hours.iter().map(|h| bucket_label(*h)).collect(),
        hours,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HourWindow;
    use serde_json::json;

    #[test]
    fn test_bucket_hour_parsing() {
        assert_eq!(bucket_hour("HRP06:00", "HRP"), Some(6));
        assert_eq!(bucket_hour("HRP14:00", "HRP"), Some(14));
        assert_eq!(bucket_hour("HRP9:00", "HRP"), Some(9));
        assert_eq!(bucket_hour("HRPxx:00", "HRP"), None);
        assert_eq!(bucket_hour("JPH", "HRP"), None);
        assert_eq!(bucket_key("HRP", 7), "HRP07:00");
    }

    #[test]
    fn test_gaps_are_filled_with_zero() {
        let payload = Payload::from_value(json!({
            "Front_Line": {
                "HRP06:00": [{ "value": 10 }, { "value": 12 }],
                "HRP08:00": [{ "_value": 9 }]
            }
        }));
        let series = build_hourly_series(&payload, &TrackingConfig::default());

        assert_eq!(series.hours, (6..=14).collect::<Vec<_>>());
        assert_eq!(series.labels.first().unwrap(), "06:00");
        assert_eq!(series.labels.last().unwrap(), "14:00");
        for line in &series.lines {
            assert_eq!(line.values.len(), series.labels.len());
            assert_eq!(line.values[1], 0.0);
        }

        let front = series.line("Front_Line").unwrap();
        assert_eq!(front.values[0], 12.0);
        assert_eq!(front.values[2], 9.0);
        assert!(series.line("RB").unwrap().values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_hours_sort_numerically_and_extend_window() {
        let payload = Payload::from_value(json!({
            "RB": { "JPH": { "HRP16:00": [5], "HRP9:00": [3], "HRP10:00": [] } }
        }));
        let series = build_hourly_series(&payload, &TrackingConfig::default());

        assert_eq!(series.hours, vec![6, 7, 8, 9, 10, 11, 12, 13, 14, 16]);
        let rb = series.line("RB").unwrap();
        assert_eq!(rb.values[3], 3.0);
        assert_eq!(rb.values[4], 0.0);
        assert_eq!(rb.values[9], 5.0);
        assert_eq!(series.line("RC").unwrap().values.len(), 10);
    }

    #[test]
    fn test_mixed_padding_merges_into_one_bucket() {
        let payload = Payload::from_value(json!({
            "Front_Line": { "HRP7:00": [4] },
            "RC": { "HRP07:00": [6] }
        }));
        let tracking = TrackingConfig {
            hour_window: HourWindow { first: 7, last: 7 },
            ..TrackingConfig::default()
        };
        let series = build_hourly_series(&payload, &tracking);
        assert_eq!(series.labels, vec!["07:00"]);
        assert_eq!(series.line("Front_Line").unwrap().values, vec![4.0]);
        assert_eq!(series.line("RC").unwrap().values, vec![6.0]);
    }

    #[test]
    fn test_line_average() {
        let buckets = LineBuckets {
            line: "RB".into(),
            display_name: "Rear Back".into(),
            values: vec![2.0, 4.0],
        };
        assert_eq!(buckets.average(), 3.0);
    }
}
