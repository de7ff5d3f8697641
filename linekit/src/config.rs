use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::errors::{DashError, Result};

pub const DEFAULT_BASE_URL: &str = "https://plant-backend-psi.vercel.app/influx/data";

/// Metric names with a fixed role in the summaries.
pub mod metric {
    pub const JPH: &str = "JPH";
    pub const OEE: &str = "OEE";
    pub const PASSED: &str = "Total_Prod_Today";
    pub const REJECTED: &str = "reject";
    pub const REWORKED: &str = "rework";
    pub const TOTAL_SETS: &str = "total_production_set";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
}

impl EndpointConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// A production line and the metrics whose trends are charted for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSpec {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub trend_metrics: Vec<String>,
}

impl LineSpec {
    pub fn new(name: &str, display_name: &str, trend_metrics: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            trend_metrics: trend_metrics.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Operating window of the hourly buckets, both ends inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourWindow {
    pub first: u32,
    pub last: u32,
}

impl HourWindow {
    pub fn hours(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    pub fn validate(&self) -> Result<()> {
        if self.first > 23 || self.last > 23 {
            return Err(DashError::ConfigError(format!(
                "hour window {}..={} must stay within 0..=23",
                self.first, self.last
            )));
        }
        if self.first > self.last {
            return Err(DashError::ConfigError(format!(
                "hour window starts at {} after it ends at {}",
                self.first, self.last
            )));
        }
        Ok(())
    }
}

impl Default for HourWindow {
    fn default() -> Self {
        Self { first: 6, last: 14 }
    }
}

/// Which lines and metrics the dashboard tracks, and how hourly JPH
/// buckets are keyed. Passed into every transform instead of literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub lines: Vec<LineSpec>,
    pub fields: Vec<String>,
    pub bucket_prefix: String,
    pub hour_window: HourWindow,
    pub shifts: Vec<String>,
}

impl TrackingConfig {
    pub fn line_names(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn line(&self, name: &str) -> Option<&LineSpec> {
        self.lines.iter().find(|l| l.name == name)
    }

    pub fn validate(&self) -> Result<()> {
        self.hour_window.validate()
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                LineSpec::new("Front_Line", "Front Line", &["Productivity", "Avail", "OEE", "Quality"]),
                LineSpec::new("RB", "Rear Back", &["OEE", "Quality"]),
                LineSpec::new("RC", "Rear Cushion", &["OEE", "Quality"]),
            ],
            fields: [
                "JPH",
                "Quality",
                "OEE",
                "Productivity",
                "Avail",
                "Total_Prod_Today",
                "reject",
                "rework",
                "total_production_set",
            ]
            .iter()
            .map(|f| f.to_string())
            .collect(),
            bucket_prefix: "HRP".to_string(),
            hour_window: HourWindow::default(),
            shifts: vec![
                "Shift A".to_string(),
                "Shift B".to_string(),
                "Shift C".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracking_matches_plant_layout() {
        let cfg = TrackingConfig::default();
        assert_eq!(cfg.line_names(), vec!["Front_Line", "RB", "RC"]);
        assert_eq!(cfg.hour_window.hours().count(), 9);
        assert_eq!(cfg.line("RB").unwrap().display_name, "Rear Back");
        assert!(cfg.line("RZ").is_none());
    }

    #[test]
    fn test_partial_tracking_config_keeps_defaults() {
        let cfg: TrackingConfig =
            serde_json::from_value(serde_json::json!({ "hour_window": { "first": 7, "last": 9 } }))
                .unwrap();
        assert_eq!(cfg.hour_window, HourWindow { first: 7, last: 9 });
        assert_eq!(cfg.bucket_prefix, "HRP");
        assert_eq!(cfg.lines.len(), 3);
    }

    #[test]
    fn test_hour_window_validation() {
        assert!(TrackingConfig::default().validate().is_ok());
        assert!(HourWindow { first: 22, last: 23 }.validate().is_ok());

        let reversed = HourWindow { first: 14, last: 6 }.validate();
        assert!(matches!(reversed, Err(DashError::ConfigError(_))));

        let past_midnight = HourWindow { first: 6, last: 24 }.validate();
        assert!(matches!(past_midnight, Err(DashError::ConfigError(_))));
    }
}
