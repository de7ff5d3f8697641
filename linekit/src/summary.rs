use serde::Serialize;

use crate::config::{metric, TrackingConfig};
use crate::payload::Payload;
use crate::series::Series;
use crate::types::finite_or_zero;

/// Pass/reject/rework counters summed across every tracked line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QualitySummary {
    pub passed: f64,
    pub rejected: f64,
    pub reworked: f64,
}

impl QualitySummary {
    /// Each term is the first sample of the line's counter, defaulting to 0
    /// on its own before it is added.
    pub fn from_payload(payload: &Payload, tracking: &TrackingConfig) -> Self {
        let sum = |name: &str| -> f64 {
            tracking
                .lines
                .iter()
                .map(|l| payload.series(&l.name, name).first())
                .sum()
        };
        Self {
            passed: sum(metric::PASSED),
            rejected: sum(metric::REJECTED),
            reworked: sum(metric::REWORKED),
        }
    }

    pub fn total(&self) -> f64 {
        self.passed + self.rejected + self.reworked
    }

    /// Passed share of all produced parts; 0 when nothing was produced.
    pub fn quality_percent(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        finite_or_zero(self.passed / total * 100.0)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", finite_or_zero(value))
}

/// Latest value, mean and size of one normalized metric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTrend {
    pub line: String,
    pub metric: String,
    pub latest: f64,
    pub average: f64,
    pub points: usize,
    #[serde(skip)]
    pub series: Series,
}

impl MetricTrend {
    pub fn from_series(line: &str, metric: &str, series: Series) -> Self {
        Self {
            line: line.to_string(),
            metric: metric.to_string(),
            latest: series.latest(),
            average: series.average(),
            points: series.len(),
            series,
        }
    }
}

pub fn collect_trends(payload: &Payload, tracking: &TrackingConfig) -> Vec<MetricTrend> {
    tracking
        .lines
        .iter()
        .flat_map(|spec| {
            spec.trend_metrics.iter().map(move |m| {
                MetricTrend::from_series(&spec.name, m, payload.normalized(&spec.name, m))
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineProduction {
    pub line: String,
    pub display_name: String,
    pub total_sets: f64,
    pub average_jph: f64,
    pub latest_oee: f64,
}

pub fn collect_production(payload: &Payload, tracking: &TrackingConfig) -> Vec<LineProduction> {
    tracking
        .lines
        .iter()
        .map(|spec| LineProduction {
            line: spec.name.clone(),
            display_name: spec.display_name.clone(),
            total_sets: payload.series(&spec.name, metric::TOTAL_SETS).first(),
            average_jph: payload.jph_average(&spec.name, &tracking.bucket_prefix),
            latest_oee: payload.normalized(&spec.name, metric::OEE).latest(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quality_percent() {
        let q = QualitySummary { passed: 80.0, rejected: 15.0, reworked: 5.0 };
        assert_eq!(format_percent(q.quality_percent()), "80.00%");

        let empty = QualitySummary::default();
        assert_eq!(empty.quality_percent(), 0.0);
        assert_eq!(format_percent(empty.quality_percent()), "0.00%");
    }

    #[test]
    fn test_counters_default_each_term() {
        // Front line has no rejects at all; the other lines must still count.
        let payload = Payload::from_value(json!({
            "Front_Line": { "Total_Prod_Today": [{ "value": 50 }], "reject": [] },
            "RB": { "Total_Prod_Today": [{ "value": 30 }], "reject": [{ "value": 4 }], "rework": [{ "value": 2 }] },
            "RC": { "reject": [{ "_value": 6 }], "rework": "3" }
        }));
        let q = QualitySummary::from_payload(&payload, &TrackingConfig::default());
        assert_eq!(q.passed, 80.0);
        assert_eq!(q.rejected, 10.0);
        assert_eq!(q.reworked, 2.0);
    }

    #[test]
    fn test_collect_trends_follows_tracked_metrics() {
        let payload = Payload::from_value(json!({
            "Front_Line": {
                "OEE": [
                    { "time": "2024-01-01T08:00:00Z", "value": 50 },
                    { "time": "2024-01-01T07:00:00Z", "value": 40 }
                ]
            }
        }));
        let trends = collect_trends(&payload, &TrackingConfig::default());
        assert_eq!(trends.len(), 8);

        let oee = trends
            .iter()
            .find(|t| t.line == "Front_Line" && t.metric == "OEE")
            .unwrap();
        assert_eq!(oee.latest, 50.0);
        assert_eq!(oee.average, 45.0);
        assert_eq!(oee.points, 2);

        let rb_quality = trends.iter().find(|t| t.line == "RB" && t.metric == "Quality").unwrap();
        assert_eq!(rb_quality.points, 0);
        assert_eq!(rb_quality.latest, 0.0);
    }

    #[test]
    fn test_collect_production() {
        let payload = Payload::from_value(json!({
            "RC": { "total_production_set": [{ "value": 42 }, { "value": 1 }], "JPH": 11.9 }
        }));
        let production = collect_production(&payload, &TrackingConfig::default());
        let rc = production.iter().find(|p| p.line == "RC").unwrap();
        assert_eq!(rc.total_sets, 42.0);
        assert_eq!(rc.average_jph, 11.9);
        assert_eq!(rc.display_name, "Rear Cushion");
        assert_eq!(production[0].total_sets, 0.0);
    }

    #[test]
    fn test_collect_production_with_hourly_jph() {
        let payload = Payload::from_value(json!({
            "Front_Line": {
                "JPH": { "HRP06:00": [{ "value": 10 }], "HRP07:00": [{ "value": 14 }] }
            }
        }));
        let production = collect_production(&payload, &TrackingConfig::default());
        let front = production.iter().find(|p| p.line == "Front_Line").unwrap();
        assert_eq!(front.average_jph, 12.0);
    }
}
