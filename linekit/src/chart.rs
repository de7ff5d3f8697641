use serde::Serialize;

use crate::buckets::HourlySeries;
use crate::series::Series;
use crate::summary::QualitySummary;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// `labels` and every dataset's `data` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }
}

/// Trend chart for one series. Roughly four time labels are shown,
/// taken from samples with a reported time. An empty series is drawn as a
/// single zero point.
pub fn line_chart(label: &str, series: &Series) -> ChartData {
    if series.is_empty() {
        return ChartData {
            labels: vec![String::new()],
            datasets: vec![Dataset { label: label.to_string(), data: vec![0.0] }],
        };
    }

    let step = series.len().div_ceil(4).max(1);
    let labels = series
        .samples()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i % step == 0 && s.has_reported_time() {
                s.time.format("%H:%M").to_string()
            } else {
                String::new()
            }
        })
        .collect();

    ChartData {
        labels,
        datasets: vec![Dataset { label: label.to_string(), data: series.values() }],
    }
}

pub fn hourly_chart(series: &HourlySeries) -> ChartData {
    ChartData {
        labels: series.labels.clone(),
        datasets: series
            .lines
            .iter()
            .map(|l| Dataset { label: l.display_name.clone(), data: l.values.clone() })
            .collect(),
    }
}

pub fn quality_chart(quality: &QualitySummary) -> ChartData {
    ChartData {
        labels: vec!["Pass".to_string(), "Reject".to_string(), "Rework".to_string()],
        datasets: vec![Dataset {
            label: "Quality".to_string(),
            data: vec![quality.passed, quality.rejected, quality.reworked],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::build_hourly_series;
    use crate::config::TrackingConfig;
    use crate::payload::Payload;
    use serde_json::json;

    #[test]
    fn test_empty_series_renders_single_zero() {
        let chart = line_chart("OEE", &Series::default());
        assert_eq!(chart.labels, vec![""]);
        assert_eq!(chart.datasets[0].data, vec![0.0]);
        assert!(chart.is_aligned());
    }

    #[test]
    fn test_line_chart_label_spacing() {
        let samples: Vec<_> = (0..8)
            .map(|i| json!({ "time": format!("2024-01-01T{:02}:00:00Z", 6 + i), "value": i }))
            .collect();
        let series = Series::normalized(Some(&json!(samples)));
        let chart = line_chart("OEE", &series);

        assert!(chart.is_aligned());
        assert_eq!(chart.labels[0], "06:00");
        assert_eq!(chart.labels[1], "");
        assert_eq!(chart.labels[2], "08:00");
        assert_eq!(chart.labels[6], "12:00");
    }

    #[test]
    fn test_untimed_samples_have_blank_labels() {
        let chart = line_chart("Avail", &Series::normalized(Some(&json!([1, 2, 3]))));
        assert!(chart.labels.iter().all(String::is_empty));
        assert_eq!(chart.datasets[0].data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_hourly_chart_is_aligned() {
        let payload = Payload::from_value(json!({ "RB": { "HRP08:00": [{ "value": 7 }] } }));
        let chart = hourly_chart(&build_hourly_series(&payload, &TrackingConfig::default()));
        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.datasets[1].label, "Rear Back");
        assert_eq!(chart.datasets[1].data[2], 7.0);
        assert!(chart.is_aligned());
    }
}
