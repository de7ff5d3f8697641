// services/line-dash/src/mock.rs
//
// Mock line data source for demo mode

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveTime, TimeDelta};
use rand::Rng;
use serde_json::{json, Map, Value};

use linekit::config::TrackingConfig;
use linekit::drives::{DriveReading, DriveStatus};
use linekit::{DataQuery, DateSelector, MetricsSource, Payload};

/// Serves payloads shaped like the line data endpoint, with a short random
/// latency so loading states and request supersession are visible.
pub struct MockSource {
    tracking: TrackingConfig,
    max_latency_ms: u64,
}

impl MockSource {
    pub fn new(tracking: TrackingConfig) -> Self {
        Self {
            tracking,
            max_latency_ms: 400,
        }
    }

    pub fn with_latency(mut self, max_latency_ms: u64) -> Self {
        self.max_latency_ms = max_latency_ms;
        self
    }

    pub fn generate(&self, query: &DataQuery) -> Payload {
        let mut rng = rand::thread_rng();
        let start_hour = shift_start_hour(&query.shift);
        let day = resolve_date(query.date);
        let start = day.and_time(NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap_or_default());

        let mut lines = Map::new();
        for spec in &self.tracking.lines {
            let mut metrics = Map::new();

            // 15 minute samples across the 8 hour shift, sent newest first
            // the way the backend does.
            for name in ["OEE", "Quality", "Productivity", "Avail"] {
                let base: f64 = rng.gen_range(55.0..90.0);
                let samples: Vec<Value> = (0..32)
                    .rev()
                    .map(|i| {
                        let time = start + TimeDelta::minutes(15 * i);
                        json!({
                            "_time": time.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                            "_value": (base + rng.gen_range(-8.0..8.0)).clamp(0.0, 100.0),
                        })
                    })
                    .collect();
                metrics.insert(name.to_string(), Value::Array(samples));
            }

            let mut jph_total = 0.0;
            for hour in 0..8u32 {
                let jph: f64 = rng.gen_range(8.0..16.0);
                jph_total += jph;
                let key = format!("{}{:02}:00", self.tracking.bucket_prefix, (start_hour + hour) % 24);
                metrics.insert(key, json!([{ "value": jph }]));
            }
            metrics.insert("JPH".to_string(), json!(jph_total / 8.0));

            let passed = rng.gen_range(250..400);
            metrics.insert("Total_Prod_Today".to_string(), json!([{ "value": passed }]));
            metrics.insert("reject".to_string(), json!([{ "value": rng.gen_range(0..20) }]));
            metrics.insert("rework".to_string(), json!([{ "value": rng.gen_range(0..12) }]));
            metrics.insert(
                "total_production_set".to_string(),
                json!([{ "value": passed / 3 }]),
            );

            lines.insert(spec.name.clone(), Value::Object(metrics));
        }

        Payload::from_value(Value::Object(lines))
    }
}

#[async_trait]
impl MetricsSource for MockSource {
    async fn fetch(&self, query: &DataQuery) -> linekit::Result<Payload> {
        if self.max_latency_ms > 0 {
            let latency = rand::thread_rng().gen_range(0..=self.max_latency_ms);
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        Ok(self.generate(query))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn shift_start_hour(shift: &str) -> u32 {
    match shift.trim().to_ascii_uppercase().as_str() {
        "SHIFT B" => 14,
        "SHIFT C" => 22,
        _ => 6,
    }
}

fn resolve_date(date: DateSelector) -> NaiveDate {
    let today = Local::now().date_naive();
    match date {
        DateSelector::Today => today,
        DateSelector::Yesterday => today - TimeDelta::days(1),
        DateSelector::Custom(d) => d,
    }
}

/// Drive readings for the drive monitoring panel.
pub fn drive_readings() -> Vec<DriveReading> {
    let mut rng = rand::thread_rng();
    (1..=8)
        .map(|number| {
            let running = number > 2;
            DriveReading {
                number,
                current_amps: if running {
                    rng.gen_range(1.10..1.25)
                } else {
                    rng.gen_range(0.70..0.80)
                },
                voltage_volts: if running {
                    rng.gen_range(370.0..390.0)
                } else {
                    rng.gen_range(220.0..230.0)
                },
                frequency_hz: if running {
                    rng.gen_range(48.0..50.5)
                } else {
                    rng.gen_range(57.0..60.0)
                },
                status: if running {
                    DriveStatus::Running
                } else {
                    DriveStatus::Stopped
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linekit::LineReport;

    #[tokio::test]
    async fn test_mock_payload_feeds_a_full_report() {
        let tracking = TrackingConfig::default();
        let source = MockSource::new(tracking.clone()).with_latency(0);
        let query = DataQuery::new(&tracking, "Shift A", DateSelector::Today);
        let payload = source.fetch(&query).await.unwrap();

        let report = LineReport::from_payload(&payload, &tracking);
        assert!(report.total_sets() > 0.0);
        assert!(report.quality_percent > 0.0 && report.quality_percent <= 100.0);
        assert_eq!(report.jph.labels.first().unwrap(), "06:00");
        assert_eq!(report.jph.line("RB").unwrap().values.len(), 9);

        let oee = report.trend("Front_Line", "OEE").unwrap();
        assert_eq!(oee.points, 32);
        let times: Vec<_> = oee.series.samples().iter().map(|s| s.time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_late_shift_buckets_extend_the_axis() {
        let tracking = TrackingConfig::default();
        let source = MockSource::new(tracking.clone());
        let query = DataQuery::new(&tracking, "Shift B", DateSelector::Yesterday);
        let report = LineReport::from_payload(&source.generate(&query), &tracking);
        assert_eq!(report.jph.hours.first(), Some(&6));
        assert_eq!(report.jph.hours.last(), Some(&21));
        assert_eq!(report.jph.line("RC").unwrap().values[0], 0.0);
    }

    #[test]
    fn test_drive_readings() {
        let drives = drive_readings();
        assert_eq!(drives.len(), 8);
        assert_eq!(drives[0].status, DriveStatus::Stopped);
        assert_eq!(drives[7].status, DriveStatus::Running);
    }
}
