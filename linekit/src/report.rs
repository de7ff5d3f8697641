use serde::Serialize;

use crate::buckets::{build_hourly_series, HourlySeries};
use crate::chart::{hourly_chart, line_chart, quality_chart, ChartData};
use crate::config::TrackingConfig;
use crate::payload::Payload;
use crate::summary::{collect_production, collect_trends, LineProduction, MetricTrend, QualitySummary};

/// Everything one dashboard screen shows, derived from a single response.
/// Rebuilt from scratch on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineReport {
    pub production: Vec<LineProduction>,
    pub quality: QualitySummary,
    pub quality_percent: f64,
    pub trends: Vec<MetricTrend>,
    pub jph: HourlySeries,
}

impl LineReport {
    pub fn from_payload(payload: &Payload, tracking: &TrackingConfig) -> Self {
        let quality = QualitySummary::from_payload(payload, tracking);
        Self {
            production: collect_production(payload, tracking),
            quality_percent: quality.quality_percent(),
            quality,
            trends: collect_trends(payload, tracking),
            jph: build_hourly_series(payload, tracking),
        }
    }

    pub fn trend(&self, line: &str, metric: &str) -> Option<&MetricTrend> {
        self.trends.iter().find(|t| t.line == line && t.metric == metric)
    }

    pub fn total_sets(&self) -> f64 {
        self.production.iter().map(|p| p.total_sets).sum()
    }

    pub fn trend_chart(&self, line: &str, metric: &str) -> Option<ChartData> {
        self.trend(line, metric)
            .map(|t| line_chart(&format!("{} {}", t.line, t.metric), &t.series))
    }

    pub fn jph_chart(&self) -> ChartData {
        hourly_chart(&self.jph)
    }

    pub fn quality_chart(&self) -> ChartData {
        quality_chart(&self.quality)
    }
}
