//! Shared building blocks for the manufacturing line dashboards: decoding
//! the line data payload into canonical samples, shaping it for charts,
//! and fetching it without letting stale responses win.

pub mod buckets;
pub mod chart;
pub mod client;
pub mod config;
pub mod drives;
pub mod errors;
pub mod fetch;
pub mod metrics;
pub mod payload;
pub mod report;
pub mod series;
pub mod summary;
pub mod types;

pub use client::{HttpSource, MetricsSource};
pub use errors::{DashError, Result};
pub use fetch::{FetchOutcome, Fetcher};
pub use payload::{DataQuery, DateSelector, Payload};
pub use report::LineReport;
pub use series::Series;
pub use types::{RawSample, Sample};
