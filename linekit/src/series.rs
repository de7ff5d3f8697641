use serde::Serialize;
use serde_json::Value;

use crate::types::{finite_or_zero, RawSample, Sample};

/// A decoded metric array. Order is whatever the source gave unless
/// built through [`Series::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series(Vec<Sample>);

impl Series {
    /// Decode in source order. Anything that is not an array is empty.
    pub fn decode(input: Option<&Value>) -> Self {
        match input {
            Some(Value::Array(items)) => Series(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| RawSample::decode(item).resolve(i))
                    .collect(),
            ),
            _ => Series::default(),
        }
    }

    /// Decode and order ascending by resolved time. Ties keep source order.
    pub fn normalized(input: Option<&Value>) -> Self {
        let mut series = Self::decode(input);
        series.sort_by_time();
        series
    }

    pub fn sort_by_time(&mut self) {
        self.0.sort_by_key(|s| s.time);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.0
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.value).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn latest(&self) -> f64 {
        self.0.last().map(|s| finite_or_zero(s.value)).unwrap_or(0.0)
    }

    pub fn first(&self) -> f64 {
        self.0.first().map(|s| finite_or_zero(s.value)).unwrap_or(0.0)
    }

    pub fn average(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.0.iter().map(|s| s.value).sum();
        finite_or_zero(sum / self.0.len() as f64)
    }
}

impl From<Vec<Sample>> for Series {
    fn from(samples: Vec<Sample>) -> Self {
        Series(samples)
    }
}

pub fn normalize_and_sort(input: &Value) -> Series {
    Series::normalized(Some(input))
}

pub fn latest_value_of(input: &Value) -> f64 {
    Series::decode(Some(input)).latest()
}

pub fn first_value_of(input: &Value) -> f64 {
    Series::decode(Some(input)).first()
}

pub fn average_of(input: &Value) -> f64 {
    Series::decode(Some(input)).average()
}
