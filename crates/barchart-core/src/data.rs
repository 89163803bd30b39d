// File: crates/barchart-core/src/data.rs
// Summary: Data points and the normalizer that splits them into parallel label/value sequences.

use serde::Deserialize;

use crate::error::{ChartError, ChartResult};

/// One category of the chart. Input order is the category axis order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

impl<S: Into<String>> From<(S, f64)> for DataPoint {
    fn from((label, value): (S, f64)) -> Self {
        Self::new(label, value)
    }
}

/// Parallel label/value sequences plus aggregate statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedData {
    labels: Vec<String>,
    values: Vec<f64>,
    value_max: f64,
    value_min: f64,
}

impl NormalizedData {
    /// Split `points` preserving order.
    ///
    /// Fails with `EmptyDataset` for no points and `UnsupportedValue` for a negative
    /// or non-finite value; bars only grow upward from a zero baseline.
    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let mut labels = Vec::with_capacity(points.len());
        let mut values = Vec::with_capacity(points.len());
        let mut value_max = f64::NEG_INFINITY;
        let mut value_min = f64::INFINITY;
        for (index, p) in points.iter().enumerate() {
            if !p.value.is_finite() || p.value < 0.0 {
                return Err(ChartError::UnsupportedValue {
                    index,
                    label: p.label.clone(),
                    value: p.value,
                });
            }
            value_max = value_max.max(p.value);
            value_min = value_min.min(p.value);
            labels.push(p.label.clone());
            values.push(p.value);
        }

        Ok(Self { labels, values, value_max, value_min })
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn values(&self) -> &[f64] { &self.values }
    /// Number of data points; always at least 1.
    pub fn item_count(&self) -> usize { self.values.len() }
    pub fn value_max(&self) -> f64 { self.value_max }
    pub fn value_min(&self) -> f64 { self.value_min }
}
