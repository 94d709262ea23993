// File: crates/waterfall-core/src/series.rs
// Summary: Input entries and computed waterfall datums.

use serde::{Deserialize, Serialize};

use crate::types::{BarKind, BarRange};

/// One labeled contribution (or checkpoint) in a waterfall sequence.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub name: String,
    /// Signed contribution; for totals, the absolute checkpoint value.
    pub value: f64,
    #[serde(default, alias = "is_total", alias = "total")]
    pub is_total: bool,
}

impl RawEntry {
    /// Incremental entry that moves the running total by `value`.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value, is_total: false }
    }

    /// Checkpoint bar anchored at zero.
    pub fn total(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value, is_total: true }
    }

    pub fn with_total(mut self, is_total: bool) -> Self {
        self.is_total = is_total;
        self
    }
}

/// A computed bar: the input entry plus its vertical range.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallDatum {
    pub name: String,
    pub value: f64,
    pub range: BarRange,
    pub is_total: bool,
}

impl WaterfallDatum {
    pub fn kind(&self) -> BarKind {
        if self.is_total {
            BarKind::Total
        } else if self.value < 0.0 {
            BarKind::Decrease
        } else {
            BarKind::Increase
        }
    }

    pub fn bottom(&self) -> f64 { self.range.bottom() }
    pub fn top(&self) -> f64 { self.range.top() }
}
