// File: crates/waterfall-core/src/types.rs
// Summary: Shared value types (bar range, bar classification).

use serde::Serialize;

/// Vertical extent of one floating bar, in the same units as the entry value.
/// Contract: `bottom <= top` whenever both endpoints are comparable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BarRange {
    bottom: f64,
    top: f64,
}

impl BarRange {
    /// Build a range from two endpoints given in either order.
    /// NaN endpoints are stored as given (no comparison can order them).
    pub fn new(a: f64, b: f64) -> Self {
        if b < a { Self { bottom: b, top: a } } else { Self { bottom: a, top: b } }
    }

    /// Zero-height range at `at`.
    pub fn point(at: f64) -> Self {
        Self { bottom: at, top: at }
    }

    pub fn bottom(&self) -> f64 { self.bottom }
    pub fn top(&self) -> f64 { self.top }

    /// Bar height (top - bottom); never negative for finite ranges.
    pub fn height(&self) -> f64 { self.top - self.bottom }

    /// True when `v` lies within the closed interval.
    pub fn contains(&self, v: f64) -> bool { v >= self.bottom && v <= self.top }

    /// The pair as `(bottom, top)`.
    pub fn as_tuple(&self) -> (f64, f64) { (self.bottom, self.top) }
}

impl From<BarRange> for (f64, f64) {
    fn from(r: BarRange) -> Self { r.as_tuple() }
}

/// Display classification of a bar. Renderers pick colors from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    Increase,
    Decrease,
    Total,
}

impl BarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarKind::Increase => "increase",
            BarKind::Decrease => "decrease",
            BarKind::Total => "total",
        }
    }
}

impl std::fmt::Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
