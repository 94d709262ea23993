// File: crates/waterfall-core/src/view.rs
// Value extent covering every bar, for consumers that size a value axis.

use crate::series::WaterfallDatum;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

impl ValueExtent {
    /// Span all bar ranges plus the zero anchor. Non-finite bounds are skipped;
    /// empty input gives `0..1`.
    pub fn from_data(data: &[WaterfallDatum]) -> Self {
        let mut min = 0.0f64;
        let mut max = 0.0f64;
        for d in data {
            for v in [d.range.bottom(), d.range.top()] {
                if v.is_finite() {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
        if (max - min).abs() < 1e-9 { max = min + 1.0; }
        Self { min, max }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Grow both ends by `frac` of the span.
    pub fn padded(&self, frac: f64) -> Self {
        let m = self.span() * frac;
        Self { min: self.min - m, max: self.max + m }
    }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}
