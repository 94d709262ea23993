// File: crates/waterfall-core/src/waterfall.rs
// Summary: Running-total range computation for waterfall bars.
// Notes:
// - Totals anchor at zero and never feed the running total.
// - `compute` does no validation; NaN and infinities flow through the
//   arithmetic. `try_compute` rejects them up front.

use crate::error::{Result, WaterfallError};
use crate::series::{RawEntry, WaterfallDatum};
use crate::types::BarRange;

/// Lazy range computation over borrowed entries. The running total belongs
/// to this adapter only and starts at 0.
#[derive(Clone, Debug)]
pub struct Ranges<'a, I>
where
    I: Iterator<Item = &'a RawEntry>,
{
    entries: I,
    running_total: f64,
}

impl<'a, I> Ranges<'a, I>
where
    I: Iterator<Item = &'a RawEntry>,
{
    /// Sum of the incremental values yielded so far.
    pub fn running_total(&self) -> f64 { self.running_total }
}

impl<'a, I> Iterator for Ranges<'a, I>
where
    I: Iterator<Item = &'a RawEntry>,
{
    type Item = WaterfallDatum;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        let v = entry.value;
        let range = if entry.is_total {
            BarRange::new(0.0, v)
        } else {
            let start = self.running_total;
            self.running_total += v;
            if v >= 0.0 { BarRange::new(start, start + v) } else { BarRange::new(start + v, start) }
        };
        Some(WaterfallDatum {
            name: entry.name.clone(),
            value: v,
            range,
            is_total: entry.is_total,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.entries.size_hint() }
}

impl<'a, I> ExactSizeIterator for Ranges<'a, I> where I: ExactSizeIterator<Item = &'a RawEntry> {}

/// Start a lazy range computation over `entries`.
pub fn ranges<'a, I>(entries: I) -> Ranges<'a, I::IntoIter>
where
    I: IntoIterator<Item = &'a RawEntry>,
{
    Ranges { entries: entries.into_iter(), running_total: 0.0 }
}

/// Compute one bar range per entry, preserving order. Never fails.
pub fn compute(entries: &[RawEntry]) -> Vec<WaterfallDatum> {
    ranges(entries).collect()
}

/// Like [`compute`], but rejects the first non-finite value.
pub fn try_compute(entries: &[RawEntry]) -> Result<Vec<WaterfallDatum>> {
    if let Some((index, e)) = entries.iter().enumerate().find(|(_, e)| !e.value.is_finite()) {
        return Err(WaterfallError::NonFiniteValue { index, name: e.name.clone(), value: e.value });
    }
    Ok(compute(entries))
}

/// Running total after the last entry (sum of incremental values).
pub fn final_total(entries: &[RawEntry]) -> f64 {
    entries.iter().filter(|e| !e.is_total).fold(0.0, |acc, e| acc + e.value)
}
