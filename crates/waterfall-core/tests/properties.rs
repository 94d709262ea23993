// File: crates/waterfall-core/tests/properties.rs
// Purpose: Property checks over generated entry lists (order, chaining, total anchoring).
// Values are integer-valued so every running sum is exact in f64.

use proptest::prelude::*;
use waterfall_core::{compute, final_total, RawEntry};

fn entry() -> impl Strategy<Value = RawEntry> {
    ("[a-z]{1,8}", -10_000i32..10_000, prop::bool::weighted(0.2))
        .prop_map(|(name, v, total)| RawEntry::new(name, v as f64).with_total(total))
}

fn entries() -> impl Strategy<Value = Vec<RawEntry>> {
    prop::collection::vec(entry(), 0..64)
}

proptest! {
    #[test]
    fn preserves_length_and_order(input in entries()) {
        let out = compute(&input);
        prop_assert_eq!(out.len(), input.len());
        for (d, e) in out.iter().zip(&input) {
            prop_assert_eq!(&d.name, &e.name);
            prop_assert_eq!(d.value, e.value);
            prop_assert_eq!(d.is_total, e.is_total);
        }
    }

    #[test]
    fn bottom_never_above_top(input in entries()) {
        for d in compute(&input) {
            prop_assert!(d.range.bottom() <= d.range.top());
            prop_assert_eq!(d.range.height(), d.value.abs());
        }
    }

    #[test]
    fn totals_anchor_at_zero(input in entries()) {
        for d in compute(&input).iter().filter(|d| d.is_total) {
            prop_assert_eq!(d.range.as_tuple(), (d.value.min(0.0), d.value.max(0.0)));
        }
    }

    #[test]
    fn incremental_bars_chain(input in entries()) {
        let out = compute(&input);
        let mut running = 0.0f64;
        for d in out.iter().filter(|d| !d.is_total) {
            // Each incremental bar starts where the previous one ended.
            prop_assert!(d.range.contains(running));
            running += d.value;
            prop_assert!(d.range.contains(running));
        }
        prop_assert_eq!(running, final_total(&input));
    }

    #[test]
    fn last_top_is_sum_without_totals(raw in prop::collection::vec(0i32..10_000, 1..64)) {
        let input: Vec<RawEntry> = raw.iter().map(|&v| RawEntry::new("x", v as f64)).collect();
        let out = compute(&input);
        let sum: f64 = raw.iter().map(|&v| v as f64).fold(0.0, |a, b| a + b);
        prop_assert_eq!(out.last().map(|d| d.range.top()), Some(sum));
    }

    #[test]
    fn removing_totals_leaves_other_ranges(input in entries()) {
        let with_totals = compute(&input);
        let stripped: Vec<RawEntry> = input.iter().filter(|e| !e.is_total).cloned().collect();
        let without = compute(&stripped);
        let kept: Vec<_> = with_totals.into_iter().filter(|d| !d.is_total).collect();
        prop_assert_eq!(kept, without);
    }

    #[test]
    fn repeated_calls_are_identical(input in entries()) {
        let a = compute(&input);
        let b = compute(&input);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.range.bottom().to_bits(), y.range.bottom().to_bits());
            prop_assert_eq!(x.range.top().to_bits(), y.range.top().to_bits());
        }
    }
}
