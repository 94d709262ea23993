// File: crates/waterfall-core/tests/strict.rs
// Purpose: Validate strict computation rejects non-finite values and otherwise matches `compute`.

use waterfall_core::{compute, try_compute, RawEntry, WaterfallError};

#[test]
fn finite_input_matches_permissive() {
    let entries = vec![RawEntry::new("A", 12.5), RawEntry::new("B", -2.25), RawEntry::total("T", 10.25)];
    let strict = try_compute(&entries).expect("finite input");
    assert_eq!(strict, compute(&entries));
}

#[test]
fn empty_input_is_ok() {
    assert!(try_compute(&[]).expect("empty").is_empty());
}

#[test]
fn rejects_first_nan_with_index() {
    let entries = vec![
        RawEntry::new("A", 1.0),
        RawEntry::new("B", f64::NAN),
        RawEntry::new("C", f64::INFINITY),
    ];
    match try_compute(&entries) {
        Err(WaterfallError::NonFiniteValue { index, name, value }) => {
            assert_eq!(index, 1);
            assert_eq!(name, "B");
            assert!(value.is_nan());
        }
        other => panic!("expected NonFiniteValue, got {other:?}"),
    }
}

#[test]
fn rejects_infinite_total() {
    let entries = vec![RawEntry::total("T", f64::NEG_INFINITY)];
    let err = try_compute(&entries).unwrap_err();
    assert!(matches!(err, WaterfallError::NonFiniteValue { index: 0, .. }));
    assert!(err.to_string().contains("\"T\""), "message: {err}");
}
