// File: crates/waterfall-core/src/lib.rs
// Summary: Core library entry point; exports the waterfall data model and range computation.

pub mod error;
pub mod load;
pub mod series;
pub mod types;
pub mod view;
pub mod waterfall;

pub use error::{Result, WaterfallError};
pub use load::{load_entries_csv, read_entries_csv};
pub use series::{RawEntry, WaterfallDatum};
pub use types::{BarKind, BarRange};
pub use view::ValueExtent;
pub use waterfall::{compute, final_total, ranges, try_compute, Ranges};
