// File: crates/waterfall-core/src/error.rs
// Summary: Error type for strict computation and CSV loading.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WaterfallError {
    #[error("entry {index} ({name:?}) has non-finite value {value}")]
    NonFiniteValue { index: usize, name: String, value: f64 },

    #[error("invalid total flag {value:?} on line {line}")]
    InvalidTotalFlag { line: u64, value: String },

    #[error("malformed CSV row on line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WaterfallError>;
