//! Error types surfaced by construction and by the invariant validator.

use thiserror::Error;

/// Rejected `TableConfig` values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial capacity must be greater than zero")]
    ZeroCapacity,

    #[error("max load factor must be a positive finite number, got {0}")]
    InvalidLoadFactor(f64),
}

/// A broken structural invariant reported by `HashTable::validate`.
///
/// None of these are expected in normal operation. A non-empty report
/// means a defect in chain or resize logic and should fail the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("bucket store has zero capacity")]
    ZeroCapacity,

    #[error("recorded count {recorded} does not match {actual} entries found in buckets")]
    CountMismatch { recorded: usize, actual: usize },

    #[error("bucket {bucket} records length {recorded} but holds {actual} entries")]
    ChainLength {
        bucket: usize,
        recorded: usize,
        actual: usize,
    },

    #[error("key {key:?} is stored more than once")]
    DuplicateKey { key: String },

    #[error("key {key:?} is stored in bucket {bucket} but hashes to bucket {expected}")]
    Misplaced {
        key: String,
        bucket: usize,
        expected: usize,
    },

    #[error("load factor {load} exceeds threshold {threshold}")]
    LoadFactorExceeded { load: f64, threshold: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_key_and_buckets() {
        let v = Violation::Misplaced {
            key: "k".to_string(),
            bucket: 2,
            expected: 4,
        };
        assert_eq!(
            v.to_string(),
            "key \"k\" is stored in bucket 2 but hashes to bucket 4"
        );

        let e = ConfigError::InvalidLoadFactor(-1.0);
        assert_eq!(
            e.to_string(),
            "max load factor must be a positive finite number, got -1"
        );
    }
}
