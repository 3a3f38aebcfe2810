//! Error types for cargo load planning.

use crate::models::Money;
use thiserror::Error;

/// Internal consistency violations detected during reconstruction.
///
/// Any of these means the capacity table and the backward walk disagree,
/// which would silently produce a wrong manifest if tolerated. They abort
/// the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    /// The backward walk drove a remaining budget below zero.
    #[error(
        "remaining capacity went negative at item {item_index} \
         (weight {weight_left}, volume {volume_left})"
    )]
    NegativeCapacity {
        /// Index of the item whose subtraction underflowed.
        item_index: usize,
        /// Remaining weight budget after subtraction.
        weight_left: i64,
        /// Remaining volume budget after subtraction.
        volume_left: i64,
    },

    /// The reconstructed subset does not sum to the table optimum.
    #[error("reconstructed value {actual} does not match table optimum {expected}")]
    ValueMismatch {
        /// Optimum reported by the table.
        expected: Money,
        /// Sum of the reconstructed subset.
        actual: Money,
    },

    /// A selected load exceeds the vehicle's capacity.
    #[error("selected {dimension} {used} exceeds capacity {capacity} for vehicle {plate}")]
    CapacityExceeded {
        /// Vehicle plate.
        plate: String,
        /// `"weight"` or `"volume"`.
        dimension: &'static str,
        /// Load actually selected.
        used: u32,
        /// Vehicle capacity in that dimension.
        capacity: u32,
    },
}

/// Errors from parsing a problem instance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before the expected field.
    #[error("unexpected end of input, expected {field}")]
    UnexpectedEnd {
        /// Description of the missing field.
        field: &'static str,
    },

    /// A field that should be an unsigned integer was not.
    #[error("invalid {field}: {token:?}")]
    InvalidNumber {
        /// Description of the field.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// A monetary value was malformed (more than two decimals, not a number).
    #[error("invalid monetary value {token:?}")]
    InvalidMoney {
        /// The offending token.
        token: String,
    },
}

/// Errors produced by the load planner.
#[derive(Debug, Error)]
pub enum Error {
    /// The DP table buffer could not be allocated.
    ///
    /// Raised both when the cell count overflows `usize` and when the
    /// allocator refuses the reservation. A partially allocated table is
    /// never used.
    #[error(
        "cannot allocate capacity table for {items} items, \
         weight cap {weight_cap}, volume cap {volume_cap}"
    )]
    TableAllocation {
        /// Number of items in the pool.
        items: usize,
        /// Vehicle weight capacity.
        weight_cap: u32,
        /// Vehicle volume capacity.
        volume_cap: u32,
    },

    /// Table/reconstruction inconsistency; see [`InvariantError`].
    #[error("allocation invariant violated: {0}")]
    Invariant(#[from] InvariantError),

    /// Malformed problem instance; see [`ParseError`].
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Underlying I/O failure while reading or writing a report.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
