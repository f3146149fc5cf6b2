//! Error type shared by every fixed-width integer in the crate.
//!
//! All fallible operations return [`UintError`]. Faults are raised at the
//! point of detection and never recovered internally: an operation either
//! returns a valid value or fails without touching its operands.

use thiserror::Error;

/// Coarse classification of a [`UintError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Negative shift, division by zero, or a quotient that does not fit.
    Range,
    /// Checked arithmetic whose true result exceeds the maximum.
    Overflow,
    /// Checked arithmetic whose true result would be negative.
    Underflow,
    /// Unsupported construction source or malformed buffer.
    Type,
}

/// Errors raised by fixed-width integer operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UintError {
    /// A limb shift was requested with a negative amount.
    #[error("negative shift: {0}")]
    NegativeShift(i32),

    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The quotient of a narrowing division does not fit the result width.
    #[error("quotient overflow")]
    QuotientOverflow,

    /// A checked operation produced a value above the maximum.
    #[error("overflow during {op}")]
    Overflow { op: &'static str },

    /// A checked operation produced a value below zero.
    #[error("underflow during {op}")]
    Underflow { op: &'static str },

    /// A byte buffer is empty or not a multiple of the integer width.
    #[error("invalid buffer length {len}, expected a multiple of {width}")]
    InvalidLength { len: usize, width: usize },

    /// The construction source cannot be represented.
    #[error("unsupported source: {0}")]
    UnsupportedSource(&'static str),

    /// Rendering was requested in a radix other than 10 or 16.
    #[error("unsupported radix {0}, expected 10 or 16")]
    UnsupportedRadix(u32),

    /// A narrowing conversion would discard set bits.
    #[error("value does not fit the target type")]
    Truncation,
}

impl UintError {
    /// Returns the fault class of this error.
    pub fn kind(&self) -> FaultKind {
        match self {
            UintError::NegativeShift(_)
            | UintError::DivisionByZero
            | UintError::QuotientOverflow => FaultKind::Range,
            UintError::Overflow { .. } => FaultKind::Overflow,
            UintError::Underflow { .. } => FaultKind::Underflow,
            UintError::InvalidLength { .. }
            | UintError::UnsupportedSource(_)
            | UintError::UnsupportedRadix(_)
            | UintError::Truncation => FaultKind::Type,
        }
    }
}

/// Convenient Result type for fixed-width integer operations.
pub type UintResult<T> = Result<T, UintError>;
