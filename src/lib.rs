//! Fixed-width unsigned integers for exact arithmetic
//!
//! This crate provides 128-bit and 256-bit unsigned integers for code that
//! must do exact integer math beyond the native word width, such as
//! protocol or contract logic, and that must treat overflow, underflow and
//! division by zero as faults rather than silent corruption.
//!
//! The focus is on **bit-exactness, predictability, and auditability**.
//! Every operation either returns the correct value or fails loudly.
//!
//! # Module overview
//!
//! - `primitives`
//!   The integer types and the engine behind them.
//!
//!   Values are stored as 64-bit limbs, least significant first. Addition
//!   and subtraction propagate carries limb by limb, multiplication is a
//!   schoolbook limb product, and division is classical estimate-and-correct
//!   long division: a 256-by-128 step built on a 128-by-64 step, each on
//!   normalized operands.
//!
//!   Each width comes in two disciplines, chosen by type:
//!   - `U128` / `U256` wrap modulo 2^width, like hardware integers
//!   - `SafeU128` / `SafeU256` reject any add, subtract or multiply whose
//!     exact result is out of range
//!
//! - `error`
//!   The single error type, [`UintError`], returned by every fallible
//!   operation, and its coarse [`FaultKind`] classification.
//!
//! # Example
//!
//! ```rust
//! use fixuint::primitives::{SafeU256, U256};
//!
//! let a = U256::from(43545453452u64);
//! let b = U256::from(2353454354u64);
//! assert_eq!(a * b, U256::new(10248516654965971928, 5, 0, 0));
//!
//! let (q, r) = U256::MAX.quo_rem(b).unwrap();
//! assert_eq!(q * b + r, U256::MAX);
//!
//! assert!(SafeU256::ZERO.try_sub(SafeU256::ONE).is_err());
//! ```
//!
//! # Design goals
//!
//! - No heap allocations outside of rendering and `to_vec`
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Faults reported through `Result`, with operators panicking like the
//!   native integer types
//!
//! # Features
//!
//! - `speed`: decodes byte buffers with an unrolled fast path

pub mod error;
pub mod primitives;

pub use error::{FaultKind, UintError, UintResult};
pub use primitives::{SafeU128, SafeU256, U128, U256};
