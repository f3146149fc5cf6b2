//! Conversion utilities for `U128`
//!
//! Each submodule covers one family of sources or targets:
//! - `int`: native integers and booleans (extension and narrowing)
//! - `bytes`: fixed-size and slice serialization in either byte order
//! - `float`: truncating construction from `f32` / `f64`
//!
//! Widening conversions are infallible `From` impls. Narrowing comes in two
//! forms: truncating `to_*` methods, and `TryFrom` impls that fail with
//! [`UintError::Truncation`](crate::UintError::Truncation) instead of
//! dropping set bits.

mod bytes;
mod float;
mod int;
