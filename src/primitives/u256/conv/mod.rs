//! Conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U256` primitive and other representations.
//!
//! Each submodule is responsible for one family of conversions, following
//! these principles:
//! - widening conversions are infallible (`From`)
//! - narrowing conversions either truncate through a named `to_*` method
//!   or fail through `TryFrom`
//! - byte order is always explicit
//!
//! The conversions are split by source kind to keep each file small and
//! focused.

mod bytes;
mod float;
mod int;
mod u128;
