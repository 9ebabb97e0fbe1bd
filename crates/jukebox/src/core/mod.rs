//! Core data types.
//!
//! This module contains the exact arithmetic every transform is built on:
//!
//! - [`natural::Natural`]: Immutable non-negative integer with cached decimal digits
//! - [`ops`]: Arithmetic and bitwise operations returning fresh naturals
//! - [`validate`]: Integral coercion, range, sign, and index checks
//! - [`error`]: The crate-wide error taxonomy

pub mod error;
pub mod natural;
pub mod ops;
pub mod validate;
