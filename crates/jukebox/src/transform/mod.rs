//! Positional digit transforms.
//!
//! A transform reinterprets the decimal digits of a natural as
//! coefficients in another base. The digits themselves are always decimal;
//! only the base they are evaluated at varies.
//!
//! # Example
//!
//! ```
//! use jukebox::transform::{self, Transform};
//! use jukebox::Natural;
//!
//! let x = Natural::from(1907u32);
//!
//! // J_2(1907) = 1·8 + 9·4 + 0·2 + 7 = 51
//! assert_eq!(transform::j(&x, 2).unwrap(), Natural::from(51u8));
//! assert_eq!(transform::k(&x, 2).unwrap(), Natural::from(102u8));
//! assert_eq!(transform::b(&x, 2, 3).unwrap(), Natural::from(408u16));
//!
//! assert_eq!(Transform::ALL.len(), 3);
//! ```

mod functions;
mod selector;

pub use functions::{b, j, k};
pub use selector::Transform;
