//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`try_outcome!`]
//! - **Types**: [`Outcome`], [`Fault`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn checked_sub(a: u32, b: u32) -> Outcome<u32, &'static str> {
//!     if b > a {
//!         return Outcome::Err("underflow");
//!     }
//!     Outcome::Ok(a - b)
//! }
//!
//! fn budget(total: u32, spent: u32) -> Outcome<u32, &'static str> {
//!     let left = try_outcome!(checked_sub(total, spent));
//!     Outcome::Ok(left / 2)
//! }
//!
//! assert_eq!(budget(10, 4).unwrap(), 3);
//! assert!(budget(4, 10).is_error());
//! ```

pub use crate::try_outcome;
pub use crate::types::{Fault, Outcome};
