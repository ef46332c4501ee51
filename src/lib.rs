//! A move-only, single-use container for "either a value or an error",
//! with railway-style combinators and a short-circuit propagation macro.
//!
//! [`Outcome<R, E>`](Outcome) makes fallibility part of a function's
//! signature instead of an implicit property of its body. Errors travel as
//! plain data through [`map_res`](Outcome::map_res),
//! [`map_err`](Outcome::map_err), [`and_then`](Outcome::and_then) and
//! [`or_else`](Outcome::or_else); they become an actual panic only at an
//! explicit terminal call ([`unwrap`](Outcome::unwrap) /
//! [`expect`](Outcome::expect)), or propagate outward through
//! [`try_outcome!`].
//!
//! # Examples
//!
//! ## Returning an `Outcome`
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn divide(num: i32, den: i32) -> Outcome<i32, String> {
//!     if den == 0 {
//!         return Outcome::Err("division by zero".to_string());
//!     }
//!     Outcome::Ok(num / den)
//! }
//!
//! assert_eq!(divide(4, 2).unwrap(), 2);
//! assert!(divide(1, 0).is_error());
//! ```
//!
//! ## Chaining fallible steps
//!
//! ```
//! use outcome_rail::{try_outcome, Outcome};
//!
//! fn lookup(key: &str) -> Outcome<u32, &'static str> {
//!     match key {
//!         "answer" => Outcome::Ok(42),
//!         _ => Outcome::Err("unknown key"),
//!     }
//! }
//!
//! fn doubled(key: &str) -> Outcome<u32, &'static str> {
//!     let found = try_outcome!(lookup(key));
//!     Outcome::Ok(found * 2)
//! }
//!
//! assert_eq!(doubled("answer").unwrap(), 84);
//! assert!(doubled("question").is_error());
//! ```
//!
//! ## Two error tiers
//!
//! A modeled error `E` is an expected outcome and never raised implicitly.
//! Misusing the API (reading the wrong alternative through
//! [`into_value`](Outcome::into_value) /
//! [`into_error`](Outcome::into_error)) raises a [`Fault`], a distinct
//! category that must never be confused with `E`.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and the standard `Result`
pub mod convert;
/// The `try_outcome!` short-circuit propagation macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `Outcome` container and the `Fault` misuse category
pub mod types;

pub use types::{Fault, Outcome};
