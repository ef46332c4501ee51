//! Core container and fault types.
//!
//! [`Outcome`] is the success-or-error container itself; [`Fault`] is the
//! separate category raised on API misuse, never as a normal outcome.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let fetched: Outcome<u32, &str> = Outcome::Ok(7);
//! let label = fetched.map_res(|v| v * 6).unwrap();
//! assert_eq!(label, 42);
//! ```

pub mod fault;
pub mod outcome;

pub use fault::*;
pub use outcome::*;
