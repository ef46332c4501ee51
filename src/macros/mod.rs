//! The short-circuit propagation macro for [`Outcome`](crate::Outcome)
//! chains.
//!
//! [`try_outcome!`](crate::try_outcome) is the idiomatic way to sequence
//! fallible steps inside a function that itself returns an `Outcome`: a
//! failure returns from the enclosing function immediately, a success
//! yields its value in place.

/// Evaluates an [`Outcome`](crate::Outcome)-producing expression, returning
/// the failure from the enclosing function or yielding the success value.
///
/// Usable only inside a function that returns `Outcome<_, E>` with the same
/// error type. The operand is evaluated exactly once; on failure a fresh
/// `Err` is returned, so the enclosing function's success type may differ
/// from the operand's. No unwinding is involved — only the frame invoking
/// the macro returns early.
///
/// # Examples
///
/// ```
/// use outcome_rail::{try_outcome, Outcome};
///
/// fn parse_even(text: &str) -> Outcome<i32, String> {
///     let n: i32 = match text.parse() {
///         Ok(n) => n,
///         Err(e) => return Outcome::Err(e.to_string()),
///     };
///     if n % 2 != 0 {
///         return Outcome::Err(format!("{n} is odd"));
///     }
///     Outcome::Ok(n)
/// }
///
/// fn halved(text: &str) -> Outcome<i32, String> {
///     let n = try_outcome!(parse_even(text));
///     Outcome::Ok(n / 2)
/// }
///
/// assert_eq!(halved("8").unwrap(), 4);
/// assert!(halved("7").is_error());
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(err) => return $crate::Outcome::Err(err),
        }
    };
}
