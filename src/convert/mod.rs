//! Conversions between [`Outcome`] and [`core::result::Result`].
//!
//! An `Outcome` boundary should compose with `?`-based code without a trip
//! through [`unwrap`](Outcome::unwrap). Both directions are lossless: the
//! alternatives map one-to-one.

use crate::types::Outcome;

impl<R, E> Outcome<R, E> {
    /// Builds an `Outcome` from a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed = Outcome::from_result("42".parse::<i32>());
    /// assert_eq!(parsed.unwrap(), 42);
    /// ```
    #[inline]
    pub fn from_result(result: Result<R, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::Err(err),
        }
    }

    /// Converts this `Outcome` into a standard `Result`, consuming it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn fetch() -> Outcome<u32, String> {
    ///     Outcome::Ok(7)
    /// }
    ///
    /// fn caller() -> Result<u32, String> {
    ///     let v = fetch().into_result()?;
    ///     Ok(v + 1)
    /// }
    ///
    /// assert_eq!(caller(), Ok(8));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }
}

// The reverse impl (`From<Outcome> for Result`) would leave `R` and `E`
// uncovered in the foreign self type, which the coherence rules forbid;
// `into_result` is the inherent escape hatch instead.
impl<R, E> From<Result<R, E>> for Outcome<R, E> {
    #[inline]
    fn from(result: Result<R, E>) -> Self {
        Outcome::from_result(result)
    }
}
