use core::fmt::Display;

use crate::types::Fault;

/// A move-only container holding either a success value of type `R` or an
/// error value of type `E` — never both, never neither.
///
/// `Outcome` lets a function signature state at the type level that it can
/// fail, without committing the caller to panic-based control flow. Errors
/// ride along as plain data until the caller either handles them with a
/// combinator or converts them into a panic at an explicit terminal call
/// ([`unwrap`](Outcome::unwrap) / [`expect`](Outcome::expect)).
///
/// The two variants are the only construction path: there is no default
/// value, and the type is deliberately neither `Clone` nor `Copy`. An
/// `Outcome` represents a single, non-duplicable event; its payload can be
/// extracted exactly once.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn divide(num: i32, den: i32) -> Outcome<i32, String> {
///     if den == 0 {
///         return Outcome::Err("division by zero".to_string());
///     }
///     Outcome::Ok(num / den)
/// }
///
/// assert_eq!(divide(4, 2).unwrap(), 2);
/// assert!(divide(4, 0).is_error());
/// ```
///
/// Every combinator takes `self` by value, so reuse after consumption is a
/// compile error rather than a runtime surprise:
///
/// ```compile_fail
/// use outcome_rail::Outcome;
///
/// let res: Outcome<i32, &str> = Outcome::Ok(1);
/// let _ = res.is_ok(); // borrowing inspection is fine
/// let _ = res.unwrap();
/// let _ = res.unwrap(); // error: use of moved value
/// ```
#[must_use = "this `Outcome` may hold an error, which should be handled"]
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<R, E> {
    /// The success alternative.
    Ok(R),
    /// The failure alternative.
    Err(E),
}

impl<R, E> Outcome<R, E> {
    /// Returns `true` iff the success alternative is held.
    ///
    /// Pure and non-consuming; callable any number of times before a
    /// consuming operation runs.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` iff the failure alternative is held.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Maps the success value with `f`, leaving an error untouched.
    ///
    /// `f` is never invoked on the failure alternative. A panic raised
    /// inside `f` is not caught; it propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled: Outcome<i32, &str> = Outcome::Ok(21).map_res(|v| v * 2);
    /// assert_eq!(doubled.unwrap(), 42);
    /// ```
    #[inline]
    pub fn map_res<R2, F>(self, f: F) -> Outcome<R2, E>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Maps the error value with `f`, leaving a success value untouched.
    ///
    /// Useful for enriching an error with context or converting it to the
    /// error type of an enclosing layer. `f` is never invoked on the
    /// success alternative, and panics raised inside `f` are not caught.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<R, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => Outcome::Err(f(err)),
        }
    }

    /// Calls `f` with the success value and returns its `Outcome`,
    /// short-circuiting on an existing error without invoking `f`.
    ///
    /// This is the monadic bind: it chains fallible steps without manual
    /// branching.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(v: i32) -> Outcome<i32, &'static str> {
    ///     if v % 2 == 0 {
    ///         Outcome::Ok(v / 2)
    ///     } else {
    ///         Outcome::Err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<_, &str>::Ok(8).and_then(half).and_then(half), Outcome::Ok(2));
    /// assert!(Outcome::<_, &str>::Ok(7).and_then(half).is_error());
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Outcome<R2, E>
    where
        F: FnOnce(R) -> Outcome<R2, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(err) => Outcome::Err(err),
        }
    }

    /// Calls `f` with the held error, passing a success value through
    /// unchanged. The recovery counterpart of [`and_then`](Outcome::and_then).
    ///
    /// `f` receives the error alternative and may produce a replacement
    /// success value or a new error of a different type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered: Outcome<i32, ()> =
    ///     Outcome::<i32, &str>::Err("gone").or_else(|_| Outcome::Ok(0));
    /// assert_eq!(recovered, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<R, E2>
    where
        F: FnOnce(E) -> Outcome<R, E2>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(err) => f(err),
        }
    }

    /// Returns the success value by move, or panics with the held error.
    ///
    /// This is the designed interop point with conventional fatal-on-error
    /// handling: an `Outcome`-typed boundary can always be collapsed, at
    /// the call site, into "succeed or abort".
    ///
    /// # Panics
    ///
    /// Panics if the failure alternative is held; the panic message wraps
    /// the error's `Display` output.
    #[inline]
    pub fn unwrap(self) -> R
    where
        E: Display,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(err) => panic!("called `Outcome::unwrap()` on an error value: {err}"),
        }
    }

    /// Returns the success value by move, or panics with `substitute`
    /// instead of the held error.
    ///
    /// Used to add caller-specific context at the extraction site. The
    /// originally held error is discarded, not chained.
    ///
    /// # Panics
    ///
    /// Panics with `substitute`'s `Display` output if the failure
    /// alternative is held.
    #[inline]
    pub fn expect<M>(self, substitute: M) -> R
    where
        M: Display,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{substitute}"),
        }
    }

    /// Extracts the success value, faulting if the error alternative is
    /// held.
    ///
    /// Unlike [`unwrap`](Outcome::unwrap), reaching the wrong alternative
    /// here is a programming error, not a modeled failure: the raised
    /// [`Fault`] is a distinct category from `E` and must never be treated
    /// as a normal outcome.
    ///
    /// # Panics
    ///
    /// Raises [`Fault::ValueOfError`] if the failure alternative is held.
    #[inline]
    pub fn into_value(self) -> R {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => Fault::ValueOfError.raise(),
        }
    }

    /// Extracts the error value, faulting if the success alternative is
    /// held.
    ///
    /// # Panics
    ///
    /// Raises [`Fault::ErrorOfValue`] if the success alternative is held.
    #[inline]
    pub fn into_error(self) -> E {
        match self {
            Outcome::Ok(_) => Fault::ErrorOfValue.raise(),
            Outcome::Err(err) => err,
        }
    }
}
