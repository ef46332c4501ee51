use core::fmt::{self, Display};

/// An internal-consistency fault: the container was used in a way that is
/// a programming error, never a modeled failure.
///
/// Faults form a deliberately separate category from the error type `E`
/// carried inside an [`Outcome`](crate::Outcome). Catching or matching on
/// `E` must never accidentally swallow a usage bug, so faults are raised
/// immediately with their own `outcome fault:` message prefix instead of
/// traveling through the container.
///
/// A two-variant Rust enum cannot be empty, so the only reachable faults
/// are reads of the wrong alternative through
/// [`into_value`](crate::Outcome::into_value) /
/// [`into_error`](crate::Outcome::into_error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The success payload was read while the failure alternative was held.
    ValueOfError,
    /// The error payload was read while the success alternative was held.
    ErrorOfValue,
}

impl Fault {
    /// Raises the fault immediately.
    ///
    /// The panic message carries the `outcome fault:` prefix so the fault
    /// tier stays textually distinct from a modeled error surfaced by
    /// [`unwrap`](crate::Outcome::unwrap).
    #[cold]
    pub(crate) fn raise(self) -> ! {
        panic!("outcome fault: {self}")
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::ValueOfError => write!(f, "attempted to read the value of an error outcome"),
            Fault::ErrorOfValue => write!(f, "attempted to read the error of a success outcome"),
        }
    }
}

impl core::error::Error for Fault {}
