//! Error types for `ByteFifo`.

#[cfg(feature = "std")]
use std::error::Error;
use core::fmt;

/// Reason a `ByteFifo` could not be constructed.
///
/// Both the in-place constructor and the allocating constructor report
/// through this one type.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum InitError {
    /// Empty storage, zero capacity, a capacity that is not a power of two,
    /// a capacity above `MAX_CAPACITY`, or storage shorter than the capacity.
    InvalidArguments,
    /// The control block allocator refused the request.
    AllocationFailed,
}

impl InitError {
    fn as_str(&self) -> &'static str {
        match *self {
            InitError::InvalidArguments => "invalid arguments",
            InitError::AllocationFailed => "control block allocation failed",
        }
    }
}

#[cfg(feature = "std")]
impl Error for InitError {}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InitError: {}", self.as_str())
    }
}

/// Error value indicating insufficient capacity
///
/// Only returned by the checked `try_write`; the plain `write` never fails.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}
