//! Failure kinds, outcome kinds and their fixed descriptions.

use core::fmt;

/// Why an operation on a [`HashTable`](crate::HashTable) failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// Requested bucket count was zero or above `2^32`.
    #[error("capacity must be between 1 and 2^32 buckets")]
    InvalidCapacity,
    /// A required argument was absent (or the key was empty on insert).
    #[error("a required argument was absent")]
    NullArgument,
    /// Backing storage for the bucket array or a key copy was unavailable.
    #[error("memory allocation failed")]
    AllocationFailed,
    /// The key is already present; the table was left unchanged.
    #[error("key is already present in the table")]
    DuplicateKey,
    /// No entry matched the key; the table was left unchanged.
    #[error("key is not present in the table")]
    NotFound,
}

/// Outcome of the most recently completed operation, as reported by
/// [`last_error`](crate::last_error).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    #[default]
    NoError,
    InvalidCapacity,
    NullArgument,
    AllocationFailed,
    DuplicateKey,
    NotFound,
}

impl ErrorKind {
    /// Fixed human-readable description of this outcome.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::NoError => "NO ERROR",
            ErrorKind::InvalidCapacity => "INVALID CAPACITY",
            ErrorKind::NullArgument => "NULL ARGUMENT",
            ErrorKind::AllocationFailed => "MEMORY ALLOCATION FAILURE",
            ErrorKind::DuplicateKey => "KEY ALREADY EXISTS",
            ErrorKind::NotFound => "KEY NOT FOUND",
        }
    }

    pub const fn is_error(self) -> bool {
        !matches!(self, ErrorKind::NoError)
    }
}

impl From<Error> for ErrorKind {
    fn from(e: Error) -> Self {
        match e {
            Error::InvalidCapacity => ErrorKind::InvalidCapacity,
            Error::NullArgument => ErrorKind::NullArgument,
            Error::AllocationFailed => ErrorKind::AllocationFailed,
            Error::DuplicateKey => ErrorKind::DuplicateKey,
            Error::NotFound => ErrorKind::NotFound,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Map an outcome kind to its fixed description.
pub fn error_message(kind: ErrorKind) -> &'static str {
    kind.message()
}

/// A rejected insert. Carries the value back so the caller keeps ownership.
#[derive(thiserror::Error)]
#[error("{error}")]
pub struct InsertError<V> {
    error: Error,
    value: V,
}

impl<V> InsertError<V> {
    pub(crate) fn new(error: Error, value: V) -> Self {
        Self { error, value }
    }

    pub fn error(&self) -> Error {
        self.error
    }

    /// Recover the value that was not inserted.
    pub fn into_value(self) -> V {
        self.value
    }

    pub fn into_parts(self) -> (Error, V) {
        (self.error, self.value)
    }
}

// No `V: Debug` bound: values are opaque to the table.
impl<V> fmt::Debug for InsertError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<V> From<InsertError<V>> for Error {
    fn from(e: InsertError<V>) -> Self {
        e.error
    }
}
