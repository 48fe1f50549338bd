//! Last-error slot.
//!
//! Every fallible table operation clears the slot on entry and records its
//! terminal outcome exactly once before returning. The slot is per thread:
//! tables used from different threads never observe each other's outcomes.
//! Callers should branch on the returned `Result`; the slot exists for
//! diagnostics.

use crate::error::{Error, ErrorKind, InsertError};
use core::cell::Cell;

thread_local! {
    static LAST_ERROR: Cell<ErrorKind> = const { Cell::new(ErrorKind::NoError) };
}

/// Outcome of the most recently completed operation on this thread.
pub fn last_error() -> ErrorKind {
    LAST_ERROR.with(Cell::get)
}

pub(crate) fn set(kind: ErrorKind) {
    LAST_ERROR.with(|slot| slot.set(kind));
}

#[inline]
pub(crate) fn clear() {
    set(ErrorKind::NoError);
}

/// Something whose success or failure can be reported as an [`ErrorKind`].
pub(crate) trait Outcome {
    fn kind(&self) -> ErrorKind;
}

impl<T> Outcome for Result<T, Error> {
    fn kind(&self) -> ErrorKind {
        match self {
            Ok(_) => ErrorKind::NoError,
            Err(e) => (*e).into(),
        }
    }
}

impl<T, V> Outcome for Result<T, InsertError<V>> {
    fn kind(&self) -> ErrorKind {
        match self {
            Ok(_) => ErrorKind::NoError,
            Err(e) => e.error().into(),
        }
    }
}

/// Record `outcome` in the slot and hand it back unchanged.
#[inline]
pub(crate) fn record<R: Outcome>(outcome: R) -> R {
    set(outcome.kind());
    outcome
}
