//! Errors reported by [`Value`](crate::Value) accessors.
//!
//! There are only two: asking a value for a kind it cannot be coerced to,
//! and failing to allocate storage for a heap-backed payload.

use thiserror::Error;

use crate::Kind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value's kind cannot be viewed or coerced as the requested kind.
    #[error("cannot access {found} value as {expected}")]
    WrongKind { expected: Kind, found: Kind },

    /// Storage for a heap-backed payload could not be allocated.
    #[error("failed to allocate storage for {kind} value")]
    AllocationFailed { kind: Kind },
}

impl ValueError {
    pub(crate) fn wrong_kind(expected: Kind, found: Kind) -> Self {
        tracing::debug!(%expected, %found, "wrong-kind access");
        ValueError::WrongKind { expected, found }
    }

    pub(crate) fn allocation_failed(kind: Kind) -> Self {
        tracing::warn!(%kind, "allocation failed");
        ValueError::AllocationFailed { kind }
    }

    /// The kind the caller asked for, if this is a kind mismatch.
    pub fn expected(&self) -> Option<Kind> {
        match self {
            ValueError::WrongKind { expected, .. } => Some(*expected),
            ValueError::AllocationFailed { .. } => None,
        }
    }
}

pub type ValueResult<T> = Result<T, ValueError>;
