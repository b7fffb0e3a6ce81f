use std::fmt;

use crate::spin::SpinState;

/// Recoverable errors reported by the wheel and spin session. Both are
/// returned synchronously to the caller; neither corrupts session state.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinError {
    /// A malformed input, e.g. an empty candidate set.
    InvalidArgument(&'static str),
    /// An operation attempted from a state that forbids it.
    InvalidState {
        operation: &'static str,
        state: SpinState,
    },
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            SpinError::InvalidState { operation, state } => {
                write!(f, "{} is not valid in the {:?} state", operation, state)
            }
        }
    }
}

impl std::error::Error for SpinError {}
