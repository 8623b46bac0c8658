//! Setup errors.
//!
//! Scenario operations themselves are infallible; every failure class this
//! suite knows about happens during setup, before any timed work runs.

use thiserror::Error;

/// Result type for harness setup.
pub type SetupResult<T> = Result<T, SetupError>;

/// Errors that can abort harness setup.
///
/// All of these are fatal: the benchmark run stops, nothing is retried.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The initial source string does not fit the buffer. One byte of the
    /// declared capacity is reserved for the terminator.
    #[error("initial text is {len} bytes but only {writable} fit the {capacity}-byte buffer")]
    BufferOverflow {
        len: usize,
        writable: usize,
        capacity: usize,
    },

    /// Dear ImGui context creation or configuration failed.
    #[error("failed to set up Dear ImGui context: {reason}")]
    Context { reason: String },

    /// A generated widget label contained an interior NUL byte.
    #[error("widget label contains an interior NUL byte")]
    Label(#[from] std::ffi::NulError),
}
