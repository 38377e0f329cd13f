//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Construction is the only fallible point of the engine itself: once a
/// [`SimEngine`](crate::SimEngine) exists, stepping never fails. The first
/// three variants are the invalid-configuration causes; `NotInitialized` is
/// raised by the session layer when no engine has been built yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The frame count was zero. A simulation needs at least one frame.
    #[error("invalid configuration: frame count must be at least 1")]
    ZeroFrames,

    /// The reference string was empty. There is nothing to simulate.
    #[error("invalid configuration: reference string is empty")]
    EmptyReferenceString,

    /// The replacement policy name matched none of FIFO, LRU, LFU.
    #[error("invalid configuration: unknown replacement policy `{0}`")]
    UnknownPolicy(String),

    /// A session operation was invoked before `init`.
    #[error("no simulation has been initialized")]
    NotInitialized,
}

impl Error {
    /// Whether this error is one of the construction-time configuration
    /// failures (as opposed to the session lifecycle error).
    pub fn is_invalid_configuration(&self) -> bool {
        !matches!(self, Error::NotInitialized)
    }
}
