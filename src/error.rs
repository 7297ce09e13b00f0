//! Error taxonomy shared by every public operation.
//!
//! Each conversion or repository operation either returns its output or
//! fails with exactly one of these kinds. The only partial results the
//! crate produces are the non-fatal markers embedded in generated member
//! output ("Insufficient arguments.", nested-object warnings), which are
//! not errors.

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed configuration string (bound/separator spec, missing XML
    /// root element).
    #[error("{0}")]
    Configuration(String),

    /// Empty required input or a script whose name cannot be derived.
    #[error("{0}")]
    Validation(String),

    /// Script text fails the input/output usage contract.
    #[error("{0}")]
    Contract(String),

    /// The execution host did not finish within the wall-clock budget.
    #[error("script execution exceeded its {budget:?} time budget")]
    Timeout { budget: Duration },

    /// Navigation or delete target is absent from the repository.
    #[error("no script named '{0}'")]
    NotFound(String),

    /// Navigation over a repository with zero entries.
    #[error("the script repository is empty")]
    EmptyRepository,

    /// Row/column arity mismatch in tabular input. Deliberately left
    /// unguarded beyond this generic error.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Document store read/write failure.
    #[error("script store error: {0}")]
    Store(String),

    /// Execution host failure other than a timeout.
    #[error("execution host error: {0}")]
    Host(String),
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub(crate) fn contract(message: impl Into<String>) -> Self {
        Error::Contract(message.into())
    }

    pub(crate) fn store(error: impl std::fmt::Display) -> Self {
        Error::Store(error.to_string())
    }

    pub(crate) fn host(error: impl std::fmt::Display) -> Self {
        Error::Host(error.to_string())
    }
}
