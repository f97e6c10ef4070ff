//! Error types for the effect system.
//!
//! Two failure channels exist, deliberately not unified:
//!
//! 1. **Structural host errors** such as [`FileAccessError`] are fatal at
//!    the point of forcing and propagate to whoever invoked `exec`.
//! 2. **Domain failures** are represented by [`IoException`], a plain value
//!    that travels inertly through an action graph inside a [`Fallible`]
//!    payload and only raises when a forcing point observes it.

use std::path::PathBuf;

/// The payload of an action whose forced result may be an exception value.
///
/// This is an ordinary `Result`: holding or composing an `Err` never raises.
/// Raising happens only at a forcing point such as
/// [`Io::exec_or_raise`](super::Io::exec_or_raise).
///
/// # Examples
///
/// ```rust
/// use deferio::effect::{Fallible, IoException};
///
/// let failure: Fallible<String> = Err(IoException::new("boom"));
/// assert!(failure.is_err());
/// ```
pub type Fallible<A> = Result<A, IoException>;

/// A data value representing a recoverable failure.
///
/// An `IoException` carries a message describing the failure and is
/// composable like any other value: merely holding one never raises.
/// [`Io::catch`](super::Io::catch) converts it back into a plain successful
/// string carrying the message.
///
/// # Examples
///
/// ```rust
/// use deferio::effect::IoException;
///
/// let exception = IoException::new("boom");
/// assert_eq!(exception.message(), "boom");
/// assert_eq!(format!("{exception}"), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoException {
    message: String,
}

impl IoException {
    /// Creates an exception value carrying the given message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the exception, returning the failure message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl std::fmt::Display for IoException {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for IoException {}

/// Represents a failure to read a file during forcing.
///
/// Produced by [`Io::read_file`](super::Io::read_file) when the path does
/// not exist or is unreadable. This is a structural host error: it travels
/// as the `Err` of the forced result and is not interceptable by
/// [`Io::catch`](super::Io::catch).
///
/// # Examples
///
/// ```rust
/// use deferio::effect::Io;
///
/// let outcome = Io::read_file("/no/such/file.txt").exec();
/// let error = outcome.unwrap_err();
/// assert!(format!("{error}").contains("/no/such/file.txt"));
/// ```
#[derive(Debug)]
pub struct FileAccessError {
    path: PathBuf,
    source: std::io::Error,
}

impl FileAccessError {
    pub(crate) fn new(path: PathBuf, source: std::io::Error) -> Self {
        Self { path, source }
    }

    /// Returns the path that could not be read.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl std::fmt::Display for FileAccessError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "failed to read {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for FileAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
