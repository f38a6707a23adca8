//! Simulator error type.
//!
//! Every fallible operation surfaces its failure immediately to the direct
//! caller; there are no retries and no partially-filled results. The library
//! itself produces no text output — turning an error into a message and an
//! exit code is the front end's job.

use std::fmt;
use std::io;

/// Failure raised by the loader or a scheduling policy.
#[derive(Debug)]
pub enum SimError {
    /// A caller-supplied argument is unusable (empty process set, zero
    /// quantum, malformed path).
    InvalidArgument(&'static str),
    /// The descriptor file could not be opened or read.
    Io(io::Error),
    /// The descriptor file's contents violate the binary format.
    MalformedInput(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            SimError::Io(err) => write!(f, "descriptor file I/O failed: {err}"),
            SimError::MalformedInput(what) => write!(f, "malformed descriptor file: {what}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        SimError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SimError::InvalidArgument("empty process set");
        assert_eq!(err.to_string(), "invalid argument: empty process set");

        let err = SimError::MalformedInput("declared record count is zero".into());
        assert!(err.to_string().contains("declared record count"));
    }

    #[test]
    fn test_io_source_preserved() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = SimError::from(inner);
        assert!(std::error::Error::source(&err).is_some());
    }
}
