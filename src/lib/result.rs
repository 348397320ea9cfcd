use std::{error, fmt, io};

use toml;

/// An error.
pub struct Error {
    kind: ErrorKind,
    message: String,
}

/// The kind of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A configuration could not be read.
    Config,
    /// A workload could not be read or contains a malformed job.
    Input,
    /// A run was given inconsistent jobs or ended in an inconsistent state.
    Invariant,
}

/// A result.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    #[inline]
    pub fn new<T: ToString>(kind: ErrorKind, message: T) -> Error {
        Error { kind: kind, message: message.to_string() }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}: {}", self.kind, self.message)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(formatter)
    }
}

impl error::Error for Error {
}

impl From<io::Error> for Error {
    #[inline]
    fn from(error: io::Error) -> Error {
        Error::new(ErrorKind::Input, error)
    }
}

impl From<toml::de::Error> for Error {
    #[inline]
    fn from(error: toml::de::Error) -> Error {
        Error::new(ErrorKind::Config, error)
    }
}
