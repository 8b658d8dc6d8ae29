use std::fmt;
use std::io;
use std::result;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    Io(String),
    Format(String),
    Index(String),
    Field(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Format(msg)      => write!(f, "{}", msg),
            Error::Index(msg)       => write!(f, "{}", msg),
            Error::Field(msg)       => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(format!("Snapshot format error: {}", err))
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Argument(format!("Bad search pattern: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
