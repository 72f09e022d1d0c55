//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    UnknownUnit(String),
    UnknownBoundary(String),
    UnknownSplitter(String),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

// structopt parses enum-valued arguments through FromStr, which needs a
// displayable error type.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::UnknownUnit(u) => {
                write!(f, "unknown passage unit '{}' (section/paragraph/sentence)", u)
            }
            Error::UnknownBoundary(b) => {
                write!(f, "unknown passage boundary '{}' (title/section/paragraph)", b)
            }
            Error::UnknownSplitter(s) => {
                write!(f, "unknown sentence splitter '{}' (punctuation/unicode)", s)
            }
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}
