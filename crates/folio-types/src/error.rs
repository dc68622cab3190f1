use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the content layer
#[derive(Debug)]
pub enum Error {
    /// A section name did not match any declared section
    UnknownSection(String),
    /// A theme name did not match any built-in preset
    UnknownTheme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSection(name) => write!(f, "unknown section: {}", name),
            Error::UnknownTheme(name) => write!(f, "unknown theme: {}", name),
        }
    }
}

impl std::error::Error for Error {}
