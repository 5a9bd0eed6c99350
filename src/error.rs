//! Crate-level error types.

use std::fmt;

/// Errors produced by the chainview crate.
///
/// Chain generation, projection, rendering, and input handling never fail;
/// only configuration I/O and host surface acquisition do.
#[derive(Debug)]
pub enum ChainViewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The host drawing surface could not be acquired or used.
    Surface(String),
}

impl fmt::Display for ChainViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Surface(msg) => write!(f, "drawing surface error: {msg}"),
        }
    }
}

impl std::error::Error for ChainViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChainViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = ChainViewError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.toml",
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn message_variants_have_no_source() {
        let err = ChainViewError::Surface("no 2d context".to_owned());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "drawing surface error: no 2d context");
    }
}
