//! Error types for HIML parsing and writing.
//!
//! Parse errors are *sticky*: the first failure is recorded on the parse
//! session and every later step stops making progress, so a single parse
//! call reports at most one error. The partially built tree is still
//! available through [`parse_partial`](crate::parse_partial).
//!
//! ## Examples
//!
//! ```rust
//! let err = himl::from_str("{a = ").unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected end of stream");
//! ```

use thiserror::Error;

/// Everything that can go wrong while parsing HIML text or moving it
/// through a reader/writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required delimiter was not found.
    #[error("'{expected}' Expected, got '{found}' at {offset}")]
    Expected {
        expected: char,
        found: char,
        offset: usize,
    },

    /// Input ran out while a token or delimiter was still required.
    #[error("Unexpected end of stream")]
    UnexpectedEos,

    /// A character that cannot start a token or structure was found at a
    /// pair position.
    #[error("Unexpected character '{found}' at {offset}")]
    Unexpected { found: char, offset: usize },

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message (UTF-8 validation and similar wrapper failures).
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a structural-mismatch error with the byte offset of the
    /// failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::Error;
    ///
    /// let err = Error::expected('}', 'x', 12);
    /// assert_eq!(err.to_string(), "'}' Expected, got 'x' at 12");
    /// ```
    pub fn expected(expected: char, found: char, offset: usize) -> Self {
        Error::Expected {
            expected,
            found,
            offset,
        }
    }

    /// Creates a stray-character error for input that can make no further
    /// progress.
    pub fn unexpected(found: char, offset: usize) -> Self {
        Error::Unexpected { found, offset }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
