//! Configuration options for HIML output.
//!
//! ## Examples
//!
//! ```rust
//! use himl::FormatOptions;
//!
//! let root = himl::from_str("db { host = local }").unwrap();
//! let narrow = himl::to_string_with_options(&root, FormatOptions::new().with_indent(2));
//! assert_eq!(narrow, "db {\n  host = local\n}\n");
//! ```

/// Formatting options for the writer.
///
/// The default four-space indentation is the normative output form;
/// parsing does not depend on indentation, so any width round-trips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { indent: 4 }
    }
}

impl FormatOptions {
    /// Creates the default options (4-space indentation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per indentation level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
