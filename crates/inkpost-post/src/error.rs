//! Post parsing errors.

/// Error returned when a post document cannot be parsed.
///
/// Every variant describes malformed input. None of them is recoverable for
/// the document that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostError {
    /// The document does not start with a `---` delimited header.
    #[error("Missing front matter: expected a header between '---' lines")]
    MissingFrontMatter,

    /// A non-blank header line has no `:` separator.
    #[error("Malformed front matter line: {line}")]
    MalformedLine {
        /// The offending line as written.
        line: String,
    },

    /// A required header key is absent.
    #[error("Front matter must define '{field}'")]
    MissingRequiredField {
        /// Name of the missing key (`title` or `date`).
        field: &'static str,
    },

    /// The `date` value is not a valid calendar date in the expected format.
    #[error("Invalid date '{value}': expected {expected_format}")]
    InvalidDate {
        /// The value as written in the header.
        value: String,
        /// Human readable format description.
        expected_format: &'static str,
    },
}
