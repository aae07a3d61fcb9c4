//! Front matter header splitting and parsing.
//!
//! The header is not YAML: every non-blank line is a single `key: value` pair.
//! Keys and values are trimmed, values may themselves contain colons, and a
//! repeated key keeps its last value.

use std::collections::HashMap;

use crate::PostError;

/// Line that opens and closes the header.
const DELIMITER: &str = "---";

/// Parsed front matter fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse header lines into fields.
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::MalformedLine`] for a non-blank line without `:`.
    pub fn parse(header: &str) -> Result<Self, PostError> {
        let mut fields = HashMap::new();
        for line in header.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(PostError::MalformedLine {
                    line: line.to_owned(),
                });
            };
            fields.insert(key.trim().to_owned(), value.trim().to_owned());
        }
        Ok(Self { fields })
    }

    /// Get a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get a field value, treating an empty value as absent.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Get a field that must be present (it may be empty).
    ///
    /// # Errors
    ///
    /// Returns [`PostError::MissingRequiredField`] if the key is absent.
    pub fn require(&self, field: &'static str) -> Result<&str, PostError> {
        self.get(field)
            .ok_or(PostError::MissingRequiredField { field })
    }
}

/// Split a raw document into its header and body.
///
/// Surrounding whitespace is ignored. The first line must be exactly `---`;
/// the header runs to the next `---` line and the body is everything after
/// it. Both `\n` and `\r\n` line endings are accepted.
///
/// # Errors
///
/// Returns [`PostError::MissingFrontMatter`] if either delimiter is missing.
///
/// # Examples
///
/// ```
/// use inkpost_post::split_front_matter;
///
/// let (header, body) = split_front_matter("---\ntitle: A\n---\nBody").unwrap();
/// assert_eq!(header, "title: A\n");
/// assert_eq!(body, "Body");
/// ```
pub fn split_front_matter(raw: &str) -> Result<(&str, &str), PostError> {
    let text = raw.trim();
    let mut lines = text.split_inclusive('\n');

    let first = lines.next().ok_or(PostError::MissingFrontMatter)?;
    if !is_delimiter(first) {
        return Err(PostError::MissingFrontMatter);
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            let header = &text[header_start..offset];
            let body = &text[offset + line.len()..];
            return Ok((header, body));
        }
        offset += line.len();
    }

    Err(PostError::MissingFrontMatter)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        let (header, body) = split_front_matter("---\ntitle: A\ndate: 2024-03-05\n---\n# Body\n").unwrap();
        assert_eq!(header, "title: A\ndate: 2024-03-05\n");
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_split_ignores_surrounding_whitespace() {
        let (header, body) = split_front_matter("\n\n---\ntitle: A\n---\nBody\n\n").unwrap();
        assert_eq!(header, "title: A\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_crlf() {
        let (header, body) = split_front_matter("---\r\ntitle: A\r\n---\r\nBody").unwrap();
        assert_eq!(header, "title: A\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_stops_at_first_closing_delimiter() {
        let (header, body) = split_front_matter("---\na: 1\n---\nx\n---\ny").unwrap();
        assert_eq!(header, "a: 1\n");
        assert_eq!(body, "x\n---\ny");
    }

    #[test]
    fn test_split_closing_delimiter_at_end() {
        let (header, body) = split_front_matter("---\ntitle: A\n---").unwrap();
        assert_eq!(header, "title: A\n");
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_missing_opening_delimiter() {
        assert_eq!(
            split_front_matter("title: A\n---\nBody"),
            Err(PostError::MissingFrontMatter)
        );
        assert_eq!(split_front_matter(""), Err(PostError::MissingFrontMatter));
    }

    #[test]
    fn test_split_missing_closing_delimiter() {
        assert_eq!(
            split_front_matter("---\ntitle: A\nBody"),
            Err(PostError::MissingFrontMatter)
        );
    }

    #[test]
    fn test_split_delimiter_must_be_exact() {
        assert_eq!(
            split_front_matter("----\ntitle: A\n----\nBody"),
            Err(PostError::MissingFrontMatter)
        );
        assert_eq!(
            split_front_matter("--- x\ntitle: A\n---\nBody"),
            Err(PostError::MissingFrontMatter)
        );
    }

    #[test]
    fn test_parse_fields_trimmed() {
        let meta = FrontMatter::parse("  title :  Hello World  \ndate:2024-03-05").unwrap();
        assert_eq!(meta.get("title"), Some("Hello World"));
        assert_eq!(meta.get("date"), Some("2024-03-05"));
        assert_eq!(meta.fields.len(), 2);
    }

    #[test]
    fn test_parse_value_keeps_later_colons() {
        let meta = FrontMatter::parse("summary: Rust: the good parts").unwrap();
        assert_eq!(meta.get("summary"), Some("Rust: the good parts"));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let meta = FrontMatter::parse("\n  \ntitle: A\n\n").unwrap();
        assert_eq!(meta.fields.len(), 1);
    }

    #[test]
    fn test_parse_last_value_wins() {
        let meta = FrontMatter::parse("title: first\ntitle: second").unwrap();
        assert_eq!(meta.get("title"), Some("second"));
    }

    #[test]
    fn test_parse_malformed_line_named() {
        assert_eq!(
            FrontMatter::parse("title: A\nnotakeyvalue\ndate: 2024-03-05"),
            Err(PostError::MalformedLine {
                line: "notakeyvalue".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_empty_header() {
        let meta = FrontMatter::parse("").unwrap();
        assert!(meta.fields.is_empty());
    }

    #[test]
    fn test_require_and_non_empty() {
        let meta = FrontMatter::parse("title:\nslug: ").unwrap();
        assert_eq!(meta.require("title"), Ok(""));
        assert_eq!(meta.get_non_empty("slug"), None);
        assert_eq!(
            meta.require("date"),
            Err(PostError::MissingRequiredField { field: "date" })
        );
    }
}
