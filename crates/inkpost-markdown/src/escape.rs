//! HTML escaping.

/// Escape HTML special characters.
///
/// Escapes `&`, `<`, `>`, `"` and `'`, which makes the result safe both as
/// element text and inside a double-quoted attribute value.
///
/// # Examples
///
/// ```
/// use inkpost_markdown::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
