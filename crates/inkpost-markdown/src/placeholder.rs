//! Placeholder tokens that shield rendered markup from later inline stages.
//!
//! Each inline stage that produces HTML registers it here and leaves an opaque
//! token in the text instead. Later stages (escaping, emphasis) only ever see
//! the token, and [`PlaceholderTable::restore`] swaps the markup back in at the
//! end.

/// Opening delimiter of a token (Unicode private use area).
pub(crate) const TOKEN_START: char = '\u{E000}';
/// Closing delimiter of a token.
pub(crate) const TOKEN_END: char = '\u{E001}';

/// Token to rendered-HTML mapping scoped to one inline render call.
///
/// Tokens contain no characters that HTML escaping or emphasis markers touch,
/// so they pass through every stage unchanged.
///
/// # Example
///
/// ```
/// use inkpost_markdown::PlaceholderTable;
///
/// let mut table = PlaceholderTable::new();
/// let token = table.insert("<b>x</b>");
/// let mut text = format!("before {token} after");
/// table.restore(&mut text);
///
/// assert_eq!(text, "before <b>x</b> after");
/// ```
#[derive(Debug, Default)]
pub struct PlaceholderTable {
    items: Vec<(String, String)>,
}

impl PlaceholderTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register rendered HTML and return the token standing in for it.
    pub fn insert(&mut self, html: impl Into<String>) -> String {
        let token = format!("{TOKEN_START}{}{TOKEN_END}", self.items.len());
        self.items.push((token.clone(), html.into()));
        token
    }

    /// Replace every token in `text` with its HTML.
    ///
    /// Tokens are restored newest first, so markup that itself wraps an older
    /// token (a code span around a link, for example) resolves completely.
    /// Consumes the table to prevent accidental reuse.
    pub fn restore(self, text: &mut String) {
        for (token, html) in self.items.into_iter().rev() {
            if text.contains(&token) {
                *text = text.replace(&token, &html);
            }
        }
    }
}

/// Replace token delimiters in user text with tokens for their character
/// references, so input can neither forge a token nor lose characters.
pub(crate) fn protect_token_chars(text: &str, table: &mut PlaceholderTable) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            TOKEN_START => out.push_str(&table.insert("&#xE000;")),
            TOKEN_END => out.push_str(&table.insert("&#xE001;")),
            _ => out.push(c),
        }
    }
    out
}
