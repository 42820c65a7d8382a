//! Conversions between display text and internal identifiers

use super::registry::Registry;

impl Registry {
    /// Render internal identifiers as human-readable tags.
    /// Tags without an internal identifier pass through unchanged.
    pub fn display_tags<I, S>(&self, tags: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .map(|tag| {
                let tag = tag.as_ref();
                self.display.get(tag).cloned().unwrap_or_else(|| tag.to_string())
            })
            .collect()
    }

    /// Replace display text with the internal identifier used for storage
    pub fn replace_internal<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| {
                let token = token.as_ref();
                self.internal
                    .get(token)
                    .cloned()
                    .unwrap_or_else(|| token.to_string())
            })
            .collect()
    }

    /// First output tag of the symbol whose form is exactly `token`
    pub fn is_symbol(&self, token: &str) -> Option<&str> {
        self.symbol_rule(token)
            .and_then(|rule| rule.output_tags.first())
            .map(String::as_str)
    }
}
