//! Tag extraction from free text

use super::registry::Registry;
use regex::Regex;
use std::sync::OnceLock;

/// Separator between word tokens: any run of non-alphanumeric characters
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator regex is valid"))
}

/// Split text into alphanumeric tokens, dropping empty ones
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    separator_regex()
        .split(text)
        .filter(|token| !token.is_empty())
}

impl Registry {
    /// Extract tags from a piece of text.
    ///
    /// Symbol matches come first, longest symbol first, followed by word
    /// matches in token order. The result is not deduplicated: a title that
    /// mentions "video" and "videos" yields `video` twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use storytags::domain::tags::{RuleCompiler, RuleDefinition, SymbolRule};
    ///
    /// let registry = RuleCompiler::build(&[
    ///     RuleDefinition::bare("rust"),
    ///     SymbolRule::new("c++").with_internal("cplusplus").into(),
    /// ])
    /// .unwrap();
    /// assert_eq!(
    ///     registry.extract_tags("Rust vs C++"),
    ///     vec!["cplusplus", "rust"]
    /// );
    /// ```
    pub fn extract_tags(&self, text: &str) -> Vec<String> {
        let mut tags = Vec::new();
        let mut remaining = text.to_lowercase();

        for (symbol, rule) in self.symbols() {
            if remaining.contains(symbol) {
                // Eat the symbol so its text can't match again as a word or a shorter symbol
                remaining = remaining.replace(symbol, "");
                tags.extend(rule.output_tags.iter().cloned());
            }
        }

        for token in tokens(&remaining) {
            if let Some(rule) = self.word_rule(token) {
                tags.extend(rule.output_tags.iter().cloned());
            }
        }

        tags
    }
}

/// Free-function form of [`Registry::extract_tags`]
pub fn extract_tags(text: &str, registry: &Registry) -> Vec<String> {
    registry.extract_tags(text)
}
