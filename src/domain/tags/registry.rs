//! Compiled, read-only tag lookup tables

use std::collections::{BTreeSet, HashMap};

/// How a rule's input forms are matched against text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Whole-token match
    Word,
    /// Substring match, for tags that are not valid tokens
    Symbol,
}

/// A rule after compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// Canonical text the rule was declared with (marker stripped)
    pub canonical: String,
    /// Tags emitted on match: the rule's own tag first, then implied tags
    pub output_tags: Vec<String>,
    /// Distinct forms that trigger this rule, in declaration order
    pub input_forms: Vec<String>,
    pub kind: RuleKind,
}

/// Index of a rule inside the registry
pub(crate) type RuleId = usize;

/// Immutable lookup tables built by [`RuleCompiler`](super::RuleCompiler).
///
/// A registry is never mutated after it is built. Replacing rules means
/// compiling a new registry; see [`RegistryHandle`](super::RegistryHandle).
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub(crate) rules: Vec<CompiledRule>,
    pub(crate) words: HashMap<String, RuleId>,
    pub(crate) symbols: HashMap<String, RuleId>,
    /// Symbol forms, longest first, ties in lexicographic order
    pub(crate) symbol_order: Vec<String>,
    /// internal identifier -> display text
    pub(crate) display: HashMap<String, String>,
    /// display text -> internal identifier
    pub(crate) internal: HashMap<String, String>,
}

impl Registry {
    /// All compiled rules in declaration order
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn word_rule(&self, form: &str) -> Option<&CompiledRule> {
        self.words.get(form).map(|&id| &self.rules[id])
    }

    pub fn symbol_rule(&self, form: &str) -> Option<&CompiledRule> {
        self.symbols.get(form).map(|&id| &self.rules[id])
    }

    /// Symbol forms with their rules, in the order the matcher consumes them
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &CompiledRule)> + '_ {
        self.symbol_order
            .iter()
            .map(move |form| (form.as_str(), &self.rules[self.symbols[form]]))
    }

    pub fn word_form_count(&self) -> usize {
        self.words.len()
    }

    pub fn symbol_form_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of tags that declare an internal identifier
    pub fn identifier_count(&self) -> usize {
        self.display.len()
    }

    /// (internal identifier, display text) pairs, sorted by identifier
    pub fn identifiers(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .display
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Every tag any rule can emit
    pub fn output_tags(&self) -> BTreeSet<&str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.output_tags.iter().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
