//! Declarative tag rule definitions
//!
//! Rule tables are authored as ordered lists where each entry is either a bare
//! tag name or a structured entry:
//!
//! ```toml
//! rules = [
//!     "music",
//!     "video(s)",
//!     { tag = "chrome", alt = "chromium" },
//!     { tag = "neovim", implies = "vim" },
//!     { tag = "c", internal = "clanguage" },
//!     { symbol = "c++", internal = "cplusplus" },
//! ]
//! ```
//!
//! The shape of each entry is decided here, at load time. Content checks
//! (empty text, misplaced plural markers) happen when the rules are compiled.

use crate::error::{Result, TagsError};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Marker that expands a form into its singular and plural variants
pub const PLURAL_MARKER: &str = "(s)";

/// A single entry of a rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDefinition {
    /// Bare tag name, equivalent to `Tagged` with only `tag` set
    Bare(String),
    /// Word-matched rule with optional modifiers
    Tagged(TaggedRule),
    /// Substring-matched rule for tags that are not valid tokens
    Symbol(SymbolRule),
}

impl RuleDefinition {
    pub fn bare(name: impl Into<String>) -> Self {
        RuleDefinition::Bare(name.into())
    }

    /// Canonical text of the rule as authored (`tag` or `symbol`)
    pub fn primary(&self) -> &str {
        match self {
            RuleDefinition::Bare(name) => name,
            RuleDefinition::Tagged(rule) => &rule.tag,
            RuleDefinition::Symbol(rule) => &rule.symbol,
        }
    }
}

impl From<TaggedRule> for RuleDefinition {
    fn from(rule: TaggedRule) -> Self {
        RuleDefinition::Tagged(rule)
    }
}

impl From<SymbolRule> for RuleDefinition {
    fn from(rule: SymbolRule) -> Self {
        RuleDefinition::Symbol(rule)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedRule {
    pub tag: String,
    /// Additional input forms that trigger this rule
    pub alt: Vec<String>,
    /// Additional output tags emitted whenever this rule matches
    pub implies: Vec<String>,
    /// Storage identifier emitted in place of `tag`
    pub internal: Option<String>,
    /// Reserved for domain-scoped tagging; not consumed by the matcher
    pub host: BTreeSet<String>,
}

impl TaggedRule {
    pub fn new(tag: impl Into<String>) -> Self {
        TaggedRule {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_alt<I, S>(mut self, alt: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt.extend(alt.into_iter().map(Into::into));
        self
    }

    pub fn with_implies<I, S>(mut self, implies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implies.extend(implies.into_iter().map(Into::into));
        self
    }

    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal = Some(internal.into());
        self
    }

    pub fn with_host<I, S>(mut self, host: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.host.extend(host.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolRule {
    pub symbol: String,
    pub internal: Option<String>,
}

impl SymbolRule {
    pub fn new(symbol: impl Into<String>) -> Self {
        SymbolRule {
            symbol: symbol.into(),
            internal: None,
        }
    }

    pub fn with_internal(mut self, internal: impl Into<String>) -> Self {
        self.internal = Some(internal.into());
        self
    }
}

/// Either a single string or a list of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Entry shape as it appears on disk, before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawRule {
    Bare(String),
    Entry(RawEntry),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEntry {
    tag: Option<String>,
    symbol: Option<String>,
    alt: Option<OneOrMany>,
    implies: Option<OneOrMany>,
    internal: Option<String>,
    host: Option<OneOrMany>,
    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl RawRule {
    /// Decide the variant of a raw entry, rejecting ambiguous or unknown shapes
    pub(crate) fn into_definition(self, index: usize) -> Result<RuleDefinition> {
        let entry = match self {
            RawRule::Bare(name) => return Ok(RuleDefinition::Bare(name)),
            RawRule::Entry(entry) => entry,
        };

        let malformed = |reason: String| TagsError::MalformedRule { index, reason };

        if let Some(key) = entry.unknown.keys().next() {
            return Err(malformed(format!("unknown key '{}'", key)));
        }

        match (entry.tag, entry.symbol) {
            (Some(_), Some(_)) => Err(malformed(
                "entry has both 'tag' and 'symbol'".to_string(),
            )),
            (None, None) => Err(malformed(
                "entry has neither 'tag' nor 'symbol'".to_string(),
            )),
            (Some(tag), None) => Ok(RuleDefinition::Tagged(TaggedRule {
                tag,
                alt: entry.alt.map(OneOrMany::into_vec).unwrap_or_default(),
                implies: entry.implies.map(OneOrMany::into_vec).unwrap_or_default(),
                internal: entry.internal,
                host: entry
                    .host
                    .map(OneOrMany::into_vec)
                    .unwrap_or_default()
                    .into_iter()
                    .collect(),
            })),
            (None, Some(symbol)) => {
                let extra = [
                    ("alt", entry.alt.is_some()),
                    ("implies", entry.implies.is_some()),
                    ("host", entry.host.is_some()),
                ];
                if let Some((key, _)) = extra.iter().find(|(_, present)| *present) {
                    return Err(malformed(format!(
                        "symbol '{}' does not accept '{}'",
                        symbol, key
                    )));
                }
                Ok(RuleDefinition::Symbol(SymbolRule {
                    symbol,
                    internal: entry.internal,
                }))
            }
        }
    }
}
