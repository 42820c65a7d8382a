//! Rule table configuration

use crate::domain::tags::rule::RawRule;
use crate::domain::tags::{Registry, RuleCompiler, RuleDefinition};
use crate::error::{Result, TagsError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a rules file to use instead of the built-in table
pub const RULES_ENV_VAR: &str = "STORYTAGS_RULES";

const BUILTIN_RULES: &str = include_str!("../../rules/default.toml");

/// On-disk layout of a rules file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    rules: Vec<RawRule>,
}

/// Ordered list of rule definitions, as authored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub rules: Vec<RuleDefinition>,
}

impl RuleSet {
    pub fn new(rules: Vec<RuleDefinition>) -> Self {
        RuleSet { rules }
    }

    /// Parse a TOML rule table
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: RuleFile = toml::from_str(contents)?;
        let rules = file
            .rules
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_definition(index))
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleSet { rules })
    }

    /// Load a TOML rule table from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagsError::RulesNotFound(path.to_path_buf())
            } else {
                TagsError::Io(e)
            }
        })?;

        Self::from_toml_str(&contents)
    }

    /// The rule table shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_RULES)
    }

    pub fn compile(&self) -> Result<Registry> {
        RuleCompiler::build(&self.rules)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Where the rule table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    File(PathBuf),
    Builtin,
}

impl RulesSource {
    /// Explicit path first, then `STORYTAGS_RULES`, then the built-in table
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, std::env::var(RULES_ENV_VAR).ok())
    }

    fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> Self {
        if let Some(path) = explicit {
            return RulesSource::File(path);
        }
        match env_value {
            Some(value) if !value.trim().is_empty() => RulesSource::File(PathBuf::from(value)),
            _ => RulesSource::Builtin,
        }
    }

    pub fn load(&self) -> Result<RuleSet> {
        match self {
            RulesSource::File(path) => {
                tracing::debug!(path = %path.display(), "loading rules file");
                RuleSet::load_from_file(path)
            }
            RulesSource::Builtin => RuleSet::builtin(),
        }
    }
}
