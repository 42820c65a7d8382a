//! Error types for storytags

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which lookup table an input form was registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Word,
    Symbol,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Word => write!(f, "word"),
            TableKind::Symbol => write!(f, "symbol"),
        }
    }
}

/// Which reverse identifier map a mapping was registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierMap {
    /// internal identifier -> display text
    Display,
    /// display text -> internal identifier
    Internal,
}

impl fmt::Display for IdentifierMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierMap::Display => write!(f, "display"),
            IdentifierMap::Internal => write!(f, "internal"),
        }
    }
}

/// Main error type for storytags
#[derive(Debug, Error)]
pub enum TagsError {
    #[error("Duplicate {table} form '{form}': claimed by '{existing}' and '{incoming}'")]
    DuplicateForm {
        table: TableKind,
        form: String,
        existing: String,
        incoming: String,
    },

    #[error("Conflicting {map} mapping for '{key}': '{existing}' and '{incoming}'")]
    DuplicateIdentifier {
        map: IdentifierMap,
        key: String,
        existing: String,
        incoming: String,
    },

    #[error("Malformed rule #{index}: {reason}")]
    MalformedRule { index: usize, reason: String },

    #[error("Rules file not found: {0}")]
    RulesNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TagsError {
    /// True for the build-time duplicate rule class (input forms or identifiers)
    pub fn is_duplicate_rule(&self) -> bool {
        matches!(
            self,
            TagsError::DuplicateForm { .. } | TagsError::DuplicateIdentifier { .. }
        )
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagsError::DuplicateForm { .. } | TagsError::DuplicateIdentifier { .. } => 2,
            TagsError::MalformedRule { .. } => 3,
            TagsError::RulesNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagsError::DuplicateForm {
                form,
                existing,
                incoming,
                ..
            } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Remove '{}' from either '{}' or '{}'\n\
                    • Remember that 'name(s)' also claims 'names'\n\
                    • Run 'storytags check' after editing the rules file",
                    self, form, existing, incoming
                )
            }
            TagsError::DuplicateIdentifier { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Each internal identifier must belong to exactly one tag\n\
                    • Each tag may declare at most one internal identifier",
                    self
                )
            }
            TagsError::MalformedRule { .. } => {
                format!(
                    "{}\n\n\
                    Valid rule entries:\n\
                    • \"name\" or \"name(s)\"\n\
                    • {{ tag = \"name\", alt = [...], implies = [...], internal = \"id\", host = [...] }}\n\
                    • {{ symbol = \"c++\", internal = \"id\" }}",
                    self
                )
            }
            TagsError::RulesNotFound(path) => {
                format!(
                    "Rules file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --rules\n\
                    • Unset STORYTAGS_RULES to use the built-in rule table",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagsError
pub type Result<T> = std::result::Result<T, TagsError>;
