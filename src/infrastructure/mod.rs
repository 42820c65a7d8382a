//! Infrastructure layer - Loading rule tables

pub mod config;

pub use config::{RuleSet, RulesSource, RULES_ENV_VAR};
