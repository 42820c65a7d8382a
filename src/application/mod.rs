//! Application layer - Use cases and orchestration

pub mod check_rules;
pub mod tag_titles;

pub use check_rules::{CheckRulesService, RuleReport};
pub use tag_titles::{TagOptions, TagTitlesService, TitleTags};
