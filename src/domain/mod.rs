//! Domain layer - Tag rules, matching and story records

pub mod story;
pub mod tags;

pub use story::{dedup_tags, ScrapedStory, StoryTagger};
pub use tags::{Registry, RegistryHandle, RuleCompiler, RuleDefinition};
