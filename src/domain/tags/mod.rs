//! Tag system

pub mod adapters;
pub mod compiler;
pub mod handle;
pub mod matcher;
pub mod registry;
pub mod rule;

// Re-export main types
pub use compiler::RuleCompiler;
pub use handle::RegistryHandle;
pub use matcher::extract_tags;
pub use registry::{CompiledRule, Registry, RuleKind};
pub use rule::{RuleDefinition, SymbolRule, TaggedRule, PLURAL_MARKER};
