//! Shared access to the current registry

use super::compiler::RuleCompiler;
use super::registry::Registry;
use super::rule::RuleDefinition;
use crate::error::Result;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Process-wide holder of the active [`Registry`].
///
/// Readers take a snapshot with [`load`](Self::load) and keep using it for as
/// long as they like; a [`reload`](Self::reload) never disturbs a snapshot
/// already handed out.
pub struct RegistryHandle {
    current: ArcSwap<Registry>,
}

impl RegistryHandle {
    pub fn new(registry: Registry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// Compile `rules` and wrap the result
    pub fn build(rules: &[RuleDefinition]) -> Result<Self> {
        Ok(Self::new(RuleCompiler::build(rules)?))
    }

    /// Snapshot of the active registry
    pub fn load(&self) -> Arc<Registry> {
        self.current.load_full()
    }

    /// Compile a new registry and swap it in.
    ///
    /// On error the active registry is left untouched.
    pub fn reload(&self, rules: &[RuleDefinition]) -> Result<()> {
        let registry = match RuleCompiler::build(rules) {
            Ok(registry) => registry,
            Err(err) => {
                tracing::warn!(error = %err, "rule reload rejected, keeping active registry");
                return Err(err);
            }
        };
        tracing::debug!(rules = registry.rules().len(), "swapping in rebuilt registry");
        self.current.store(Arc::new(registry));
        Ok(())
    }
}
