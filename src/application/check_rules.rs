//! Check rules use case

use crate::error::Result;
use crate::infrastructure::RulesSource;

/// Summary of a successfully compiled rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub rules: usize,
    pub word_forms: usize,
    pub symbol_forms: usize,
    pub identifiers: usize,
    pub output_tags: usize,
}

/// Service for validating a rule table without tagging anything
pub struct CheckRulesService {
    source: RulesSource,
}

impl CheckRulesService {
    pub fn new(source: RulesSource) -> Self {
        CheckRulesService { source }
    }

    /// Load and compile the rule table, failing on the first conflict
    pub fn execute(&self) -> Result<RuleReport> {
        let rules = self.source.load()?;
        let registry = rules.compile()?;

        Ok(RuleReport {
            rules: registry.rules().len(),
            word_forms: registry.word_form_count(),
            symbol_forms: registry.symbol_form_count(),
            identifiers: registry.identifier_count(),
            output_tags: registry.output_tags().len(),
        })
    }
}
