//! Rule compilation - turning rule definitions into a [`Registry`]
//!
//! Rules are processed once, in declaration order. Any conflict between two
//! rules aborts the build; there is no partially built registry.

use super::registry::{CompiledRule, Registry, RuleKind};
use super::rule::{RuleDefinition, PLURAL_MARKER};
use crate::error::{IdentifierMap, Result, TableKind, TagsError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Compiler from rule definitions to lookup tables
pub struct RuleCompiler {
    registry: Registry,
}

/// A rule definition after shape and content checks
#[derive(Debug)]
struct NormalizedRule {
    kind: RuleKind,
    primary: String,
    alt: Vec<String>,
    implies: Vec<String>,
    internal: Option<String>,
}

impl RuleCompiler {
    /// Build a registry from an ordered list of rule definitions
    ///
    /// # Examples
    ///
    /// ```
    /// use storytags::domain::tags::{RuleCompiler, RuleDefinition, TaggedRule};
    ///
    /// let registry = RuleCompiler::build(&[
    ///     RuleDefinition::bare("video(s)"),
    ///     TaggedRule::new("chrome").with_alt(["chromium"]).into(),
    /// ])
    /// .unwrap();
    /// assert_eq!(registry.extract_tags("Chromium videos"), vec!["chrome", "video"]);
    /// ```
    pub fn build(rules: &[RuleDefinition]) -> Result<Registry> {
        let mut compiler = RuleCompiler {
            registry: Registry::default(),
        };

        for (index, definition) in rules.iter().enumerate() {
            let rule = normalize(index, definition)?;
            compiler.add(rule)?;
        }

        Ok(compiler.finish())
    }

    fn add(&mut self, rule: NormalizedRule) -> Result<()> {
        let root = plural_root(&rule.primary);
        let canonical = root.unwrap_or(&rule.primary).to_string();

        if let Some(internal) = &rule.internal {
            register_identifier(
                &mut self.registry.display,
                IdentifierMap::Display,
                internal,
                &canonical,
            )?;
            register_identifier(
                &mut self.registry.internal,
                IdentifierMap::Internal,
                &canonical,
                internal,
            )?;
        }

        let mut input_forms = Vec::new();
        let mut output_tags = Vec::new();
        match root {
            Some(root) => {
                push_form(&mut input_forms, root.to_string());
                push_form(&mut input_forms, format!("{}s", root));
                output_tags.push(root.to_string());
            }
            None => {
                push_form(&mut input_forms, rule.primary.clone());
                let tag = rule.internal.clone().unwrap_or_else(|| rule.primary.clone());
                output_tags.push(tag);
            }
        }

        output_tags.extend(rule.implies);

        for alt in rule.alt {
            for form in expand_plural(&alt) {
                push_form(&mut input_forms, form);
            }
        }

        let id = self.registry.rules.len();
        let table_kind = match rule.kind {
            RuleKind::Word => TableKind::Word,
            RuleKind::Symbol => TableKind::Symbol,
        };

        for form in &input_forms {
            if rule.kind == RuleKind::Word && !is_single_token(form) {
                tracing::info!(
                    form = %form,
                    tag = %canonical,
                    "word form spans several tokens and will never match"
                );
            }

            let table = match rule.kind {
                RuleKind::Word => &mut self.registry.words,
                RuleKind::Symbol => &mut self.registry.symbols,
            };
            match table.entry(form.clone()) {
                Entry::Occupied(existing) => {
                    return Err(TagsError::DuplicateForm {
                        table: table_kind,
                        form: form.clone(),
                        existing: self.registry.rules[*existing.get()].canonical.clone(),
                        incoming: canonical,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
        }

        self.registry.rules.push(CompiledRule {
            canonical,
            output_tags,
            input_forms,
            kind: rule.kind,
        });

        Ok(())
    }

    fn finish(mut self) -> Registry {
        let mut order: Vec<String> = self.registry.symbols.keys().cloned().collect();
        order.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        self.registry.symbol_order = order;

        tracing::debug!(
            rules = self.registry.rules.len(),
            words = self.registry.words.len(),
            symbols = self.registry.symbols.len(),
            identifiers = self.registry.display.len(),
            "compiled tag registry"
        );

        self.registry
    }
}

/// Check content and lower-case every string of a definition
fn normalize(index: usize, definition: &RuleDefinition) -> Result<NormalizedRule> {
    let malformed = |reason: String| TagsError::MalformedRule { index, reason };
    let no_values: &[String] = &[];

    let (kind, primary, alt, implies, internal) = match definition {
        RuleDefinition::Bare(name) => (RuleKind::Word, name, no_values, no_values, None),
        RuleDefinition::Tagged(rule) => (
            RuleKind::Word,
            &rule.tag,
            rule.alt.as_slice(),
            rule.implies.as_slice(),
            rule.internal.as_ref(),
        ),
        RuleDefinition::Symbol(rule) => (
            RuleKind::Symbol,
            &rule.symbol,
            no_values,
            no_values,
            rule.internal.as_ref(),
        ),
    };

    let check_form = |field: &str, value: &str| -> Result<String> {
        let value = value.to_lowercase();
        if value.trim().is_empty() {
            return Err(malformed(format!("empty '{}'", field)));
        }
        if let Some(pos) = value.find(PLURAL_MARKER) {
            if pos + PLURAL_MARKER.len() != value.len() {
                return Err(malformed(format!(
                    "plural marker must come last in {} '{}'",
                    field, value
                )));
            }
            if pos == 0 {
                return Err(malformed(format!("'{}' is only a plural marker", field)));
            }
        }
        Ok(value)
    };

    let check_tag = |field: &str, value: &str| -> Result<String> {
        let value = check_form(field, value)?;
        if value.contains(PLURAL_MARKER) {
            return Err(malformed(format!(
                "'{}' value '{}' cannot be plural",
                field, value
            )));
        }
        Ok(value)
    };

    Ok(NormalizedRule {
        kind,
        primary: check_form(if kind == RuleKind::Word { "tag" } else { "symbol" }, primary)?,
        alt: alt
            .iter()
            .map(|value| check_form("alt", value))
            .collect::<Result<_>>()?,
        implies: implies
            .iter()
            .map(|value| check_tag("implies", value))
            .collect::<Result<_>>()?,
        internal: internal.map(|value| check_tag("internal", value)).transpose()?,
    })
}

/// Root of a form that carries the plural marker
fn plural_root(form: &str) -> Option<&str> {
    form.strip_suffix(PLURAL_MARKER)
}

/// Singular and plural variants of a marked form, or the form itself
fn expand_plural(form: &str) -> Vec<String> {
    match plural_root(form) {
        Some(root) => vec![root.to_string(), format!("{}s", root)],
        None => vec![form.to_string()],
    }
}

fn push_form(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}

fn is_single_token(form: &str) -> bool {
    form.chars().all(|c| c.is_ascii_alphanumeric())
}

fn register_identifier(
    map: &mut HashMap<String, String>,
    which: IdentifierMap,
    key: &str,
    value: &str,
) -> Result<()> {
    match map.get(key) {
        Some(existing) if existing != value => Err(TagsError::DuplicateIdentifier {
            map: which,
            key: key.to_string(),
            existing: existing.clone(),
            incoming: value.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            map.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
