//! Behaviour of the built-in rule table through the library API

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::OnceLock;
use storytags::domain::tags::{Registry, RuleCompiler, RuleDefinition, RuleKind, TaggedRule};
use storytags::infrastructure::RuleSet;
use storytags::TagsError;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| RuleSet::builtin().unwrap().compile().unwrap())
}

fn tags(text: &str) -> Vec<String> {
    registry().extract_tags(text)
}

fn tag_set(text: &str) -> HashSet<String> {
    tags(text).into_iter().collect()
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_simple() {
    assert_eq!(tags("I love Rust!"), vec!["rust"]);
}

#[test]
fn test_plural() {
    assert_eq!(tags("Good old video"), vec!["video"]);
    assert_eq!(tags("Good old videos"), vec!["video"]);
    assert_eq!(tags("a video"), tags("a videos"));
}

#[test]
fn test_plural_dupe() {
    assert_eq!(tags("video and videos"), vec!["video", "video"]);
    assert_eq!(tag_set("Good old video and videos"), set(&["video"]));
}

#[test]
fn test_alt() {
    assert_eq!(tags("Chromium is a project"), vec!["chrome"]);
    assert_eq!(tags("AngularJS is fun"), vec!["angular"]);
}

#[test]
fn test_alt_dupe() {
    assert_eq!(tag_set("Chromium is the open Chrome"), set(&["chrome"]));
}

#[test]
fn test_alt_plural() {
    assert_eq!(tags("Releases and debuggers"), vec!["release"]);
    assert_eq!(tags("The debugger"), vec!["debugging"]);
}

#[test]
fn test_implies() {
    assert_eq!(tags("Neovim is kind of cool"), vec!["neovim", "vim"]);
}

#[test]
fn test_implies_dupe() {
    assert_eq!(tag_set("Neovim is a kind of vim"), set(&["neovim", "vim"]));
    assert_eq!(tag_set("TLS and SSL"), set(&["tls", "ssl", "https"]));
}

#[test]
fn test_internal() {
    assert_eq!(tags("C is hard"), vec!["clanguage"]);
    assert_eq!(tags("D is hard"), vec!["dlanguage"]);
    assert_eq!(tags("Go and golang"), vec!["golang", "golang"]);
    assert_eq!(registry().display_tags(["clanguage"]), vec!["c"]);
    assert_eq!(registry().replace_internal(["c"]), vec!["clanguage"]);
}

#[test]
fn test_symbol() {
    assert_eq!(tags("C# is hard"), vec!["csharp"]);
    assert_eq!(tags("C++ is hard"), vec!["cplusplus"]);
    assert_eq!(tags("F# on .NET"), vec!["fsharp"]);
    assert_eq!(tags("AT&T has an ampersand"), vec!["atandt"]);
}

#[test]
fn test_is_symbol() {
    assert_eq!(registry().is_symbol("c++"), Some("cplusplus"));
    assert_eq!(registry().is_symbol("at&t"), Some("atandt"));
    assert_eq!(registry().is_symbol("c"), None);
}

#[test]
fn test_host_does_not_affect_matching() {
    assert_eq!(tags("youtube.com video"), vec!["video"]);
    assert!(tags("msdn.com").is_empty());
}

#[test]
fn test_identifier_maps_are_inverse() {
    let registry = registry();
    let pairs = registry.identifiers();
    assert_eq!(pairs.len(), 8);
    for (id, text) in pairs {
        assert_eq!(registry.display_tags([id]), vec![text]);
        assert_eq!(registry.replace_internal([text]), vec![id]);
    }
}

#[test]
fn test_duplicate_alt_is_rejected() {
    let err = RuleCompiler::build(&[
        TaggedRule::new("bar").with_alt(["foo"]).into(),
        TaggedRule::new("baz").with_alt(["foo"]).into(),
    ])
    .unwrap_err();
    assert!(err.is_duplicate_rule());
    assert!(matches!(err, TagsError::DuplicateForm { .. }));
}

#[test]
fn test_duplicate_added_to_builtin_is_rejected() {
    let mut rules = RuleSet::builtin().unwrap();
    rules.rules.push(RuleDefinition::bare("chromium"));
    let err = rules.compile().unwrap_err();
    match err {
        TagsError::DuplicateForm {
            form,
            existing,
            incoming,
            ..
        } => {
            assert_eq!(form, "chromium");
            assert_eq!(existing, "chrome");
            assert_eq!(incoming, "chromium");
        }
        other => panic!("Expected DuplicateForm, got {:?}", other),
    }
}

#[test]
fn test_registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
}

/// Single-token word forms of the built-in table with their expected output
fn word_forms() -> Vec<(String, Vec<String>)> {
    registry()
        .rules()
        .iter()
        .filter(|rule| rule.kind == RuleKind::Word)
        .flat_map(|rule| {
            rule.input_forms
                .iter()
                .filter(|form| form.chars().all(|c| c.is_ascii_alphanumeric()))
                .map(move |form| (form.clone(), rule.output_tags.clone()))
        })
        .collect()
}

proptest! {
    #[test]
    fn extracted_tags_are_declared_outputs(text in "\\PC{0,80}") {
        let declared = registry().output_tags();
        for tag in registry().extract_tags(&text) {
            prop_assert!(declared.contains(tag.as_str()), "undeclared tag {}", tag);
            prop_assert_eq!(tag.to_lowercase(), tag.clone());
        }
    }

    #[test]
    fn word_forms_match_in_any_case(
        index in any::<prop::sample::Index>(),
        before in "[ .,!?]{1,3}",
        after in "[ .,!?]{0,3}",
        upper in any::<bool>(),
    ) {
        let forms = word_forms();
        let (form, expected) = &forms[index.index(forms.len())];
        let form = if upper { form.to_uppercase() } else { form.clone() };
        let text = format!("{}{}{}", before, form, after);
        prop_assert_eq!(&registry().extract_tags(&text), expected);
    }

    #[test]
    fn extraction_is_deterministic(text in "[a-zA-Z0-9 +#&]{0,40}") {
        prop_assert_eq!(registry().extract_tags(&text), registry().extract_tags(&text));
    }
}
