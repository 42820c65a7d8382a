//! Output formatting utilities

use crate::application::{RuleReport, TitleTags};

/// Format tagging results, one title per line
pub fn format_title_tags(results: &[TitleTags]) -> String {
    let mut output = String::new();
    for result in results {
        if result.tags.is_empty() {
            output.push_str(&format!("{}: (none)\n", result.title));
        } else {
            output.push_str(&format!("{}: {}\n", result.title, result.tags.join(", ")));
        }
    }
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

pub fn format_rule_report(report: &RuleReport) -> String {
    format!(
        "rules = {}\nword forms = {}\nsymbol forms = {}\ninternal identifiers = {}\noutput tags = {}\n",
        report.rules, report.word_forms, report.symbol_forms, report.identifiers, report.output_tags
    )
}
