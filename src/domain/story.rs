//! Scraped story records and title tagging

use super::tags::Registry;
use serde::{Deserialize, Serialize};

/// A story as handed over by a scraper, after URL normalization and trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedStory {
    /// Source the story came from (e.g. "hackernews", "reddit.prog")
    pub source: String,
    pub id: String,
    pub url: String,
    pub title: String,
    /// Position of the story on the source's front page, starting at 1
    pub index: usize,
    /// Source-supplied tags first, then tags extracted from the title
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ScrapedStory {
    pub fn new(
        source: impl Into<String>,
        id: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            source: source.into(),
            id: id.into(),
            url: url.into(),
            title: title.into(),
            index,
            tags: Vec::new(),
        }
    }

    /// Attach tags the source itself provided (subreddit, feed categories)
    pub fn with_source_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

pub struct StoryTagger;

impl StoryTagger {
    /// Append tags extracted from the story title.
    ///
    /// Existing tags are kept and nothing is deduplicated; use [`dedup_tags`]
    /// when a unique list is needed.
    pub fn tag(registry: &Registry, mut story: ScrapedStory) -> ScrapedStory {
        let extracted = registry.extract_tags(&story.title);
        story.tags.extend(extracted);
        story
    }

    pub fn tag_all(registry: &Registry, stories: Vec<ScrapedStory>) -> Vec<ScrapedStory> {
        stories
            .into_iter()
            .map(|story| Self::tag(registry, story))
            .collect()
    }
}

/// Remove repeated tags, keeping the first occurrence of each
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique_tags = Vec::new();
    for tag in tags {
        if !unique_tags.contains(&tag) {
            unique_tags.push(tag);
        }
    }
    unique_tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::{RuleCompiler, RuleDefinition, TaggedRule};

    fn registry() -> Registry {
        RuleCompiler::build(&[
            RuleDefinition::bare("rust"),
            RuleDefinition::bare("pdf"),
            TaggedRule::new("neovim").with_implies(["vim"]).into(),
            RuleDefinition::bare("vim"),
        ])
        .unwrap()
    }

    #[test]
    fn test_tag_appends_to_source_tags() {
        let story = ScrapedStory::new(
            "reddit.prog",
            "abc123",
            "https://example.com/post",
            "Writing a kernel in Rust",
            3,
        )
        .with_source_tags(["rust"]);

        let tagged = StoryTagger::tag(&registry(), story);
        assert_eq!(tagged.tags, vec!["rust", "rust"]);
        assert_eq!(tagged.index, 3);
        assert_eq!(tagged.source, "reddit.prog");
    }

    #[test]
    fn test_tag_all_preserves_order() {
        let stories = vec![
            ScrapedStory::new("lobsters", "1", "https://a.example", "Neovim 0.10", 1),
            ScrapedStory::new("lobsters", "2", "https://b.example", "Cooking tips", 2),
        ];

        let tagged = StoryTagger::tag_all(&registry(), stories);
        assert_eq!(tagged[0].tags, vec!["neovim", "vim"]);
        assert!(tagged[1].tags.is_empty());
    }

    #[test]
    fn test_dedup_tags_keeps_first_occurrence() {
        let tags = vec![
            "vim".to_string(),
            "neovim".to_string(),
            "vim".to_string(),
        ];
        assert_eq!(dedup_tags(tags), vec!["vim", "neovim"]);
    }

    #[test]
    fn test_story_from_toml_defaults_tags() {
        let story: ScrapedStory = toml::from_str(
            r#"
source = "hackernews"
id = "42"
url = "https://example.com"
title = "A PDF about Rust"
index = 1
"#,
        )
        .unwrap();
        assert!(story.tags.is_empty());

        let tagged = StoryTagger::tag(&registry(), story);
        assert_eq!(tagged.tags, vec!["pdf", "rust"]);
    }
}
