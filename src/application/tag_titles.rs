//! Tag titles use case

use crate::domain::dedup_tags;
use crate::domain::tags::Registry;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Drop repeated tags, keeping the first occurrence
    pub unique: bool,
    /// Render internal identifiers as display text
    pub display: bool,
}

/// Tags extracted from one title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTags {
    pub title: String,
    pub tags: Vec<String>,
}

/// Service for tagging free-text titles
pub struct TagTitlesService {
    registry: Arc<Registry>,
}

impl TagTitlesService {
    pub fn new(registry: Arc<Registry>) -> Self {
        TagTitlesService { registry }
    }

    pub fn execute<S: AsRef<str>>(&self, titles: &[S], options: TagOptions) -> Vec<TitleTags> {
        titles
            .iter()
            .map(|title| {
                let title = title.as_ref();
                let mut tags = self.registry.extract_tags(title);
                if options.unique {
                    tags = dedup_tags(tags);
                }
                if options.display {
                    tags = self.registry.display_tags(tags);
                }
                TitleTags {
                    title: title.to_string(),
                    tags,
                }
            })
            .collect()
    }
}
