//! storytags - Rule-based topical tagging for story titles
//!
//! A hand-curated rule table is compiled once into an immutable
//! [`Registry`](domain::tags::Registry), which then extracts tags from
//! arbitrary text and converts between display text and internal identifiers.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagsError;
