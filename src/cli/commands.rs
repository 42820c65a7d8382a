//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storytags")]
#[command(about = "Tag story titles with a curated rule table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rules file (default: $STORYTAGS_RULES, then the built-in table)
    #[arg(long, global = true, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract tags from one or more titles
    Tag {
        /// Titles to tag
        #[arg(required = true, value_name = "TITLE")]
        titles: Vec<String>,

        /// Drop repeated tags
        #[arg(short, long)]
        unique: bool,

        /// Show internal identifiers as display text
        #[arg(short, long)]
        display: bool,
    },

    /// Compile the rule table and report its size
    Check,

    /// Render internal identifiers as display text
    Display {
        #[arg(required = true, value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Convert display text to internal identifiers
    Internal {
        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,
    },

    /// Look up a token in the symbol table
    Symbol { token: String },
}
