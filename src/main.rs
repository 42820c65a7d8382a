use clap::Parser;
use std::sync::Arc;
use storytags::application::{CheckRulesService, TagOptions, TagTitlesService};
use storytags::cli::{format_rule_report, format_tag_list, format_title_tags, Cli, Commands};
use storytags::error::TagsError;
use storytags::infrastructure::RulesSource;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagsError> {
    let source = RulesSource::resolve(cli.rules);

    match cli.command {
        Commands::Check => {
            let report = CheckRulesService::new(source).execute()?;
            print!("{}", format_rule_report(&report));
            Ok(())
        }
        Commands::Tag {
            titles,
            unique,
            display,
        } => {
            // Build fails before any title is tagged
            let registry = Arc::new(source.load()?.compile()?);
            let service = TagTitlesService::new(registry);
            let results = service.execute(&titles, TagOptions { unique, display });
            print!("{}", format_title_tags(&results));
            Ok(())
        }
        Commands::Display { tags } => {
            let registry = source.load()?.compile()?;
            print!("{}", format_tag_list(&registry.display_tags(&tags)));
            Ok(())
        }
        Commands::Internal { tokens } => {
            let registry = source.load()?.compile()?;
            print!("{}", format_tag_list(&registry.replace_internal(&tokens)));
            Ok(())
        }
        Commands::Symbol { token } => {
            let registry = source.load()?.compile()?;
            match registry.is_symbol(&token.to_lowercase()) {
                Some(tag) => println!("{}", tag),
                None => println!("Not a symbol: {}", token),
            }
            Ok(())
        }
    }
}
