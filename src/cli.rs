//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cloudcmp_core::{Category, FilterCriteria};

/// cloudcmp - Browse and compare AWS services from the terminal
#[derive(Parser, Debug)]
#[command(name = "cloudcmp", version)]
#[command(about = "Browse and compare AWS services from the terminal", long_about = None)]
pub struct Cli {
    /// Catalog backend origin, e.g. http://localhost:8000
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Headless command; omit to start the interactive browser
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Headless commands. Each prints one JSON document to stdout.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List services, optionally filtered
    Services {
        /// Only services in this category
        #[arg(long)]
        category: Option<Category>,

        /// Only services with (true) or without (false) a free tier
        #[arg(long, value_name = "true|false")]
        free_tier: Option<bool>,

        /// Case-insensitive match on name or description
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single service
    Service {
        /// Service identifier, e.g. ec2
        id: String,
    },

    /// List the catalog's categories
    Categories,

    /// List services in one category
    Category {
        /// Category name, e.g. "Machine Learning"
        category: Category,
    },

    /// Compare services side by side
    Compare {
        /// Service identifiers in column order
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Check backend health
    Health,
}

impl Command {
    /// Filter criteria for `services`; `None` for every other command
    pub fn criteria(&self) -> Option<FilterCriteria> {
        match self {
            Command::Services {
                category,
                free_tier,
                search,
            } => Some(FilterCriteria {
                search: search.clone().filter(|s| !s.trim().is_empty()),
                category: *category,
                free_tier: *free_tier,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_subcommand_starts_tui() {
        let cli = parse(&["cloudcmp"]);
        assert!(cli.command.is_none());
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&["cloudcmp", "health", "--api-url", "http://localhost:9000"]);
        assert_eq!(cli.command, Some(Command::Health));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_services_filters() {
        let cli = parse(&[
            "cloudcmp",
            "services",
            "--category",
            "machine learning",
            "--free-tier",
            "false",
            "--search",
            "sage",
        ]);
        let criteria = cli.command.unwrap().criteria().unwrap();
        assert_eq!(criteria.category, Some(Category::MachineLearning));
        assert_eq!(criteria.free_tier, Some(false));
        assert_eq!(criteria.search.as_deref(), Some("sage"));
    }

    #[test]
    fn test_blank_search_is_unset() {
        let cli = parse(&["cloudcmp", "services", "--search", "  "]);
        let criteria = cli.command.unwrap().criteria().unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(Cli::try_parse_from(["cloudcmp", "category", "Quantum"]).is_err());
    }

    #[test]
    fn test_compare_requires_ids() {
        assert!(Cli::try_parse_from(["cloudcmp", "compare"]).is_err());

        let cli = parse(&["cloudcmp", "compare", "ec2", "lambda"]);
        assert_eq!(
            cli.command,
            Some(Command::Compare {
                ids: vec!["ec2".into(), "lambda".into()]
            })
        );
    }

    #[test]
    fn test_criteria_only_for_services() {
        assert!(Command::Health.criteria().is_none());
    }
}
