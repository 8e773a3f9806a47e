//! Configuration management for the query validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Deciding whether a run has enough arguments to proceed

use clap::Parser;

/// Command-line arguments for the query validator
#[derive(Debug, Parser)]
#[command(name = "graphql-validator")]
#[command(about = "Validate GraphQL query files against a schema")]
#[command(version)]
pub struct Args {
    /// Glob of SDL files that together define the schema to validate against
    #[arg(short, long, value_name = "GLOB")]
    pub schema: Option<String>,

    /// Glob of query files to validate
    #[arg(value_name = "QUERY_GLOB")]
    pub queries: Option<String>,
}

/// Combined configuration for one validation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Schema file glob
    pub schema_pattern: String,
    /// Query file glob
    pub query_pattern: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Option<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    ///
    /// Returns `None` when either glob is missing; the caller prints usage
    /// and exits cleanly in that case.
    pub fn from_args(args: Args) -> Option<Self> {
        Some(Config {
            schema_pattern: args.schema?,
            query_pattern: args.queries?,
        })
    }
}
