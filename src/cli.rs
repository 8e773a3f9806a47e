//! CLI driver
//!
//! Loads the schema, runs the query validation pipeline, and prints a
//! human-readable report to the console.

use anyhow::{Context, Result};
use apollo_compiler::Schema;
use apollo_compiler::validation::Valid;

use crate::config::Config;
use crate::schema;
use crate::validator::{FileError, validate_query_files};

/// Load the schema for a run, echoing progress to the console.
pub async fn load_schema(pattern: &str) -> Result<Valid<Schema>> {
    println!("\nLoading schema from {pattern}");
    let schema = schema::load_schema(pattern)
        .await
        .with_context(|| format!("schema glob `{pattern}`"))?;
    println!("valid schema loaded...");
    Ok(schema)
}

/// Validate every query matching `pattern` and print the outcome.
///
/// Returns `Ok(true)` when every query is valid; `Ok(false)` when the
/// report is non-empty. Pipeline failures propagate as errors.
pub async fn check_queries(pattern: &str, schema: &Valid<Schema>) -> Result<bool> {
    println!("\nValidating queries for {pattern} using loaded schema");
    let report = validate_query_files(pattern, schema)
        .await
        .with_context(|| format!("query glob `{pattern}`"))?;

    if report.is_empty() {
        println!("All queries are valid\n");
        Ok(true)
    } else {
        print_report(&report);
        Ok(false)
    }
}

/// Run a full validation pass from configuration.
pub async fn run(config: &Config) -> Result<bool> {
    let schema = load_schema(&config.schema_pattern).await?;
    check_queries(&config.query_pattern, &schema).await
}

fn print_report(report: &[FileError]) {
    println!("\nErrors found:");
    for entry in report {
        println!("\nFile: {}", entry.file);
        for message in &entry.errors {
            println!("\t{message}");
        }
    }
    println!();
}
