//! GraphQL Query Validator
//!
//! Validates GraphQL query files against a schema and reports per-file
//! validation errors.
//!
//! This library provides:
//! - Glob-based query file discovery
//! - Concurrent query file loading and parsing
//! - Validation of parsed documents against a loaded schema
//! - Per-file error aggregation and reporting

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validator;

// Re-exports for clean public API
pub use config::Config;
pub use error::ValidatorError;
pub use loader::{QueryDocument, load_query_files, load_query_files_with};
pub use resolver::{FileSource, resolve_files};
pub use schema::load_schema;
pub use validator::{
    FileError, validate_queries, validate_query, validate_query_files, validate_query_files_with,
};
