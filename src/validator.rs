//! Validation Engine
//!
//! Delegates semantic checks to apollo-compiler and aggregates the
//! resulting diagnostics into per-file error reports.

use apollo_compiler::Schema;
use apollo_compiler::ast;
use apollo_compiler::validation::Valid;

use crate::error::ValidatorError;
use crate::loader::{QueryDocument, load_query_files};

/// Validation errors for a single query file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    /// Path of the offending file; empty when the document had no file
    /// association.
    pub file: String,
    /// Rendered message for every diagnostic in the file, in source order.
    pub errors: Vec<String>,
}

/// Validate one parsed document against a schema.
///
/// Returns one rendered message per diagnostic; an empty list means the
/// document is valid. Never fails.
pub fn validate_query(schema: &Valid<Schema>, document: &ast::Document) -> Vec<String> {
    match document.to_executable_validate(schema) {
        Ok(_) => Vec::new(),
        Err(err) => err
            .errors
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect(),
    }
}

/// Validate a batch of documents, collecting only the ones with errors.
///
/// Valid documents contribute nothing to the result, so an empty report
/// means the whole batch passed. Document order is preserved among the
/// entries that remain.
pub fn validate_queries(schema: &Valid<Schema>, documents: &[QueryDocument]) -> Vec<FileError> {
    documents
        .iter()
        .filter_map(|doc| {
            let errors = validate_query(schema, &doc.document);
            if errors.is_empty() {
                None
            } else {
                Some(FileError {
                    file: doc.display_path(),
                    errors,
                })
            }
        })
        .collect()
}

/// Resolve, load, and validate every query file matching `pattern`.
///
/// Always succeeds with the full report when the pipeline ran; an empty
/// report means every file was valid. Resolution, read, and parse failures
/// abort the run and surface as the error of the whole call.
pub async fn validate_query_files(
    pattern: &str,
    schema: &Valid<Schema>,
) -> Result<Vec<FileError>, ValidatorError> {
    let documents = load_query_files(pattern).await?;
    Ok(validate_queries(schema, &documents))
}

/// Callback-style adapter over [`validate_query_files`].
///
/// Runs the same pipeline once and hands the outcome to `callback`.
pub async fn validate_query_files_with<F>(pattern: &str, schema: &Valid<Schema>, callback: F)
where
    F: FnOnce(Result<Vec<FileError>, ValidatorError>),
{
    callback(validate_query_files(pattern, schema).await)
}
