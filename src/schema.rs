//! Schema loading
//!
//! Builds a validated schema from a glob of SDL files. Multiple matching
//! files are merged into one type system, the way schema definitions are
//! commonly split across files in larger projects.

use apollo_compiler::Schema;
use apollo_compiler::validation::Valid;
use tokio::fs;

use crate::error::ValidatorError;
use crate::resolver::{FileSource, resolve_files};

/// Load and validate a schema from every SDL file matching `pattern`.
///
/// Fails when the pattern matches no files, any matched file cannot be
/// read, or the merged type system does not validate.
pub async fn load_schema(pattern: &str) -> Result<Valid<Schema>, ValidatorError> {
    let paths = resolve_files(&FileSource::from(pattern))?;
    if paths.is_empty() {
        return Err(ValidatorError::SchemaLoad {
            errors: format!("no schema files matched `{pattern}`"),
        });
    }
    log::debug!("building schema from {} file(s)", paths.len());

    let mut builder = Schema::builder();
    for path in &paths {
        let text = fs::read_to_string(path)
            .await
            .map_err(|source| ValidatorError::FileRead {
                file: path.clone(),
                source,
            })?;
        builder = builder.parse(text, path);
    }

    builder
        .build()
        .and_then(Schema::validate)
        .map_err(|err| ValidatorError::SchemaLoad {
            errors: err.errors.to_string(),
        })
}
