//! Error types for the validation pipeline.
//!
//! Each variant corresponds to one stage of the pipeline that can abort a
//! run. Semantic validation failures are deliberately absent: they are
//! aggregated into [`FileError`](crate::validator::FileError) records and
//! never abort anything.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a validation run.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The glob pattern itself was malformed.
    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Pattern expansion hit an unreadable path on the filesystem.
    #[error("failed to expand glob pattern")]
    Glob(#[from] glob::GlobError),

    /// A resolved file could not be read.
    #[error("failed to read `{file}`")]
    FileRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A query file did not parse as a GraphQL document.
    #[error("failed to parse `{file}`:\n{errors}")]
    Parse { file: PathBuf, errors: String },

    /// The schema glob did not produce a usable schema.
    #[error("failed to load schema: {errors}")]
    SchemaLoad { errors: String },
}
