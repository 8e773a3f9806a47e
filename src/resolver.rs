//! File resolution
//!
//! Expands glob patterns into ordered file lists. An already-materialized
//! path list passes through untouched, so callers can feed either a pattern
//! or the output of a previous resolution.

use std::path::PathBuf;

use crate::error::ValidatorError;

/// Input to the resolver: a glob pattern or an explicit list of paths.
#[derive(Debug, Clone)]
pub enum FileSource {
    Pattern(String),
    Paths(Vec<PathBuf>),
}

impl From<&str> for FileSource {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl From<String> for FileSource {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Vec<PathBuf>> for FileSource {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Paths(paths)
    }
}

impl From<&[PathBuf]> for FileSource {
    fn from(paths: &[PathBuf]) -> Self {
        Self::Paths(paths.to_vec())
    }
}

/// Expand a file source into a list of paths.
///
/// A pattern that matches nothing yields an empty list. Expansion only
/// fails when the pattern is malformed or the filesystem refuses access
/// while walking it. Explicit path lists are returned unchanged, without
/// touching the filesystem.
pub fn resolve_files(source: &FileSource) -> Result<Vec<PathBuf>, ValidatorError> {
    match source {
        FileSource::Paths(paths) => Ok(paths.clone()),
        FileSource::Pattern(pattern) => {
            let entries = glob::glob(pattern).map_err(|source| ValidatorError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            let paths = entries.collect::<Result<Vec<_>, _>>()?;
            log::debug!("pattern `{}` resolved to {} file(s)", pattern, paths.len());
            Ok(paths)
        }
    }
}
