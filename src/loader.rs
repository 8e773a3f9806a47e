//! Query document loading
//!
//! Reads every resolved query file and parses it into a GraphQL AST.
//! Reads run concurrently and recombine in resolved path order. A single
//! unreadable or malformed file fails the whole load.

use std::path::PathBuf;

use apollo_compiler::ast;
use futures::future;
use tokio::fs;

use crate::error::ValidatorError;
use crate::resolver::{FileSource, resolve_files};

/// A parsed query document together with the file it came from.
///
/// Carrying the path with its document keeps error labels attached even
/// when callers reorder or filter the loaded set.
#[derive(Debug)]
pub struct QueryDocument {
    /// Source file, when the document came from disk.
    pub file: Option<PathBuf>,
    /// Parsed GraphQL document.
    pub document: ast::Document,
}

impl QueryDocument {
    /// Wrap a document that has no file association.
    pub fn anonymous(document: ast::Document) -> Self {
        Self {
            file: None,
            document,
        }
    }

    /// The path used to label validation errors; empty when unknown.
    pub fn display_path(&self) -> String {
        self.file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    }
}

/// Load and parse every query file named by `source`.
///
/// File reads run concurrently; documents come back in resolved path
/// order regardless of read completion order. Fails on the first
/// unreadable file or the first file that does not parse as GraphQL,
/// discarding any partial results.
pub async fn load_query_files(
    source: impl Into<FileSource>,
) -> Result<Vec<QueryDocument>, ValidatorError> {
    let paths = resolve_files(&source.into())?;
    let texts = future::try_join_all(paths.iter().map(read_query)).await?;
    log::debug!("loaded {} query file(s)", paths.len());

    paths
        .into_iter()
        .zip(texts)
        .map(|(path, text)| {
            let document =
                ast::Document::parse(text, &path).map_err(|err| ValidatorError::Parse {
                    file: path.clone(),
                    errors: err.errors.to_string(),
                })?;
            Ok(QueryDocument {
                file: Some(path),
                document,
            })
        })
        .collect()
}

/// Callback-style adapter over [`load_query_files`].
///
/// Runs the same pipeline once and hands the outcome to `callback`.
pub async fn load_query_files_with<F>(source: impl Into<FileSource>, callback: F)
where
    F: FnOnce(Result<Vec<QueryDocument>, ValidatorError>),
{
    callback(load_query_files(source).await)
}

async fn read_query(path: &PathBuf) -> Result<String, ValidatorError> {
    fs::read_to_string(path)
        .await
        .map_err(|source| ValidatorError::FileRead {
            file: path.clone(),
            source,
        })
}
