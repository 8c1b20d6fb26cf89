// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem collaborators (§6): `FileReader`/`FileWriter` as seen by
//! the CLI and the rest of the core — thin, swappable for tests.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, #[source] source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, #[source] source: io::Error },
}

pub trait FileReader {
    fn read(&self, path: &Path) -> Result<String, AdapterError>;
}

pub trait FileWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<(), AdapterError>;
}

/// Reads files straight off the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemFileReader;

impl FileReader for FilesystemFileReader {
    fn read(&self, path: &Path) -> Result<String, AdapterError> {
        tracing::debug!(path = %path.display(), "reading document");
        std::fs::read_to_string(path).map_err(|source| AdapterError::Read { path: path.to_path_buf(), source })
    }
}

/// Writes files straight to the local filesystem, creating the parent
/// directory chain if it does not already exist (the history file's
/// `.history/` directory in particular).
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemFileWriter;

impl FileWriter for FilesystemFileWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<(), AdapterError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| AdapterError::Write { path: path.to_path_buf(), source })?;
        }
        tracing::debug!(path = %path.display(), "writing document");
        std::fs::write(path, contents).map_err(|source| AdapterError::Write { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
