//! Job-file catalog backing the file-selection list. The console only ever
//! reads names from here; file contents are never interpreted.

use std::{
    fs,
    path::{Path, PathBuf},
};

use shared::error::ConsoleError;

pub trait JobCatalog {
    fn list(&self) -> Result<Vec<String>, ConsoleError>;
}

/// Lists regular files directly under one directory. Subdirectories are
/// skipped, not descended into.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl JobCatalog for DirectoryCatalog {
    fn list(&self) -> Result<Vec<String>, ConsoleError> {
        let entries = fs::read_dir(&self.root).map_err(|error| {
            ConsoleError::storage(format!("{}: {error}", self.root.display()))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|error| ConsoleError::storage(error.to_string()))?;
            let is_file = entry
                .file_type()
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) if !name.contains('\n') => names.push(name),
                Ok(_) | Err(_) => {
                    tracing::debug!(path = %entry.path().display(), "skipping unlistable job file name")
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Names from `catalog`, or an empty list when storage is unavailable.
pub fn list_or_empty(catalog: &impl JobCatalog) -> Vec<String> {
    match catalog.list() {
        Ok(names) => {
            if names.is_empty() {
                tracing::info!("no job files available");
            }
            names
        }
        Err(error) => {
            tracing::warn!(%error, "job listing failed; file selection will be empty");
            Vec::new()
        }
    }
}

/// Flat newline-delimited listing, one name per line, each line terminated.
pub fn listing(catalog: &impl JobCatalog) -> String {
    list_or_empty(catalog)
        .into_iter()
        .map(|name| format!("{name}\n"))
        .collect()
}

/// Splits a newline-delimited listing back into names, dropping blank lines.
pub fn parse_listing(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim_end)
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
