//! File scanning utilities for discovering configuration documents

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct FileScanner;

impl FileScanner {
    /// Dotfiles (editor swap files, `.DS_Store`) are never documents
    pub fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
    }

    /// Scan a directory for document files (non-recursive), sorted by name.
    ///
    /// Only a failure to read `dir` itself is an error. An entry that cannot
    /// be inspected (a dangling symlink, unreadable metadata) is still
    /// returned so that loading it reports a per-document failure.
    pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 => {
                    match err.path() {
                        Some(path) if !Self::is_hidden(path) => {
                            tracing::warn!("Cannot inspect {}: {}", path.display(), err);
                            files.push(path.to_path_buf());
                        }
                        _ => tracing::warn!("Skipping unreadable entry: {}", err),
                    }
                    continue;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("Failed to list {}", dir.display()));
                }
            };
            let path = entry.path();

            if entry.file_type().is_file() && !Self::is_hidden(path) {
                files.push(path.to_path_buf());
            } else {
                tracing::debug!("Skipping {}", path.display());
            }
        }

        files.sort();
        Ok(files)
    }
}
