//! Document source: lists a configuration directory and loads each file
//! into a typed `ConfigDocument`

pub mod error;
pub mod file_scanner;

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use self::file_scanner::FileScanner;
use crate::models::ConfigDocument;

pub use self::error::{DecodeError, LoadError};

pub struct DocumentSource {
    base_path: PathBuf,
}

impl DocumentSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// List the document files, failing if the directory itself is unusable
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.base_path.exists() {
            bail!(
                "Configuration directory not found: {}",
                self.base_path.display()
            );
        }
        if !self.base_path.is_dir() {
            bail!(
                "Configuration path is not a directory: {}",
                self.base_path.display()
            );
        }

        let files = FileScanner::scan_directory(&self.base_path)?;
        tracing::debug!(
            "Found {} document(s) in {}",
            files.len(),
            self.base_path.display()
        );
        Ok(files)
    }

    /// Read, decode and type a single document
    pub fn load(&self, path: &Path) -> Result<ConfigDocument, LoadError> {
        let document = document_name(path);

        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            document: document.clone(),
            source,
        })?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|err| DecodeError::new(&document, path, content.clone(), &err))?;

        let loaded = ConfigDocument::from_json(&document, &value)?;
        tracing::debug!(
            "Loaded {} with {} merkle proof(s)",
            document,
            loaded.merkle_proofs.len()
        );
        Ok(loaded)
    }

    /// Load every document; one bad file never stops the others
    pub fn load_all(&self) -> Result<Vec<Result<ConfigDocument, LoadError>>> {
        Ok(self
            .scan()?
            .iter()
            .map(|path| self.load(path))
            .collect())
    }
}

/// Documents are identified by file name, falling back to the full path
fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
