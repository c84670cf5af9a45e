use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

use crate::error_utils::{create_named_source, span_at_line_column};
use crate::models::StructuralError;

/// A configuration file that is not valid JSON
#[derive(Error, Debug, Diagnostic)]
#[error("File {document} is not valid JSON: {message}")]
#[diagnostic(code(proofcheck::decode))]
pub struct DecodeError {
    pub document: String,
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub bad_bit: SourceSpan,
}

impl DecodeError {
    pub fn new(document: &str, path: &Path, content: String, err: &serde_json::Error) -> Self {
        let bad_bit = span_at_line_column(&content, err.line(), err.column());
        Self {
            document: document.to_string(),
            message: err.to_string(),
            src: create_named_source(path, content),
            bad_bit,
        }
    }
}

/// Why a single document could not be checked
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read {document}")]
    #[diagnostic(code(proofcheck::io))]
    Io {
        document: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Structural(#[from] StructuralError),
}

impl LoadError {
    pub fn document(&self) -> &str {
        match self {
            LoadError::Io { document, .. } => document,
            LoadError::Decode(err) => &err.document,
            LoadError::Structural(err) => &err.document,
        }
    }
}
