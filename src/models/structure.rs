//! Structural errors raised at the JSON -> typed document boundary

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// What was wrong with a required field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralProblem {
    Missing,
    WrongType { expected: &'static str },
}

impl fmt::Display for StructuralProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralProblem::Missing => write!(f, "is missing"),
            StructuralProblem::WrongType { expected } => write!(f, "is not {expected}"),
        }
    }
}

/// A parsed document lacks a field the checker depends on.
///
/// Only the first problem in document order is reported; the document is
/// skipped as a whole.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("File {document}: required field `{field}` {problem}")]
#[diagnostic(
    code(proofcheck::structure),
    help("every merkle proof needs `description.abi.inputs` and `description.innerParameters`")
)]
pub struct StructuralError {
    pub document: String,
    pub field: String,
    pub problem: StructuralProblem,
}

impl StructuralError {
    pub fn missing(document: &str, field: impl Into<String>) -> Self {
        Self {
            document: document.to_string(),
            field: field.into(),
            problem: StructuralProblem::Missing,
        }
    }

    pub fn wrong_type(document: &str, field: impl Into<String>, expected: &'static str) -> Self {
        Self {
            document: document.to_string(),
            field: field.into(),
            problem: StructuralProblem::WrongType { expected },
        }
    }
}
