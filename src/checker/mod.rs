//! Cross-checks each proof's ABI inputs against its inner parameters

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;

use crate::models::{ConfigDocument, StructuralError};

/// Text printed when no positional suggestion exists
pub const NO_SUGGESTION: &str = "none";

/// An ABI input with no matching inner-parameters entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub document: String,
    pub proof_label: String,
    pub proof_index: usize,
    pub input_index: usize,
    pub missing: String,

    /// Inner-parameters key at the same position as the missing input.
    /// Advisory only.
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn suggestion_or_none(&self) -> &str {
        self.suggestion.as_deref().unwrap_or(NO_SUGGESTION)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File {} has missing inner parameter \"{}\" for {}. Did you mean \"{}\"?",
            self.document,
            self.missing,
            self.proof_label,
            self.suggestion_or_none()
        )
    }
}

pub struct ConfigCrossChecker;

impl ConfigCrossChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigCrossChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigCrossChecker {
    /// Lazily yield one diagnostic per ABI input whose name is not a key of
    /// its proof's inner parameters, in proof order then input order.
    pub fn check<'a>(
        &'a self,
        document: &'a ConfigDocument,
    ) -> impl Iterator<Item = Diagnostic> + 'a {
        document
            .merkle_proofs
            .iter()
            .enumerate()
            .flat_map(move |(proof_index, proof)| {
                let description = &proof.description;
                let params = &description.inner_parameters;

                description
                    .abi
                    .inputs
                    .iter()
                    .enumerate()
                    .filter(move |(_, input)| !params.contains(&input.name))
                    .map(move |(input_index, input)| Diagnostic {
                        document: document.name.clone(),
                        proof_label: proof.label(proof_index),
                        proof_index,
                        input_index,
                        missing: input.name.clone(),
                        suggestion: params.key_at(input_index).map(str::to_string),
                    })
            })
    }

    /// Type an already-decoded document and check it in one step
    pub fn check_json(
        &self,
        name: &str,
        value: &JsonValue,
    ) -> Result<Vec<Diagnostic>, StructuralError> {
        let document = ConfigDocument::from_json(name, value)?;
        Ok(self.check(&document).collect())
    }
}

#[cfg(test)]
mod tests;
