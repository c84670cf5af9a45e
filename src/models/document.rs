use serde_json::{Map as JsonMap, Value as JsonValue};

use super::inner_parameters::InnerParameters;
use super::structure::StructuralError;

/// One configuration file's worth of merkle proofs
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    /// Origin identifier (the file name), used in every diagnostic
    pub name: String,
    pub merkle_proofs: Vec<ProofEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProofEntry {
    pub description: ProofDescription,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProofDescription {
    /// Human-readable name of the proof
    pub description: Option<String>,
    pub abi: Abi,
    pub inner_parameters: InnerParameters,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Abi {
    /// Positional parameter list; order is significant
    pub inputs: Vec<AbiInput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbiInput {
    pub name: String,

    /// The ABI `type` attribute, carried along but never checked
    pub kind: Option<String>,
}

impl AbiInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }
}

impl ProofEntry {
    /// Label used in diagnostics; falls back to the entry's position
    pub fn label(&self, index: usize) -> String {
        match &self.description.description {
            Some(text) => text.clone(),
            None => format!("merkle_proofs[{index}]"),
        }
    }
}

impl ConfigDocument {
    pub fn new(name: impl Into<String>, merkle_proofs: Vec<ProofEntry>) -> Self {
        Self {
            name: name.into(),
            merkle_proofs,
        }
    }

    /// Convert a decoded JSON document into typed records.
    ///
    /// Stops at the first structural problem, naming the field path.
    pub fn from_json(name: &str, value: &JsonValue) -> Result<Self, StructuralError> {
        let root = value
            .as_object()
            .ok_or_else(|| StructuralError::wrong_type(name, "<root>", "an object"))?;

        let proofs = require_array(name, root, "merkle_proofs", "merkle_proofs")?;

        let merkle_proofs = proofs
            .iter()
            .enumerate()
            .map(|(index, proof)| parse_proof(name, index, proof))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(name, merkle_proofs))
    }
}

fn parse_proof(
    document: &str,
    index: usize,
    proof: &JsonValue,
) -> Result<ProofEntry, StructuralError> {
    let path = format!("merkle_proofs[{index}]");
    let proof = proof
        .as_object()
        .ok_or_else(|| StructuralError::wrong_type(document, path.clone(), "an object"))?;

    let description_path = format!("{path}.description");
    let description = require_object(document, proof, "description", &description_path)?;

    let abi_path = format!("{description_path}.abi");
    let abi = require_object(document, description, "abi", &abi_path)?;

    let inputs_path = format!("{abi_path}.inputs");
    let inputs = require_array(document, abi, "inputs", &inputs_path)?
        .iter()
        .enumerate()
        .map(|(position, input)| {
            parse_input(document, &format!("{inputs_path}[{position}]"), input)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let inner_path = format!("{description_path}.innerParameters");
    let inner_parameters = InnerParameters::from(require_object(
        document,
        description,
        "innerParameters",
        &inner_path,
    )?);

    Ok(ProofEntry {
        description: ProofDescription {
            description: description
                .get("description")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            abi: Abi { inputs },
            inner_parameters,
        },
    })
}

fn parse_input(
    document: &str,
    path: &str,
    input: &JsonValue,
) -> Result<AbiInput, StructuralError> {
    let input = input
        .as_object()
        .ok_or_else(|| StructuralError::wrong_type(document, path, "an object"))?;

    let name_path = format!("{path}.name");
    let name = match input.get("name") {
        Some(JsonValue::String(name)) => name.clone(),
        Some(_) => return Err(StructuralError::wrong_type(document, name_path, "a string")),
        None => return Err(StructuralError::missing(document, name_path)),
    };

    Ok(AbiInput {
        name,
        kind: input
            .get("type")
            .and_then(JsonValue::as_str)
            .map(str::to_string),
    })
}

fn require_object<'a>(
    document: &str,
    parent: &'a JsonMap<String, JsonValue>,
    key: &str,
    path: &str,
) -> Result<&'a JsonMap<String, JsonValue>, StructuralError> {
    match parent.get(key) {
        Some(JsonValue::Object(map)) => Ok(map),
        Some(_) => Err(StructuralError::wrong_type(document, path, "an object")),
        None => Err(StructuralError::missing(document, path)),
    }
}

fn require_array<'a>(
    document: &str,
    parent: &'a JsonMap<String, JsonValue>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<JsonValue>, StructuralError> {
    match parent.get(key) {
        Some(JsonValue::Array(items)) => Ok(items),
        Some(_) => Err(StructuralError::wrong_type(document, path, "an array")),
        None => Err(StructuralError::missing(document, path)),
    }
}
