pub mod document;
pub mod inner_parameters;
pub mod structure;

// Re-export commonly used types
pub use document::{Abi, AbiInput, ConfigDocument, ProofDescription, ProofEntry};
pub use inner_parameters::InnerParameters;
pub use structure::{StructuralError, StructuralProblem};
