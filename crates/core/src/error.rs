use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more inbound fields violated their declared rules.
    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    /// A mapping step was handed no source entity. This is a caller contract
    /// violation, never an empty result.
    #[error("Cannot build {target}: source {entity} is missing")]
    MissingSource {
        entity: &'static str,
        target: &'static str,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
