//! Declarative field validation.
//!
//! Input shapes declare their fields as `const` [`FieldSpec`] tables (see
//! [`FormModel`]); the evaluator checks a JSON record against those tables
//! without knowing anything about the concrete type.

pub mod evaluator;
pub mod form;
pub mod rules;

pub use evaluator::{evaluate_fields, validate_model};
pub use form::record_from_pairs;
pub use rules::{FieldSpec, FieldViolation, FormModel, InputKind, Rule, ValidationResult};
