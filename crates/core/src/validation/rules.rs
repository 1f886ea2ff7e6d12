//! Field rule and result types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single constraint declared on an inbound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Rejects absent, null and blank values.
    Required,
    /// Inclusive integer bounds. Absent values pass.
    Range { min: i64, max: i64 },
}

impl Rule {
    /// Name reported in [`FieldViolation::rule_type`].
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Range { .. } => "range",
        }
    }
}

/// Data-type hint for rendering a field.
///
/// Form decoding uses it to coerce string values, and `Password` fields never
/// have their value echoed back in a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    Number,
    Checkbox,
}

/// Declared shape of one inbound field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name, as it appears in JSON bodies and form posts.
    pub name: &'static str,
    /// Human-readable label used in messages.
    pub display_name: &'static str,
    pub input: InputKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        input: InputKind,
        rules: &'static [Rule],
    ) -> Self {
        Self {
            name,
            display_name,
            input,
            rules,
        }
    }

    pub fn is_sensitive(&self) -> bool {
        self.input == InputKind::Password
    }
}

/// An input shape that declares its field rules for the evaluator.
pub trait FormModel {
    const FIELDS: &'static [FieldSpec];

    /// Look up a declared field by wire name.
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }
}

/// Aggregated result of evaluating all field rules against one record.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Convert into a `Result`, carrying every violation on failure.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self.errors))
        }
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
