//! Rule evaluator. Pure logic over JSON records.

use serde::Serialize;
use serde_json::{Map, Value};

use super::rules::{FieldSpec, FieldViolation, FormModel, Rule, ValidationResult};
use crate::error::CoreError;

/// Evaluate every declared field rule against a single record.
///
/// Fields present in the record but absent from `fields` are ignored.
pub fn evaluate_fields(fields: &[FieldSpec], data: &Map<String, Value>) -> ValidationResult {
    let mut errors = Vec::new();

    for field in fields {
        let value = data.get(field.name);
        for rule in field.rules {
            if let Some(violation) = evaluate_single_rule(field, rule, value) {
                errors.push(violation);
            }
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validate a typed model by evaluating its serialized form against
/// `T::FIELDS`.
pub fn validate_model<T>(model: &T) -> Result<(), CoreError>
where
    T: FormModel + Serialize,
{
    let record = match serde_json::to_value(model) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(CoreError::Internal(format!(
                "expected a JSON object for validation, got {other}"
            )))
        }
        Err(e) => {
            return Err(CoreError::Internal(format!(
                "failed to serialize model for validation: {e}"
            )))
        }
    };

    evaluate_fields(T::FIELDS, &record).into_result()
}

fn evaluate_single_rule(
    field: &FieldSpec,
    rule: &Rule,
    value: Option<&Value>,
) -> Option<FieldViolation> {
    match *rule {
        Rule::Required => evaluate_required(field, rule, value),
        Rule::Range { min, max } => evaluate_range(field, rule, value, min, max),
    }
}

fn violation(field: &FieldSpec, rule: &Rule, value: Option<&Value>) -> FieldViolation {
    let message = match *rule {
        Rule::Required => format!("The {} field is required.", field.display_name),
        Rule::Range { min, max } => format!(
            "The field {} must be between {min} and {max}.",
            field.display_name
        ),
    };

    FieldViolation {
        field: field.name.to_string(),
        rule_type: rule.name().to_string(),
        message,
        value: if field.is_sensitive() {
            None
        } else {
            value.cloned()
        },
    }
}

fn evaluate_required(
    field: &FieldSpec,
    rule: &Rule,
    value: Option<&Value>,
) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(field, rule, value)),
        Some(Value::String(s)) if s.trim().is_empty() => Some(violation(field, rule, value)),
        _ => None,
    }
}

fn evaluate_range(
    field: &FieldSpec,
    rule: &Rule,
    value: Option<&Value>,
    min: i64,
    max: i64,
) -> Option<FieldViolation> {
    let val = match value {
        Some(v) if !v.is_null() => v,
        _ => return None, // presence is Required's job
    };

    match integer_value(val) {
        Some(n) if (min..=max).contains(&n) => None,
        _ => Some(violation(field, rule, Some(val))),
    }
}

/// Only JSON integers are comparable. Form values are coerced before they
/// get here (see [`record_from_pairs`](super::form::record_from_pairs)).
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}
