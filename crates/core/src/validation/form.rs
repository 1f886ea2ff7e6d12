//! Conversion of form-encoded pairs into a JSON record.
//!
//! Form posts carry every value as a string. Declared fields are coerced by
//! their [`InputKind`] so the evaluator and typed deserialization see the
//! same values a JSON body would carry.

use serde_json::{Map, Value};

use super::rules::{FieldSpec, InputKind};

/// Build a record from decoded `(name, value)` pairs.
///
/// - `Number`: parsed as an integer when possible, blank becomes `null`,
///   anything else is kept as a string (and will fail its range rule).
/// - `Checkbox`: `true`, `on` and `1` are checked. Repeated keys (a checkbox
///   followed by a hidden `false` input) are OR-ed together.
/// - Everything else keeps the first value submitted.
pub fn record_from_pairs(fields: &[FieldSpec], pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut record = Map::new();

    for (name, raw) in pairs {
        let kind = fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.input)
            .unwrap_or(InputKind::Text);

        match kind {
            InputKind::Checkbox => {
                let checked = is_checked(&raw);
                let entry = record.entry(name).or_insert(Value::Bool(false));
                if checked {
                    *entry = Value::Bool(true);
                }
            }
            InputKind::Number => {
                record.entry(name).or_insert_with(|| coerce_number(raw));
            }
            InputKind::Text | InputKind::Password => {
                record.entry(name).or_insert(Value::String(raw));
            }
        }
    }

    record
}

fn is_checked(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("on") || raw == "1"
}

fn coerce_number(raw: String) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::String(raw),
    }
}
