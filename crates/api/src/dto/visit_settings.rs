//! Input shape for the per-visit time-unit setting.

use serde::{Deserialize, Serialize};
use sok_core::error::CoreError;
use sok_core::validation::{validate_model, FieldSpec, FormModel, InputKind, Rule};

/// Shortest allowed visit, in minutes.
pub const MIN_MINUTES_PER_VISIT: i32 = 3;

/// Longest allowed visit, in minutes.
pub const MAX_MINUTES_PER_VISIT: i32 = 20;

/// Request body for changing how many minutes a single visit takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetMinutesPerVisitDto {
    pub minutes_per_visit: i32,
}

impl FormModel for SetMinutesPerVisitDto {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::new(
        "MinutesPerVisit",
        "Minutes per visit",
        InputKind::Number,
        &[
            Rule::Required,
            Rule::Range {
                min: MIN_MINUTES_PER_VISIT as i64,
                max: MAX_MINUTES_PER_VISIT as i64,
            },
        ],
    )];
}

impl SetMinutesPerVisitDto {
    pub fn new(minutes_per_visit: i32) -> Self {
        Self { minutes_per_visit }
    }

    /// Check the declared rules against this value.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_model(self)
    }
}
