//! Read-side projection of a subscription plan.

use serde::Serialize;
use sok_core::error::CoreError;
use sok_core::plan::Plan;
use sok_core::types::DbId;

/// Snapshot of a plan's identity.
///
/// Only constructible from a [`Plan`]; the copied fields cannot be changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlanDto {
    id: DbId,
    name: String,
}

impl PlanDto {
    /// Build from a source that may be missing.
    ///
    /// A missing plan is a caller error and is reported as
    /// [`CoreError::MissingSource`], never as an empty DTO.
    pub fn try_from_source(plan: Option<&Plan>) -> Result<Self, CoreError> {
        plan.map(Self::from).ok_or(CoreError::MissingSource {
            entity: "Plan",
            target: "PlanDto",
        })
    }

    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Plan> for PlanDto {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name.clone(),
        }
    }
}
