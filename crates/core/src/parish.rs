//! Parish entity and its owned value objects.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Postal address of a parish.
///
/// A value object: copied, never shared. Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub apartment_number: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

/// A diocese a parish belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diocese {
    pub id: DbId,
    pub name: String,
}

/// A parish as held by the domain layer.
#[derive(Debug, Clone)]
pub struct Parish {
    pub id: DbId,
    /// Public identifier, stable across environments.
    pub unique_id: String,
    pub full_name: String,
    pub diocese: Diocese,
    pub address: Address,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
