//! Read-side projection of a parish.

use serde::{Deserialize, Serialize};
use sok_core::parish::{Address, Parish};

/// Flat snapshot of a parish record for API responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParishDto {
    pub unique_id: String,
    pub full_name: String,
    pub diocese_name: String,
    pub address: Address,
}

impl From<&Parish> for ParishDto {
    fn from(parish: &Parish) -> Self {
        Self {
            unique_id: parish.unique_id.clone(),
            full_name: parish.full_name.clone(),
            diocese_name: parish.diocese.name.clone(),
            address: parish.address.clone(),
        }
    }
}
