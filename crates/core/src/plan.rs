//! Subscription plan entity.

use crate::types::{DbId, Timestamp};

/// A subscription plan as held by the domain layer.
#[derive(Debug, Clone)]
pub struct Plan {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
