//! Domain types, entities and the declarative validation engine shared by
//! the SOK parish-management boundary layer.

pub mod error;
pub mod parish;
pub mod plan;
pub mod types;
pub mod validation;
