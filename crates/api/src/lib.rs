//! SOK API boundary library.
//!
//! Exposes the DTOs and view models exchanged with HTTP clients, the error
//! type and response envelope used at the boundary, and the extractors that
//! run declarative field validation on inbound bodies.

pub mod dto;
pub mod error;
pub mod extract;
pub mod response;
