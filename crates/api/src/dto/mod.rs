//! Data-transfer objects and view models exchanged at the HTTP boundary.
//!
//! Outbound projections ([`ParishDto`], [`PlanDto`]) are built from
//! `sok_core` entities. Inbound shapes ([`SetMinutesPerVisitDto`],
//! [`LoginVm`]) declare their field rules through
//! [`FormModel`](sok_core::validation::FormModel).

pub mod login;
pub mod parish;
pub mod plan;
pub mod visit_settings;

pub use login::LoginVm;
pub use parish::ParishDto;
pub use plan::PlanDto;
pub use visit_settings::{SetMinutesPerVisitDto, MAX_MINUTES_PER_VISIT, MIN_MINUTES_PER_VISIT};
