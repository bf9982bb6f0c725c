//! Core domain logic for the Gatehouse estate roster.
//! This crate is the single source of truth for roster invariants.

pub mod auth;
pub mod form;
pub mod logging;
pub mod model;
pub mod notify;
pub mod roster;
pub mod store;

pub use auth::Session;
pub use form::{FormErrors, ResidentForm, ValidatedResident};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::resident::{AccessType, NewResident, Resident, ResidentId, ResidentPatch};
pub use notify::{LogNotifier, Notifier};
pub use roster::sort::{compare_by_field, SortDirection, SortField, SortState};
pub use roster::view_model::{RosterViewModel, TypeFilter};
pub use store::resident_store::{
    seed_roster, MemoryResidentStore, ResidentStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
