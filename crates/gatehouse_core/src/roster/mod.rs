//! Roster presentation logic.
//!
//! # Responsibility
//! - Derive the displayable roster from snapshot, search, filter and sort
//!   inputs.
//! - Mediate create/update/delete requests between form input and the store.
//!
//! # Invariants
//! - The derived projection is recomputed, never mutated in place.
//! - Store failures surface as notifications only; they never escape.

pub mod sort;
pub mod view_model;
