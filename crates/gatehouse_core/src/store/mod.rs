//! Store layer contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the asynchronous CRUD contract over the canonical roster.
//! - Keep collection ownership and simulated-latency details inside the
//!   store boundary.
//!
//! # Invariants
//! - The store exclusively owns the canonical collection; callers only ever
//!   see independent snapshots.
//! - Store APIs return semantic errors (`NotFound`, `Unavailable`) rather
//!   than panicking.

pub mod resident_store;
