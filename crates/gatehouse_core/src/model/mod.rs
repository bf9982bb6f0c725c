//! Domain model for the estate access roster.
//!
//! # Responsibility
//! - Define the canonical record tracked at the estate gate.
//! - Keep create/update payload shapes next to the record they target.
//!
//! # Invariants
//! - Every record is identified by a stable `ResidentId`.
//! - Deletion is hard removal; there are no tombstones.

pub mod resident;
