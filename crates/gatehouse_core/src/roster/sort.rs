//! Roster ordering.
//!
//! # Responsibility
//! - Provide the single-field comparator family used by the roster view.
//! - Track the active sort field and direction with toggle semantics.
//!
//! # Invariants
//! - Exactly one field is active at a time.
//! - Equal keys keep snapshot order; callers must apply a stable sort.

use crate::model::resident::Resident;
use std::cmp::Ordering;

/// Column a roster view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    HouseNumber,
    AccessType,
    LastVisit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort field plus direction.
///
/// Defaults to most-recent-visit first, the order a gate operator wants
/// when the page opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::LastVisit,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Selecting the active field flips direction; selecting a different
    /// field resets to ascending.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Directed comparison of two records by the active field.
    pub fn compare(&self, a: &Resident, b: &Resident) -> Ordering {
        let ordering = compare_by_field(a, b, self.field);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Ascending comparison of two records by one field.
///
/// String fields compare case-insensitively so ordering reads naturally for
/// mixed-case names; `LastVisit` compares by instant, never by the ISO
/// string form.
pub fn compare_by_field(a: &Resident, b: &Resident, field: SortField) -> Ordering {
    match field {
        SortField::Name => fold_case(&a.name).cmp(&fold_case(&b.name)),
        SortField::HouseNumber => fold_case(&a.house_number).cmp(&fold_case(&b.house_number)),
        SortField::AccessType => a.access_type.as_str().cmp(b.access_type.as_str()),
        SortField::LastVisit => a.last_visit.cmp(&b.last_visit),
    }
}

fn fold_case(value: &str) -> String {
    value.to_lowercase()
}
