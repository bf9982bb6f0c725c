//! Roster view-model.
//!
//! # Responsibility
//! - Produce the exact set and order of rows to display from the current
//!   snapshot, search text, type filter and sort state.
//! - Mediate create/update/delete between form input and the store.
//!
//! # Invariants
//! - `rows()` is a pure function of its inputs and never mutates the
//!   snapshot.
//! - A failed store call leaves view-model state unchanged; the failure
//!   surfaces only through the notifier.
//! - Mutations trigger a full reload rather than incremental patching, so
//!   the view always reflects the store's authoritative state.

use crate::form::{FormErrors, ResidentForm};
use crate::model::resident::{AccessType, NewResident, Resident, ResidentId, ResidentPatch};
use crate::notify::Notifier;
use crate::roster::sort::{SortField, SortState};
use crate::store::resident_store::ResidentStore;
use chrono::Utc;
use log::warn;
use std::sync::Arc;

/// Access-type filter applied after the search text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// No type filtering; every access class is shown.
    #[default]
    All,
    Only(AccessType),
}

impl TypeFilter {
    fn admits(self, resident: &Resident) -> bool {
        match self {
            Self::All => true,
            Self::Only(access_type) => resident.access_type == access_type,
        }
    }
}

/// Derives the displayable roster and forwards mutations to the store.
///
/// Holds the last successfully loaded snapshot; the displayed rows are
/// recomputed from it on demand.
pub struct RosterViewModel<S: ResidentStore> {
    store: S,
    notifier: Arc<dyn Notifier>,
    snapshot: Vec<Resident>,
    search: String,
    filter: TypeFilter,
    sort: SortState,
}

impl<S: ResidentStore> RosterViewModel<S> {
    pub fn new(store: S, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            snapshot: Vec::new(),
            search: String::new(),
            filter: TypeFilter::default(),
            sort: SortState::default(),
        }
    }

    /// Replaces the snapshot with a fresh store read.
    ///
    /// On failure the previous snapshot is kept so a transient outage does
    /// not blank the display.
    pub async fn reload(&mut self) {
        match self.store.list_all().await {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(err) => {
                warn!("event=roster_reload module=roster status=error reason={err}");
                self.notifier.error("Failed to load residents");
            }
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    /// Applies the column-header toggle rule to the sort state.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.select(field);
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Direct access to the underlying store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Derives the displayable rows from the current inputs.
    ///
    /// Search keeps records whose name or house number contains the text
    /// case-insensitively; the type filter then AND-composes on top. The
    /// result is stably sorted, so equal keys keep snapshot order. An empty
    /// result is a valid state, not an error.
    pub fn rows(&self) -> Vec<Resident> {
        let needle = self.search.to_lowercase();
        let mut rows: Vec<Resident> = self
            .snapshot
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.name.to_lowercase().contains(&needle)
                    || r.house_number.to_lowercase().contains(&needle)
            })
            .filter(|r| self.filter.admits(r))
            .cloned()
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }

    /// Number of rows the current inputs derive; shown next to the filter.
    pub fn entry_count(&self) -> usize {
        self.rows().len()
    }

    /// Blank form for the add dialog, or a pre-filled one when editing.
    pub fn form_for(&self, existing: Option<&Resident>) -> ResidentForm {
        match existing {
            Some(resident) => ResidentForm::prefilled(resident),
            None => ResidentForm::default(),
        }
    }

    /// Validates the form and forwards the payload to the store.
    ///
    /// With `existing` the payload updates that record and leaves
    /// `last_visit` untouched; without it a new record is created with
    /// `last_visit` set to now.
    ///
    /// # Errors
    /// Returns field-level [`FormErrors`] without touching the store when
    /// validation fails. Store failures are absorbed and surfaced through
    /// the notifier; the snapshot is left unchanged.
    pub async fn submit(
        &mut self,
        form: &ResidentForm,
        existing: Option<ResidentId>,
    ) -> Result<(), FormErrors> {
        let validated = form.validate()?;

        let outcome = match existing {
            Some(id) => {
                let patch = ResidentPatch {
                    name: Some(validated.name),
                    house_number: Some(validated.house_number),
                    access_type: Some(validated.access_type),
                    last_visit: None,
                };
                self.store
                    .update(id, patch)
                    .await
                    .map(|_| "Resident updated successfully")
            }
            None => {
                let data = NewResident {
                    name: validated.name,
                    house_number: validated.house_number,
                    access_type: validated.access_type,
                    last_visit: Utc::now(),
                };
                self.store
                    .create(data)
                    .await
                    .map(|_| "Resident added successfully")
            }
        };

        match outcome {
            Ok(message) => {
                self.notifier.success(message);
                self.reload().await;
            }
            Err(err) => {
                warn!("event=roster_submit module=roster status=error reason={err}");
                self.notifier.error("Failed to save resident");
            }
        }

        Ok(())
    }

    /// Removes a record and reloads the snapshot.
    pub async fn delete(&mut self, id: ResidentId) {
        match self.store.delete(id).await {
            Ok(()) => {
                self.notifier.success("Resident deleted successfully");
                self.reload().await;
            }
            Err(err) => {
                warn!("event=roster_delete module=roster status=error reason={err}");
                self.notifier.error("Failed to delete resident");
            }
        }
    }
}
