//! Resident store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable async CRUD APIs over the canonical roster collection.
//! - Simulate the latency and failure modes of a remote roster service.
//!
//! # Invariants
//! - `id` is assigned on create and never overwritten by `update`.
//! - `delete` is idempotent; removing an absent id is not an error.
//! - Mutations are not pushed to observers; callers reload via `list_all`.

use crate::model::resident::{AccessType, NewResident, Resident, ResidentId, ResidentPatch};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for roster CRUD operations.
#[derive(Debug)]
pub enum StoreError {
    /// An operation referenced an id that is not in the collection.
    NotFound(ResidentId),
    /// Transient failure of the simulated backing service.
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "resident not found: {id}"),
            Self::Unavailable(reason) => write!(f, "roster store unavailable: {reason}"),
        }
    }
}

impl Error for StoreError {}

/// Asynchronous CRUD contract over the roster collection.
///
/// Every operation may suspend the caller at the store boundary. There are
/// no transaction or compare-and-swap semantics; the last write to complete
/// wins.
#[async_trait]
pub trait ResidentStore: Send + Sync {
    /// Returns an independent snapshot of all current records.
    async fn list_all(&self) -> StoreResult<Vec<Resident>>;

    /// Returns the matching record, or `Ok(None)` when the id is absent.
    async fn get_by_id(&self, id: ResidentId) -> StoreResult<Option<Resident>>;

    /// Assigns a fresh id, appends, and returns the stored record.
    async fn create(&self, data: NewResident) -> StoreResult<Resident>;

    /// Merges supplied patch fields into the existing record.
    ///
    /// Fails with [`StoreError::NotFound`] when `id` does not exist. Field
    /// contents are not re-validated here; callers pre-validate through the
    /// form contract.
    async fn update(&self, id: ResidentId, patch: ResidentPatch) -> StoreResult<Resident>;

    /// Removes the record with `id`. Idempotent.
    async fn delete(&self, id: ResidentId) -> StoreResult<()>;
}

/// In-memory roster store with simulated per-operation latency.
///
/// The collection resets with the process; there is no persistence.
pub struct MemoryResidentStore {
    residents: RwLock<Vec<Resident>>,
    latency: Duration,
    fail_next_list: AtomicBool,
}

impl MemoryResidentStore {
    /// Latency applied to every operation by default, mirroring the feel of
    /// a nearby network service.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

    pub fn new(seed: Vec<Resident>) -> Self {
        Self::with_latency(seed, Self::DEFAULT_LATENCY)
    }

    /// Creates a store with explicit latency; tests pass `Duration::ZERO`.
    pub fn with_latency(seed: Vec<Resident>, latency: Duration) -> Self {
        Self {
            residents: RwLock::new(seed),
            latency,
            fail_next_list: AtomicBool::new(false),
        }
    }

    /// Arms a one-shot transient failure: the next `list_all` returns
    /// [`StoreError::Unavailable`] and disarms.
    pub fn fail_next_list(&self) {
        self.fail_next_list.store(true, Ordering::SeqCst);
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ResidentStore for MemoryResidentStore {
    async fn list_all(&self) -> StoreResult<Vec<Resident>> {
        self.simulate_latency().await;
        if self.fail_next_list.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "simulated roster outage".to_string(),
            ));
        }
        Ok(self.residents.read().await.clone())
    }

    async fn get_by_id(&self, id: ResidentId) -> StoreResult<Option<Resident>> {
        self.simulate_latency().await;
        let residents = self.residents.read().await;
        Ok(residents.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, data: NewResident) -> StoreResult<Resident> {
        self.simulate_latency().await;
        let resident = Resident {
            id: Uuid::new_v4(),
            name: data.name,
            house_number: data.house_number,
            access_type: data.access_type,
            last_visit: data.last_visit,
        };
        let mut residents = self.residents.write().await;
        residents.push(resident.clone());
        Ok(resident)
    }

    async fn update(&self, id: ResidentId, patch: ResidentPatch) -> StoreResult<Resident> {
        self.simulate_latency().await;
        let mut residents = self.residents.write().await;
        let resident = residents
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(name) = patch.name {
            resident.name = name;
        }
        if let Some(house_number) = patch.house_number {
            resident.house_number = house_number;
        }
        if let Some(access_type) = patch.access_type {
            resident.access_type = access_type;
        }
        if let Some(last_visit) = patch.last_visit {
            resident.last_visit = last_visit;
        }

        Ok(resident.clone())
    }

    async fn delete(&self, id: ResidentId) -> StoreResult<()> {
        self.simulate_latency().await;
        let mut residents = self.residents.write().await;
        residents.retain(|r| r.id != id);
        Ok(())
    }
}

/// Demo roster the store starts from on every process launch.
pub fn seed_roster() -> Vec<Resident> {
    vec![
        seed_record("Adebayo Fatai", "A-101", AccessType::Resident, visit(2025, 1, 15, 14, 30)),
        seed_record("Sarah Johnson", "B-205", AccessType::Resident, visit(2025, 1, 14, 9, 15)),
        seed_record("Michael Chukwudi", "C-310", AccessType::Staff, visit(2025, 1, 15, 16, 45)),
        seed_record("Lateef Olawale", "A-102", AccessType::Visitor, visit(2025, 1, 13, 11, 20)),
        seed_record("Robert Wilson", "D-408", AccessType::Resident, visit(2025, 1, 15, 18, 0)),
        seed_record("Deborah Smith", "B-203", AccessType::Visitor, visit(2025, 1, 12, 15, 30)),
        seed_record("Abubakar Musa", "C-315", AccessType::Staff, visit(2025, 1, 15, 8, 0)),
        seed_record("Jennifer Davis", "A-105", AccessType::Resident, visit(2025, 1, 14, 20, 15)),
    ]
}

fn seed_record(
    name: &str,
    house_number: &str,
    access_type: AccessType,
    last_visit: DateTime<Utc>,
) -> Resident {
    Resident {
        id: Uuid::new_v4(),
        name: name.to_string(),
        house_number: house_number.to_string(),
        access_type,
        last_visit,
    }
}

fn visit(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    // UTC has no DST gaps, so valid calendar inputs are always unambiguous.
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
