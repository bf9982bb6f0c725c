//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gatehouse_core` linkage.
//! - Print the seeded roster in default view order for quick local checks.

use gatehouse_core::{LogNotifier, MemoryResidentStore, RosterViewModel};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("gatehouse_core ping={}", gatehouse_core::ping());
    println!("gatehouse_core version={}", gatehouse_core::core_version());

    let store =
        MemoryResidentStore::with_latency(gatehouse_core::seed_roster(), Duration::ZERO);
    let mut roster = RosterViewModel::new(store, Arc::new(LogNotifier));
    roster.reload().await;

    for resident in roster.rows() {
        println!(
            "{:<20} {:<8} {:<10} {}",
            resident.name,
            resident.house_number,
            resident.access_type,
            resident.last_visit.to_rfc3339()
        );
    }
}
