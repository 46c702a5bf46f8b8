//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a non-remote event together with its address.
///
/// # Arguments
/// - `db` - Database connection
/// - `city` - Address city
/// - `uf` - Address state/region code
///
/// # Returns
/// - `Ok((event, address))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_address(
    db: &DatabaseConnection,
    city: &str,
    uf: &str,
) -> Result<(entity::event::Model, entity::address::Model), DbErr> {
    let event = crate::factory::event::EventFactory::new(db)
        .remote(false)
        .build()
        .await?;
    let address = crate::factory::address::create_address(db, event.id, city, uf).await?;

    Ok((event, address))
}
