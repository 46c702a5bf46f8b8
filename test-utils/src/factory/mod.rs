//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let event = factory::create_event(&db).await?;
//! let coupon = factory::create_coupon(&db, event.id, Utc::now() + Duration::days(1)).await?;
//!
//! let (event, address) = factory::helpers::create_event_with_address(&db, "Porto", "PT").await?;
//! ```
//!
//! # Available Factories
//!
//! - `event` - Create event entities
//! - `address` - Create address entities
//! - `coupon` - Create coupon entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod address;
pub mod coupon;
pub mod event;
pub mod helpers;

pub use address::create_address;
pub use coupon::create_coupon;
pub use event::create_event;
