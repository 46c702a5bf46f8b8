//! SeaORM entity definitions for the event board schema.
//!
//! Tables mirror the migrations in the `migration` crate. Associations are declared as
//! relations only; nothing is loaded lazily, callers join or query explicitly.

pub mod prelude;

pub mod address;
pub mod coupon;
pub mod event;
