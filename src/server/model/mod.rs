//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models after the store boundary and
//! transformed to DTOs at the controller boundary.

pub mod address;
pub mod coupon;
pub mod event;
