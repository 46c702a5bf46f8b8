//! API data transfer objects.
//!
//! Request and response shapes exchanged over HTTP. Field names are camelCase on the wire
//! and timestamps are Unix milliseconds.

pub mod api;
pub mod coupon;
pub mod event;
