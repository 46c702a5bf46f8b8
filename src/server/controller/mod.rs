//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into domain parameters, call the
//! services and convert the results back into response DTOs.

pub mod coupon;
pub mod event;
