//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the stores. They receive their stores and
//! the image storage as trait objects, convert entity models into domain models, and
//! decide which failures reach the caller.

pub mod address;
pub mod coupon;
pub mod event;

#[cfg(test)]
mod test;
