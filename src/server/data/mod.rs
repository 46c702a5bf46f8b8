//! Database store layer for events, addresses and coupons.
//!
//! Each store is an async trait implemented by a SeaORM repository borrowing the
//! database connection. Services receive stores as trait objects so that the query
//! layer can be swapped out. Stores return SeaORM entity models; listing queries return
//! an event explicitly left-joined with its optional address.

pub mod address;
pub mod coupon;
pub mod event;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::data::{
    address::AddressRepository, coupon::CouponRepository, event::EventRepository,
};

/// The SeaORM repositories for one database connection.
pub struct Repositories<'a> {
    pub events: EventRepository<'a>,
    pub addresses: AddressRepository<'a>,
    pub coupons: CouponRepository<'a>,
}

impl<'a> Repositories<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            events: EventRepository::new(db),
            addresses: AddressRepository::new(db),
            coupons: CouponRepository::new(db),
        }
    }
}
