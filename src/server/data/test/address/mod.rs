use crate::server::data::address::{AddressRepository, AddressStore};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
