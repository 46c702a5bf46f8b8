use crate::server::{
    data::coupon::{CouponRepository, CouponStore},
    model::coupon::CreateCouponParams,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_valid_by_event;
