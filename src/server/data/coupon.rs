use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::coupon::CreateCouponParams;

#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Inserts a coupon linked to `event_id`. The event is not checked here.
    async fn create(
        &self,
        event_id: Uuid,
        params: &CreateCouponParams,
    ) -> Result<entity::coupon::Model, DbErr>;

    /// Coupons of the event whose `valid` is strictly after `current_time`, soonest to
    /// expire first.
    async fn find_valid_by_event(
        &self,
        event_id: Uuid,
        current_time: DateTime<Utc>,
    ) -> Result<Vec<entity::coupon::Model>, DbErr>;
}

pub struct CouponRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> CouponStore for CouponRepository<'a> {
    async fn create(
        &self,
        event_id: Uuid,
        params: &CreateCouponParams,
    ) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(params.code.clone()),
            discount: ActiveValue::Set(params.discount),
            valid: ActiveValue::Set(params.valid),
            event_id: ActiveValue::Set(event_id),
        }
        .insert(self.db)
        .await
    }

    async fn find_valid_by_event(
        &self,
        event_id: Uuid,
        current_time: DateTime<Utc>,
    ) -> Result<Vec<entity::coupon::Model>, DbErr> {
        entity::prelude::Coupon::find()
            .filter(entity::coupon::Column::EventId.eq(event_id))
            .filter(entity::coupon::Column::Valid.gt(current_time))
            .order_by_asc(entity::coupon::Column::Valid)
            .order_by_asc(entity::coupon::Column::Id)
            .all(self.db)
            .await
    }
}
