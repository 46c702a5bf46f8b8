use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    data::{coupon::CouponStore, event::EventStore},
    error::AppError,
    model::coupon::{Coupon, CreateCouponParams},
};

pub struct CouponService<'a> {
    events: &'a dyn EventStore,
    coupons: &'a dyn CouponStore,
}

impl<'a> CouponService<'a> {
    pub fn new(events: &'a dyn EventStore, coupons: &'a dyn CouponStore) -> Self {
        Self { events, coupons }
    }

    /// Attaches a new coupon to an existing event
    ///
    /// # Returns
    /// - `Ok(Coupon)` - The persisted coupon
    /// - `Err(AppError::NotFound)` - No event with `event_id`; nothing is persisted
    pub async fn add_coupon_to_event(
        &self,
        event_id: Uuid,
        params: CreateCouponParams,
    ) -> Result<Coupon, AppError> {
        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        let coupon = self.coupons.create(event_id, &params).await?;

        tracing::info!("Added coupon {} to event {}", coupon.code, event_id);

        Ok(Coupon::from_entity(coupon))
    }

    /// Gets the coupons of an event still valid after `current_time`
    pub async fn get_valid_coupons(
        &self,
        event_id: Uuid,
        current_time: DateTime<Utc>,
    ) -> Result<Vec<Coupon>, AppError> {
        let coupons = self
            .coupons
            .find_valid_by_event(event_id, current_time)
            .await?;

        Ok(coupons.into_iter().map(Coupon::from_entity).collect())
    }
}
