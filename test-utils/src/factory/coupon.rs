//! Coupon factory for creating test coupon entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test coupons linked to an event.
///
/// # Example
///
/// ```rust,ignore
/// let coupon = CouponFactory::new(&db, event.id)
///     .code("SAVE10")
///     .valid(Utc::now() + Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct CouponFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: Uuid,
    code: String,
    discount: i32,
    valid: DateTime<Utc>,
}

impl<'a> CouponFactory<'a> {
    /// Creates a new CouponFactory for `event_id`.
    ///
    /// Defaults:
    /// - code: `"COUPON{id}"` where id is auto-incremented
    /// - discount: `10`
    /// - valid: 1 day from now
    pub fn new(db: &'a DatabaseConnection, event_id: Uuid) -> Self {
        Self {
            db,
            event_id,
            code: format!("COUPON{}", next_id()),
            discount: 10,
            valid: Utc::now() + Duration::days(1),
        }
    }

    /// Sets the coupon code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the discount.
    pub fn discount(mut self, discount: i32) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the expiry instant.
    pub fn valid(mut self, valid: DateTime<Utc>) -> Self {
        self.valid = valid;
        self
    }

    /// Builds and inserts the coupon entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::coupon::Model)` - Created coupon entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(self.code),
            discount: ActiveValue::Set(self.discount),
            valid: ActiveValue::Set(self.valid),
            event_id: ActiveValue::Set(self.event_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a coupon expiring at `valid` for `event_id`.
pub async fn create_coupon(
    db: &DatabaseConnection,
    event_id: Uuid,
    valid: DateTime<Utc>,
) -> Result<entity::coupon::Model, DbErr> {
    CouponFactory::new(db, event_id).valid(valid).build().await
}
