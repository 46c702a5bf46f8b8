//! Coupon domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::coupon::{CouponDto, CouponSummaryDto, CreateCouponDto},
    server::{error::AppError, util::parse::parse_unix_millis},
};

/// Parameters for attaching a coupon to an event.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCouponParams {
    pub code: String,
    pub discount: i32,
    /// Expiry instant. Dates in the past are accepted.
    pub valid: DateTime<Utc>,
}

impl CreateCouponParams {
    /// Converts the request DTO, decoding the millisecond expiry timestamp.
    ///
    /// # Returns
    /// - `Ok(CreateCouponParams)` - Converted parameters
    /// - `Err(AppError::BadRequest)` - `valid` is outside the representable range
    pub fn from_dto(dto: CreateCouponDto) -> Result<Self, AppError> {
        Ok(Self {
            code: dto.code,
            discount: dto.discount,
            valid: parse_unix_millis("valid", dto.valid)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub discount: i32,
    pub valid: DateTime<Utc>,
    pub event_id: Uuid,
}

impl Coupon {
    pub fn from_entity(entity: entity::coupon::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            discount: entity.discount,
            valid: entity.valid,
            event_id: entity.event_id,
        }
    }

    pub fn into_dto(self) -> CouponDto {
        CouponDto {
            id: self.id,
            code: self.code,
            discount: self.discount,
            valid: self.valid,
            event_id: self.event_id,
        }
    }
}

/// Coupon fields shown inside event details.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponSummary {
    pub code: String,
    pub discount: i32,
    pub valid: DateTime<Utc>,
}

impl From<Coupon> for CouponSummary {
    fn from(coupon: Coupon) -> Self {
        Self {
            code: coupon.code,
            discount: coupon.discount,
            valid: coupon.valid,
        }
    }
}

impl CouponSummary {
    pub fn into_dto(self) -> CouponSummaryDto {
        CouponSummaryDto {
            code: self.code,
            discount: self.discount,
            valid: self.valid,
        }
    }
}
