use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponDto {
    pub code: String,
    pub discount: i32,
    /// Expiry as a Unix timestamp in milliseconds.
    pub valid: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: Uuid,
    pub code: String,
    pub discount: i32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub valid: DateTime<Utc>,
    pub event_id: Uuid,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponSummaryDto {
    pub code: String,
    pub discount: i32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub valid: DateTime<Utc>,
}
