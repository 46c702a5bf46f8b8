use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::coupon::CouponSummaryDto;

/// Text fields of the multipart event creation form.
///
/// The optional `image` file part is read separately and is not part of this DTO.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: String,
    pub description: Option<String>,
    /// Unix timestamp in milliseconds.
    pub date: i64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub remote: bool,
    pub event_url: String,
}

/// A persisted event as returned by the creation endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub date: DateTime<Utc>,
    pub remote: bool,
    pub event_url: String,
    pub img_url: Option<String>,
}

/// Listing entry for upcoming, filtered and searched events.
///
/// `city` and `state` are empty strings for events without an address.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub date: DateTime<Utc>,
    pub city: String,
    pub state: String,
    pub remote: bool,
    pub event_url: String,
    pub img_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailsDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub date: DateTime<Utc>,
    pub city: String,
    pub state: String,
    pub img_url: Option<String>,
    pub event_url: String,
    pub coupons: Vec<CouponSummaryDto>,
}
