//! Event domain models and parameters.
//!
//! Provides the parameters for event creation, the filter used by listing queries, and
//! the views returned for created events, listings and event details. Listing and detail
//! views are built from an event joined with its optional address; a missing address
//! renders as empty city and state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::event::{CreateEventDto, EventDetailsDto, EventDto, EventSummaryDto},
    server::{
        error::AppError, model::coupon::CouponSummary, storage::ImageUpload,
        util::parse::parse_unix_millis,
    },
};

/// Parameters for creating an event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    /// City of the address, only used for non-remote events.
    pub city: String,
    /// State or region code of the address, only used for non-remote events.
    pub state: String,
    pub remote: bool,
    pub event_url: String,
    /// Image to upload before the event is stored.
    pub image: Option<ImageUpload>,
}

impl CreateEventParams {
    /// Converts the form DTO and optional image into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateEventParams)` - Converted parameters
    /// - `Err(AppError::BadRequest)` - `date` is outside the representable range
    pub fn from_dto(dto: CreateEventDto, image: Option<ImageUpload>) -> Result<Self, AppError> {
        Ok(Self {
            title: dto.title,
            description: dto.description,
            date: parse_unix_millis("date", dto.date)?,
            city: dto.city,
            state: dto.state,
            remote: dto.remote,
            event_url: dto.event_url,
            image,
        })
    }
}

/// Criteria for the filtered event listing.
///
/// `None` for `city` or `uf` disables that criterion; a value matches any address whose
/// field contains it. The date range is inclusive on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub city: Option<String>,
    pub uf: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A persisted event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub remote: bool,
    pub event_url: String,
    pub img_url: Option<String>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            remote: entity.remote,
            event_url: entity.event_url,
            img_url: entity.img_url,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            remote: self.remote,
            event_url: self.event_url,
            img_url: self.img_url,
        }
    }
}

/// Event listing entry with its address flattened into city and state.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub city: String,
    pub state: String,
    pub remote: bool,
    pub event_url: String,
    pub img_url: Option<String>,
}

impl EventSummary {
    /// Converts an event joined with its optional address.
    pub fn from_entity(
        event: entity::event::Model,
        address: Option<entity::address::Model>,
    ) -> Self {
        let (city, state) = address
            .map(|address| (address.city, address.uf))
            .unwrap_or_default();

        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            city,
            state,
            remote: event.remote,
            event_url: event.event_url,
            img_url: event.img_url,
        }
    }

    pub fn into_dto(self) -> EventSummaryDto {
        EventSummaryDto {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            city: self.city,
            state: self.state,
            remote: self.remote,
            event_url: self.event_url,
            img_url: self.img_url,
        }
    }
}

/// Event with its address and the coupons valid at query time.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub city: String,
    pub state: String,
    pub img_url: Option<String>,
    pub event_url: String,
    pub coupons: Vec<CouponSummary>,
}

impl EventDetails {
    pub fn from_summary(summary: EventSummary, coupons: Vec<CouponSummary>) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            date: summary.date,
            city: summary.city,
            state: summary.state,
            img_url: summary.img_url,
            event_url: summary.event_url,
            coupons,
        }
    }

    pub fn into_dto(self) -> EventDetailsDto {
        EventDetailsDto {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            city: self.city,
            state: self.state,
            img_url: self.img_url,
            event_url: self.event_url,
            coupons: self.coupons.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}
