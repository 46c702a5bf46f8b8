//! Event creation and listing.
//!
//! Creation uploads the optional image first, inserts the event, then creates the address
//! for non-remote events. The steps are not transactional: a failed address insert leaves
//! the event in place and is reported to the caller. A failed image upload is logged and
//! the event is stored without an image.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    data::{
        address::AddressStore,
        coupon::CouponStore,
        event::{EventStore, EventWithAddress},
    },
    error::AppError,
    model::{
        coupon::CouponSummary,
        event::{CreateEventParams, Event, EventDetails, EventFilter, EventSummary},
    },
    service::{address::AddressService, coupon::CouponService},
    storage::{ImageStorage, ImageUpload},
};

/// Largest page size served; larger requests are capped.
pub const MAX_PAGE_SIZE: u64 = 100;

pub struct EventService<'a> {
    events: &'a dyn EventStore,
    addresses: &'a dyn AddressStore,
    coupons: &'a dyn CouponStore,
    storage: &'a dyn ImageStorage,
}

impl<'a> EventService<'a> {
    pub fn new(
        events: &'a dyn EventStore,
        addresses: &'a dyn AddressStore,
        coupons: &'a dyn CouponStore,
        storage: &'a dyn ImageStorage,
    ) -> Self {
        Self {
            events,
            addresses,
            coupons,
            storage,
        }
    }

    /// Creates an event, its image and, for non-remote events, its address
    ///
    /// # Returns
    /// - `Ok(Event)` - The persisted event, with `img_url` set if the upload succeeded
    /// - `Err(AppError::DbErr)` - Inserting the event or its address failed
    pub async fn create_event(&self, mut params: CreateEventParams) -> Result<Event, AppError> {
        let img_url = match params.image.take() {
            Some(image) => self.upload_image(image).await,
            None => None,
        };

        let event = Event::from_entity(self.events.create(&params, img_url).await?);

        if !params.remote {
            let address = AddressService::new(self.addresses)
                .create_address(&params, &event)
                .await?;

            tracing::debug!("Created address {} for event {}", address.id, event.id);
        }

        tracing::info!("Created event {} ({})", event.title, event.id);

        Ok(event)
    }

    /// Uploads an event image, returning its public URL or `None` on failure.
    async fn upload_image(&self, image: ImageUpload) -> Option<String> {
        let filename = image.filename.clone();

        match self.storage.upload(image).await {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(
                    "Failed to upload image {}, creating event without it: {}",
                    filename,
                    err
                );
                None
            }
        }
    }

    /// Gets a page of events dated from now on
    ///
    /// # Returns
    /// - `Ok(Vec<EventSummary>)` - The requested page
    /// - `Err(AppError::BadRequest)` - `page` is beyond any addressable row
    pub async fn get_upcoming_events(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<Vec<EventSummary>, AppError> {
        let page_size = Self::page_size(page, page_size)?;

        let rows = self
            .events
            .find_upcoming(Utc::now(), page, page_size)
            .await?;

        Ok(Self::summaries(rows))
    }

    /// Gets a page of events filtered by address and date range
    ///
    /// Empty or missing `city` and `uf` disable that filter. A missing `start` means the
    /// Unix epoch and a missing `end` means now. Pages are bounded as in
    /// `get_upcoming_events`.
    pub async fn get_filtered_events(
        &self,
        page: u64,
        page_size: u64,
        city: Option<String>,
        uf: Option<String>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<EventSummary>, AppError> {
        let page_size = Self::page_size(page, page_size)?;

        let filter = EventFilter {
            city: city.filter(|city| !city.is_empty()),
            uf: uf.filter(|uf| !uf.is_empty()),
            start: start.unwrap_or(DateTime::UNIX_EPOCH),
            end: end.unwrap_or_else(Utc::now),
        };

        let rows = self
            .events
            .find_filtered(&filter, page, page_size)
            .await?;

        Ok(Self::summaries(rows))
    }

    /// Gets all events whose title contains `title`, or every event when it is missing
    pub async fn search_events(&self, title: Option<&str>) -> Result<Vec<EventSummary>, AppError> {
        let title = title.filter(|title| !title.is_empty());

        let rows = self.events.find_by_title(title).await?;

        Ok(Self::summaries(rows))
    }

    /// Gets an event with its address and the coupons valid now
    ///
    /// # Returns
    /// - `Ok(EventDetails)` - The event details
    /// - `Err(AppError::NotFound)` - No event with `event_id`
    pub async fn get_event_details(&self, event_id: Uuid) -> Result<EventDetails, AppError> {
        let (event, address) = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let coupons = CouponService::new(self.events, self.coupons)
            .get_valid_coupons(event_id, Utc::now())
            .await?;

        Ok(EventDetails::from_summary(
            EventSummary::from_entity(event, address),
            coupons.into_iter().map(CouponSummary::from).collect(),
        ))
    }

    /// Clamps `page_size` to `1..=MAX_PAGE_SIZE` and checks that the page offset fits
    /// an SQL `OFFSET`.
    fn page_size(page: u64, page_size: u64) -> Result<u64, AppError> {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

        page.checked_mul(page_size)
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::BadRequest(format!("Page {} is out of range", page)))?;

        Ok(page_size)
    }

    fn summaries(rows: Vec<EventWithAddress>) -> Vec<EventSummary> {
        rows.into_iter()
            .map(|(event, address)| EventSummary::from_entity(event, address))
            .collect()
    }
}
