use crate::server::{
    data::Repositories,
    error::{storage::StorageError, AppError},
    model::{
        coupon::CreateCouponParams,
        event::CreateEventParams,
    },
    service::{
        address::AddressService,
        coupon::CouponService,
        event::{EventService, MAX_PAGE_SIZE},
    },
    storage::{ImageUpload, MockImageStorage},
};
use bytes::Bytes;
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};


fn create_params(title: &str, remote: bool) -> CreateEventParams {
    CreateEventParams {
        title: title.to_string(),
        description: None,
        date: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        city: String::new(),
        state: String::new(),
        remote,
        event_url: format!("https://{}.example.com", title.to_lowercase()),
        image: None,
    }
}

fn image(filename: &str) -> ImageUpload {
    ImageUpload {
        filename: filename.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: Bytes::from_static(b"png-bytes"),
    }
}

/// Storage that fails the test if an upload is attempted.
fn unused_storage() -> MockImageStorage {
    let mut storage = MockImageStorage::new();
    storage.expect_upload().never();
    storage
}
