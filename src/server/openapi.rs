use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        coupon::{CouponDto, CouponSummaryDto, CreateCouponDto},
        event::{CreateEventDto, EventDetailsDto, EventDto, EventSummaryDto},
    },
    server::controller::{
        coupon::{self, COUPON_TAG},
        event::{self, EVENT_TAG},
    },
};

/// OpenAPI document for the event board API
#[derive(OpenApi)]
#[openapi(
    paths(
        event::create_event,
        event::get_events,
        event::get_filtered_events,
        event::search_events,
        event::get_event_details,
        coupon::add_coupon_to_event,
    ),
    components(schemas(
        CreateEventDto,
        EventDto,
        EventSummaryDto,
        EventDetailsDto,
        CreateCouponDto,
        CouponDto,
        CouponSummaryDto,
        ErrorDto
    )),
    tags(
        (name = EVENT_TAG, description = "Event creation, listing and details"),
        (name = COUPON_TAG, description = "Discount coupons attached to events")
    )
)]
pub struct ApiDoc;
