use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        coupon::{CouponDto, CreateCouponDto},
    },
    server::{
        data::Repositories, error::AppError, model::coupon::CreateCouponParams,
        service::coupon::CouponService, state::AppState,
    },
};

/// Tag for grouping coupon endpoints in OpenAPI documentation
pub static COUPON_TAG: &str = "coupon";

/// Attach a coupon to an event.
///
/// The discount is not range-checked and an expiry in the past is accepted.
///
/// # Returns
/// - `200 OK` - The created coupon
/// - `400 Bad Request` - `valid` is not a representable timestamp
/// - `404 Not Found` - Unknown event id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/coupon/event/{event_id}",
    tag = COUPON_TAG,
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateCouponDto,
    responses(
        (status = 200, description = "Successfully created coupon", body = CouponDto),
        (status = 400, description = "Invalid coupon data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_coupon_to_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<CreateCouponDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCouponParams::from_dto(payload)?;

    let repos = Repositories::new(&state.db);
    let coupon = CouponService::new(&repos.events, &repos.coupons)
        .add_coupon_to_event(event_id, params)
        .await?;

    Ok(Json(coupon.into_dto()))
}
