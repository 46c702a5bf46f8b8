use axum::{
    extract::{Multipart, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDetailsDto, EventDto, EventSummaryDto},
    },
    server::{
        data::Repositories,
        error::AppError,
        model::event::CreateEventParams,
        service::event::EventService,
        state::AppState,
        util::{
            multipart::read_event_form,
            parse::{end_of_day, parse_query_date, start_of_day},
        },
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, at most 100)
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    10
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, at most 100)
    #[serde(default = "default_size")]
    pub size: u64,
    /// Substring of the address city
    pub city: Option<String>,
    /// Substring of the address state code
    pub uf: Option<String>,
    /// First day of the range, `YYYY-MM-DD` (default: Unix epoch)
    pub start_date: Option<String>,
    /// Last day of the range, inclusive, `YYYY-MM-DD` (default: now)
    pub end_date: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring of the event title; all events when omitted
    pub title: Option<String>,
}

fn event_service<'a>(repos: &'a Repositories<'a>, state: &'a AppState) -> EventService<'a> {
    EventService::new(
        &repos.events,
        &repos.addresses,
        &repos.coupons,
        state.storage.as_ref(),
    )
}

/// Create a new event.
///
/// Reads a multipart form with the event fields and an optional `image` file. The image
/// is uploaded to object storage; if the upload fails the event is still created without
/// an image. Non-remote events also get an address from `city` and `state`.
///
/// # Returns
/// - `200 OK` - The created event
/// - `400 Bad Request` - Missing or malformed form field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/event",
    tag = EVENT_TAG,
    request_body(content = CreateEventDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (dto, image) = read_event_form(multipart).await?;
    let params = CreateEventParams::from_dto(dto, image)?;

    let repos = Repositories::new(&state.db);
    let event = event_service(&repos, &state).create_event(params).await?;

    Ok(Json(event.into_dto()))
}

/// Get a page of upcoming events.
///
/// Returns events dated from now on, ordered by date, with their city and state.
///
/// # Returns
/// - `200 OK` - Page of upcoming events
/// - `400 Bad Request` - Page out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/event",
    tag = EVENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved upcoming events", body = Vec<EventSummaryDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let repos = Repositories::new(&state.db);
    let events = event_service(&repos, &state)
        .get_upcoming_events(params.page, params.size)
        .await?;

    let dtos: Vec<EventSummaryDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a page of events filtered by location and date range.
///
/// Empty `city` and `uf` values disable that filter. `startDate` covers its whole day
/// from midnight and `endDate` covers its whole day until the last millisecond.
///
/// # Returns
/// - `200 OK` - Page of matching events
/// - `400 Bad Request` - Malformed date or page out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/event/filter",
    tag = EVENT_TAG,
    params(FilterParams),
    responses(
        (status = 200, description = "Successfully retrieved filtered events", body = Vec<EventSummaryDto>),
        (status = 400, description = "Invalid date or page out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_filtered_events(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let start = parse_query_date("startDate", params.start_date.as_deref())?.map(start_of_day);
    let end = parse_query_date("endDate", params.end_date.as_deref())?.map(end_of_day);

    let repos = Repositories::new(&state.db);
    let events = event_service(&repos, &state)
        .get_filtered_events(params.page, params.size, params.city, params.uf, start, end)
        .await?;

    let dtos: Vec<EventSummaryDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok(Json(dtos))
}

/// Search events by title.
///
/// # Returns
/// - `200 OK` - All events whose title contains `title`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/event/search",
    tag = EVENT_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Successfully searched events", body = Vec<EventSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let repos = Repositories::new(&state.db);
    let events = event_service(&repos, &state)
        .search_events(params.title.as_deref())
        .await?;

    let dtos: Vec<EventSummaryDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get an event with its location and currently valid coupons.
///
/// # Returns
/// - `200 OK` - Event details
/// - `404 Not Found` - Unknown event id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/event/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event details", body = EventDetailsDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_details(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let repos = Repositories::new(&state.db);
    let details = event_service(&repos, &state)
        .get_event_details(event_id)
        .await?;

    Ok(Json(details.into_dto()))
}
