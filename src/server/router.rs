use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::server::{
    controller::{
        coupon::add_coupon_to_event,
        event::{create_event, get_event_details, get_events, get_filtered_events, search_events},
    },
    openapi::ApiDoc,
    state::AppState,
};

/// Largest accepted request body, sized for event images.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/event", get(get_events).post(create_event))
        .route("/api/event/filter", get(get_filtered_events))
        .route("/api/event/search", get(search_events))
        .route("/api/event/{event_id}", get(get_event_details))
        .route("/api/coupon/event/{event_id}", post(add_coupon_to_event))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}

/// Builds the complete application with state and middleware layers.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
