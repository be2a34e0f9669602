//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc, time::Duration};
use axum::{
    extract::{Path, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{Stream, StreamExt};
use tokio_stream::wrappers::WatchStream;
use tracing::warn;
use crate::{
    booking::{BookingHandoff, BookingRequest},
    content::{
        pricing, FaqEntry, GalleryImage, Highlight, ItineraryDay, NavItem, PricingCard,
        SiteContent, Testimonial, FAQ, GALLERY_IMAGES, HIGHLIGHTS, ITINERARY, NAV_ITEMS,
        TESTIMONIALS,
    },
    presenters::InputEvent,
    state::{AppState, GallerySnapshot, HeroSnapshot, SiteSnapshot},
};
use super::responses::{ApiError, ApiResponse, HealthResponse, StatusResponse};

type ApiResult<T> = Result<Json<T>, ApiError>;

fn respond(action: &str, site: SiteSnapshot) -> ApiResult<ApiResponse> {
    Ok(Json(ApiResponse::ok(action, site)))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handle GET /status - Carousel state plus host metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> ApiResult<StatusResponse> {
    let site = state.snapshot()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        site,
        uptime: state.get_uptime(),
        port: state.settings.port,
        host: state.settings.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /content - Every static record at once
pub async fn content_handler() -> Json<SiteContent> {
    Json(SiteContent::get())
}

pub async fn itinerary_handler() -> Json<&'static [ItineraryDay]> {
    Json(ITINERARY)
}

pub async fn gallery_handler() -> Json<&'static [GalleryImage]> {
    Json(GALLERY_IMAGES)
}

pub async fn pricing_handler() -> Json<Vec<PricingCard>> {
    Json(pricing::cards())
}

pub async fn highlights_handler() -> Json<&'static [Highlight]> {
    Json(HIGHLIGHTS)
}

pub async fn testimonials_handler() -> Json<&'static [Testimonial]> {
    Json(TESTIMONIALS)
}

pub async fn faq_handler() -> Json<&'static [FaqEntry]> {
    Json(FAQ)
}

pub async fn navigation_handler() -> Json<&'static [NavItem]> {
    Json(NAV_ITEMS)
}

/// Handle GET /hero - Current hero slide and playback state
pub async fn hero_handler(State(state): State<Arc<AppState>>) -> ApiResult<HeroSnapshot> {
    Ok(Json(state.snapshot()?.hero))
}

/// Handle GET /lightbox - Whether the overlay is open and what it shows
pub async fn lightbox_handler(State(state): State<Arc<AppState>>) -> ApiResult<GallerySnapshot> {
    Ok(Json(state.snapshot()?.lightbox))
}

/// Handle GET /events - SSE stream of site snapshots.
///
/// The current snapshot is sent on connect, then one `site` event per
/// published transition. Intermediate snapshots may be skipped.
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(state.subscribe()).filter_map(|snapshot| async move {
        match serde_json::to_string(&snapshot) {
            Ok(json) => Some(Ok(Event::default().event("site").data(json))),
            Err(e) => {
                warn!("Skipping unserializable snapshot: {}", e);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

pub async fn hero_next_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("hero-next", state.hero_next()?)
}

pub async fn hero_prev_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("hero-prev", state.hero_prev()?)
}

pub async fn hero_goto_handler(
    State(state): State<Arc<AppState>>,
    Path(index): Path<i64>,
) -> ApiResult<ApiResponse> {
    respond("hero-goto", state.hero_go_to(index)?)
}

pub async fn hero_play_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("hero-play", state.hero_set_playing(true)?)
}

pub async fn hero_pause_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("hero-pause", state.hero_set_playing(false)?)
}

/// Handle POST /hero/input - Raw keyboard, touch or pointer event
pub async fn hero_input_handler(
    State(state): State<Arc<AppState>>,
    Json(event): Json<InputEvent>,
) -> ApiResult<ApiResponse> {
    respond("hero-input", state.hero_input(event)?)
}

pub async fn lightbox_open_handler(
    State(state): State<Arc<AppState>>,
    Path(index): Path<i64>,
) -> ApiResult<ApiResponse> {
    respond("lightbox-open", state.lightbox_open(index)?)
}

pub async fn lightbox_close_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("lightbox-close", state.lightbox_close()?)
}

pub async fn lightbox_next_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("lightbox-next", state.lightbox_next()?)
}

pub async fn lightbox_prev_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("lightbox-prev", state.lightbox_prev()?)
}

pub async fn lightbox_goto_handler(
    State(state): State<Arc<AppState>>,
    Path(index): Path<i64>,
) -> ApiResult<ApiResponse> {
    respond("lightbox-goto", state.lightbox_go_to(index)?)
}

pub async fn lightbox_play_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("lightbox-play", state.lightbox_set_playing(true)?)
}

pub async fn lightbox_pause_handler(State(state): State<Arc<AppState>>) -> ApiResult<ApiResponse> {
    respond("lightbox-pause", state.lightbox_set_playing(false)?)
}

/// Handle POST /lightbox/input - Raw keyboard, touch or pointer event
pub async fn lightbox_input_handler(
    State(state): State<Arc<AppState>>,
    Json(event): Json<InputEvent>,
) -> ApiResult<ApiResponse> {
    respond("lightbox-input", state.lightbox_input(event)?)
}

/// Handle POST /booking - Build the messaging deep link
pub async fn booking_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> ApiResult<BookingHandoff> {
    Ok(Json(state.booking(&request)?))
}
