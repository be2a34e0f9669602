//! HTTP API module
//!
//! This module exposes the hosted carousels, the static content and the
//! booking handoff as JSON endpoints.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/events", get(events_handler))
        // Static content
        .route("/content", get(content_handler))
        .route("/content/itinerary", get(itinerary_handler))
        .route("/content/gallery", get(gallery_handler))
        .route("/content/highlights", get(highlights_handler))
        .route("/content/pricing", get(pricing_handler))
        .route("/content/testimonials", get(testimonials_handler))
        .route("/content/faq", get(faq_handler))
        .route("/content/navigation", get(navigation_handler))
        // Hero carousel
        .route("/hero", get(hero_handler))
        .route("/hero/next", post(hero_next_handler))
        .route("/hero/prev", post(hero_prev_handler))
        .route("/hero/goto/:index", post(hero_goto_handler))
        .route("/hero/play", post(hero_play_handler))
        .route("/hero/pause", post(hero_pause_handler))
        .route("/hero/input", post(hero_input_handler))
        // Gallery lightbox
        .route("/lightbox", get(lightbox_handler))
        .route("/lightbox/open/:index", post(lightbox_open_handler))
        .route("/lightbox/close", post(lightbox_close_handler))
        .route("/lightbox/next", post(lightbox_next_handler))
        .route("/lightbox/prev", post(lightbox_prev_handler))
        .route("/lightbox/goto/:index", post(lightbox_goto_handler))
        .route("/lightbox/play", post(lightbox_play_handler))
        .route("/lightbox/pause", post(lightbox_pause_handler))
        .route("/lightbox/input", post(lightbox_input_handler))
        // Booking handoff
        .route("/booking", post(booking_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
