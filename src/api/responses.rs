//! API response structures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};

use crate::{
    carousel::CarouselError,
    presenters::PresenterError,
    state::{SiteSnapshot, StateError},
};

/// API response structure for carousel endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub site: SiteSnapshot,
}

impl ApiResponse {
    /// Create an ok response carrying the resulting site state
    pub fn ok(action: &str, site: SiteSnapshot) -> Self {
        Self {
            status: "ok".to_string(),
            action: action.to_string(),
            timestamp: Utc::now(),
            site,
        }
    }
}

/// Status response with host metadata
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub site: SiteSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Body of every error reply
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A state error on its way out as an HTTP reply
#[derive(Debug)]
pub struct ApiError(pub StateError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            StateError::Presenter(PresenterError::Carousel(CarouselError::OutOfRange { .. })) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            StateError::Presenter(PresenterError::Carousel(CarouselError::InvalidArgument(_))) => {
                StatusCode::BAD_REQUEST
            }
            StateError::Presenter(PresenterError::LightboxClosed) => StatusCode::CONFLICT,
            StateError::Booking(_) => StatusCode::BAD_REQUEST,
            StateError::LockPoisoned(_) | StateError::MissingSlide => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StateError> for ApiError {
    fn from(err: StateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        let body = ErrorResponse {
            status: "error".to_string(),
            message: self.0.to_string(),
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}
