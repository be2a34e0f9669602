//! State management module
//!
//! This module holds the presenters the preview host serves and the shared
//! state wrapped around them.

pub mod app_state;
pub mod snapshot;

// Re-export main types
pub use app_state::{AppState, HostSettings, StateError};
pub use snapshot::{GallerySnapshot, HeroSnapshot, SiteSnapshot};
