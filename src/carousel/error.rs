//! Carousel error taxonomy

use thiserror::Error;

/// Contract violations reported synchronously by a slide controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// Construction or playback request that can never be honoured
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Direct navigation to an index outside `[0, count)`
    #[error("slide index {index} is out of range for {count} slides")]
    OutOfRange { index: i64, count: usize },
}

impl CarouselError {
    /// Build an `OutOfRange` error from a signed index
    pub fn out_of_range(index: i64, count: usize) -> Self {
        Self::OutOfRange { index, count }
    }
}
