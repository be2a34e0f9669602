//! Presenters binding slide controllers to content
//!
//! A presenter owns one controller and one slide source, forwards translated
//! input to the controller and describes what should be on screen.

pub mod hero;
pub mod input;
pub mod lightbox;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::carousel::{CarouselError, CyclicSlideController, Scheduler};

pub use hero::HeroPresenter;
pub use input::{Command, InputAdapter, InputEvent, Key, SWIPE_THRESHOLD_PX};
pub use lightbox::LightboxPresenter;

/// Identifies which carousel a timer tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselKey {
    Hero,
    Lightbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenterError {
    #[error(transparent)]
    Carousel(#[from] CarouselError),

    #[error("the lightbox is closed")]
    LightboxClosed,
}

/// What a carousel currently shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSnapshot<T> {
    pub index: usize,
    pub count: usize,
    pub playing: bool,
    pub suspended: bool,
    pub slide: T,
}

impl<T> CarouselSnapshot<T> {
    fn capture<S: Scheduler>(controller: &CyclicSlideController<S>, slide: T) -> Self {
        Self {
            index: controller.current_index(),
            count: controller.count(),
            playing: controller.is_playing(),
            suspended: controller.is_suspended(),
            slide,
        }
    }
}

/// Apply a navigation command. `Close` is the presenter's business and is
/// ignored here.
fn apply_command<S: Scheduler>(
    controller: &mut CyclicSlideController<S>,
    command: Command,
) -> Result<(), CarouselError> {
    match command {
        Command::Next => {
            controller.next();
        }
        Command::Prev => {
            controller.prev();
        }
        Command::GoTo(index) => {
            controller.go_to(index)?;
        }
        Command::Suspend => controller.suspend(),
        Command::Resume => controller.resume(),
        Command::Close => {}
    }
    Ok(())
}
