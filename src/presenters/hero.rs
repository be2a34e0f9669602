//! Hero section carousel

use std::time::Duration;
use tracing::{debug, info};

use super::{
    apply_command, CarouselSnapshot, Command, InputAdapter, InputEvent, PresenterError,
};
use crate::{
    carousel::{CyclicSlideController, Scheduler, SlideSource, TimerId},
    content::{HeroImage, HERO_IMAGES},
};

/// Default auto-advance period of the hero background
pub const HERO_INTERVAL: Duration = Duration::from_millis(4000);

/// Full-bleed auto-playing carousel with selector dots
#[derive(Debug)]
pub struct HeroPresenter<S: Scheduler, D: SlideSource = &'static [HeroImage]> {
    controller: CyclicSlideController<S>,
    slides: D,
    input: InputAdapter,
}

impl<S: Scheduler> HeroPresenter<S> {
    /// Mount over the site's hero images
    pub fn with_site_images(interval: Duration, scheduler: S) -> Result<Self, PresenterError> {
        Self::mount(HERO_IMAGES, interval, scheduler)
    }
}

impl<S: Scheduler, D: SlideSource> HeroPresenter<S, D> {
    /// Mount with auto-play on
    pub fn mount(slides: D, interval: Duration, scheduler: S) -> Result<Self, PresenterError> {
        let controller = CyclicSlideController::create(slides.count(), interval, true, scheduler)?;
        info!("Hero mounted with {} slides, advancing every {:?}", slides.count(), interval);

        Ok(Self {
            controller,
            slides,
            input: InputAdapter::new(),
        })
    }

    pub fn controller(&self) -> &CyclicSlideController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CyclicSlideController<S> {
        &mut self.controller
    }

    pub fn current_slide(&self) -> Option<&D::Slide> {
        self.slides.slide(self.controller.current_index())
    }

    /// Translate and apply one input event. Escape has no meaning here.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<Command>, PresenterError> {
        let command = self.input.translate(event);
        if let Some(command) = command {
            self.apply(command)?;
        }
        Ok(command)
    }

    pub fn apply(&mut self, command: Command) -> Result<(), PresenterError> {
        if command == Command::Close {
            debug!("Hero ignores close");
            return Ok(());
        }
        apply_command(&mut self.controller, command)?;
        Ok(())
    }

    pub fn set_playing(&mut self, playing: bool) -> Result<(), PresenterError> {
        self.controller.set_playing(playing)?;
        Ok(())
    }

    /// The play/pause button
    pub fn toggle_playing(&mut self) -> Result<bool, PresenterError> {
        let playing = !self.controller.is_playing();
        self.set_playing(playing)?;
        Ok(playing)
    }

    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        self.controller.on_timer(timer)
    }

    /// Release the timer; the presenter is gone after this
    pub fn unmount(&mut self) {
        self.controller.destroy();
        info!("Hero unmounted");
    }

    pub fn snapshot(&self) -> Option<CarouselSnapshot<D::Slide>>
    where
        D::Slide: Clone,
    {
        let slide = self.current_slide()?.clone();
        Some(CarouselSnapshot::capture(&self.controller, slide))
    }
}
