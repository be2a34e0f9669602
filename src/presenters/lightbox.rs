//! Gallery lightbox overlay

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use super::{
    apply_command, CarouselSnapshot, Command, InputAdapter, InputEvent, PresenterError,
};
use crate::{
    carousel::{CyclicSlideController, Scheduler, SlideSource, TimerId},
    content::{GalleryImage, GALLERY_IMAGES},
};

/// Default slideshow period when the visitor presses play inside the lightbox
pub const LIGHTBOX_INTERVAL: Duration = Duration::from_millis(3000);

/// What the lightbox overlay shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightboxSnapshot<T> {
    pub open: bool,
    pub count: usize,
    /// "3 of 13" style position label
    pub position: Option<String>,
    pub current: Option<CarouselSnapshot<T>>,
}

/// Overlay over the gallery. Owns a controller only while open.
#[derive(Debug)]
pub struct LightboxPresenter<S: Scheduler + Clone, D: SlideSource = &'static [GalleryImage]> {
    slides: D,
    interval: Duration,
    scheduler: S,
    controller: Option<CyclicSlideController<S>>,
    input: InputAdapter,
}

impl<S: Scheduler + Clone> LightboxPresenter<S> {
    pub fn with_site_images(interval: Duration, scheduler: S) -> Self {
        Self::new(GALLERY_IMAGES, interval, scheduler)
    }
}

impl<S: Scheduler + Clone, D: SlideSource> LightboxPresenter<S, D> {
    /// Create a closed lightbox. Each `open` gets its own clone of `scheduler`.
    pub fn new(slides: D, interval: Duration, scheduler: S) -> Self {
        Self {
            slides,
            interval,
            scheduler,
            controller: None,
            input: InputAdapter::new(),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.count()
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller(&self) -> Option<&CyclicSlideController<S>> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut CyclicSlideController<S>> {
        self.controller.as_mut()
    }

    /// Open on the image at `index`. Opening while open just moves there.
    pub fn open(&mut self, index: usize) -> Result<(), PresenterError> {
        if let Some(controller) = self.controller.as_mut() {
            controller.go_to(index)?;
            return Ok(());
        }

        let mut controller = CyclicSlideController::create(
            self.slides.count(),
            self.interval,
            false,
            self.scheduler.clone(),
        )?;
        controller.go_to(index)?;

        self.input.reset();
        self.controller = Some(controller);
        info!("Lightbox opened at {}", index);
        Ok(())
    }

    /// Close and release the controller. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        match self.controller.take() {
            Some(mut controller) => {
                controller.destroy();
                self.input.reset();
                info!("Lightbox closed");
                true
            }
            None => false,
        }
    }

    pub fn current_slide(&self) -> Option<&D::Slide> {
        let controller = self.controller.as_ref()?;
        self.slides.slide(controller.current_index())
    }

    /// Translate and apply one input event. Escape closes.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<Command>, PresenterError> {
        if !self.is_open() {
            return Err(PresenterError::LightboxClosed);
        }
        let command = self.input.translate(event);
        if let Some(command) = command {
            self.apply(command)?;
        }
        Ok(command)
    }

    pub fn apply(&mut self, command: Command) -> Result<(), PresenterError> {
        if command == Command::Close {
            self.close();
            return Ok(());
        }
        apply_command(self.open_controller()?, command)?;
        Ok(())
    }

    /// Slideshow play/pause inside the overlay
    pub fn set_playing(&mut self, playing: bool) -> Result<(), PresenterError> {
        self.open_controller()?.set_playing(playing)?;
        Ok(())
    }

    /// Deliver a timer firing. Ticks that arrive after close are dropped.
    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        match self.controller.as_mut() {
            Some(controller) => controller.on_timer(timer),
            None => {
                debug!("Lightbox closed, dropping {}", timer);
                false
            }
        }
    }

    pub fn snapshot(&self) -> LightboxSnapshot<D::Slide>
    where
        D::Slide: Clone,
    {
        let count = self.slides.count();
        let current = self.controller.as_ref().and_then(|controller| {
            let slide = self.slides.slide(controller.current_index())?.clone();
            Some(CarouselSnapshot::capture(controller, slide))
        });

        LightboxSnapshot {
            open: self.is_open(),
            count,
            position: current
                .as_ref()
                .map(|c| format!("{} of {}", c.index + 1, count)),
            current,
        }
    }

    fn open_controller(&mut self) -> Result<&mut CyclicSlideController<S>, PresenterError> {
        self.controller.as_mut().ok_or(PresenterError::LightboxClosed)
    }
}
