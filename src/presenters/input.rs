//! Keyboard, touch and pointer input translation

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Minimum horizontal travel, in logical pixels, for a touch gesture to count
/// as a swipe
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Keys the carousels react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    #[serde(other)]
    Other,
}

/// Raw input as reported by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Key { key: Key },
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    PointerEnter,
    PointerLeave,
    SelectDot { index: usize },
}

/// What a presenter should do in response to input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "index", rename_all = "snake_case")]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
    Suspend,
    Resume,
    Close,
}

/// Turns input events into commands. Holds the in-progress touch gesture.
#[derive(Debug, Default, Clone)]
pub struct InputAdapter {
    touch_start: Option<f32>,
    touch_end: Option<f32>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: InputEvent) -> Option<Command> {
        let command = match event {
            InputEvent::Key { key } => match key {
                Key::Escape => Some(Command::Close),
                Key::ArrowLeft => Some(Command::Prev),
                Key::ArrowRight => Some(Command::Next),
                Key::Other => None,
            },
            InputEvent::TouchStart { x } => {
                self.touch_start = Some(x);
                self.touch_end = None;
                None
            }
            InputEvent::TouchMove { x } => {
                self.touch_end = Some(x);
                None
            }
            InputEvent::TouchEnd => self.finish_swipe(),
            InputEvent::PointerEnter => Some(Command::Suspend),
            InputEvent::PointerLeave => Some(Command::Resume),
            InputEvent::SelectDot { index } => Some(Command::GoTo(index)),
        };

        trace!("Input {:?} -> {:?}", event, command);
        command
    }

    /// Forget any gesture in progress
    pub fn reset(&mut self) {
        self.touch_start = None;
        self.touch_end = None;
    }

    fn finish_swipe(&mut self) -> Option<Command> {
        let (start, end) = (self.touch_start.take()?, self.touch_end.take()?);
        let travel = end - start;

        if travel <= -SWIPE_THRESHOLD_PX {
            Some(Command::Prev)
        } else if travel >= SWIPE_THRESHOLD_PX {
            Some(Command::Next)
        } else {
            None
        }
    }
}
