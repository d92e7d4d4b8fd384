//! Avatar Animation
//!
//! Three-sprite state machine (idle/blink/talk) driven by deadlines against a
//! monotonic clock. There is no queue: a blink landing mid-talk overwrites the
//! talking sprite and the revert deadline — last writer wins.

use std::time::Instant;

use crate::timing::{BLINK_DURATION, TALK_DURATION};

/// Which of the three sprite frames the avatar currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteState {
    Idle,
    Blinking,
    Talking,
}

/// Deadline-driven sprite state machine.
///
/// Callers pass the current `Instant` into every method; nothing here reads
/// the wall clock, which keeps the timing contract testable.
#[derive(Debug)]
pub struct AnimationController {
    current: SpriteState,
    revert_at: Option<Instant>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            current: SpriteState::Idle,
            revert_at: None,
        }
    }

    /// The sprite to render right now.
    pub fn current(&self) -> SpriteState {
        self.current
    }

    /// Show the blink sprite, reverting to idle after the blink duration.
    pub fn blink_once(&mut self, now: Instant) {
        self.current = SpriteState::Blinking;
        self.revert_at = Some(now + BLINK_DURATION);
        tracing::trace!("sprite -> blinking");
    }

    /// Show the talking sprite, reverting to idle after the talk duration.
    pub fn talk(&mut self, now: Instant) {
        self.current = SpriteState::Talking;
        self.revert_at = Some(now + TALK_DURATION);
        tracing::trace!("sprite -> talking");
    }

    /// Advance the state machine. Returns true when the sprite changed and a
    /// repaint is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if now >= deadline => {
                self.current = SpriteState::Idle;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}
