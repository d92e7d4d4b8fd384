//! Speech Bubble
//!
//! Typewriter reveal of a message, one character per interval, then auto-hide
//! after a fixed delay. Re-showing while a reveal or hide countdown is pending
//! replaces both deadlines — there is never more than one of each in flight.

use std::time::{Duration, Instant};

use crate::timing::{BUBBLE_HIDE_DELAY, CHAR_REVEAL_INTERVAL};

/// The bubble's reveal/hide state. All deadlines are computed against the
/// `Instant` passed in by the caller.
#[derive(Debug)]
pub struct Bubble {
    full_text: String,
    /// Chars of `full_text` currently revealed. Monotonic per message, never
    /// exceeds the message's char count.
    revealed: usize,
    char_total: usize,
    visible: bool,
    interval: Duration,
    next_reveal_at: Option<Instant>,
    hide_at: Option<Instant>,
}

impl Bubble {
    pub fn new() -> Self {
        Self {
            full_text: String::new(),
            revealed: 0,
            char_total: 0,
            visible: false,
            interval: CHAR_REVEAL_INTERVAL,
            next_reveal_at: None,
            hide_at: None,
        }
    }

    /// Start revealing `message` at the default cadence.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.show_with_interval(message, CHAR_REVEAL_INTERVAL, now);
    }

    /// Start revealing `message`, one character every `interval`. Cancels any
    /// in-progress reveal and any pending hide.
    pub fn show_with_interval(
        &mut self,
        message: impl Into<String>,
        interval: Duration,
        now: Instant,
    ) {
        self.full_text = message.into();
        self.char_total = self.full_text.chars().count();
        self.revealed = 0;
        self.visible = true;
        self.interval = interval;
        if self.char_total == 0 {
            self.next_reveal_at = None;
            self.hide_at = Some(now + BUBBLE_HIDE_DELAY);
        } else {
            self.next_reveal_at = Some(now + interval);
            self.hide_at = None;
        }
    }

    /// Advance reveal and hide deadlines. Returns true when the rendered text
    /// or visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        // Reveal every character whose deadline has passed. A late tick
        // catches up one interval at a time so the reveal stays monotonic.
        while let Some(due) = self.next_reveal_at {
            if now < due {
                break;
            }
            self.revealed += 1;
            changed = true;
            if self.revealed >= self.char_total {
                // Fully revealed: the hide countdown starts from the final
                // reveal deadline, not from this (possibly late) tick.
                self.next_reveal_at = None;
                self.hide_at = Some(due + BUBBLE_HIDE_DELAY);
            } else {
                self.next_reveal_at = Some(due + self.interval);
            }
        }

        if let Some(hide) = self.hide_at
            && now >= hide
        {
            self.visible = false;
            self.hide_at = None;
            changed = true;
        }

        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The currently revealed prefix of the message.
    pub fn visible_text(&self) -> &str {
        let end = self
            .full_text
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.full_text.len());
        &self.full_text[..end]
    }

    #[cfg(test)]
    pub(crate) fn revealed_chars(&self) -> usize {
        self.revealed
    }
}

impl Default for Bubble {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(30);

    #[test]
    fn test_two_char_message_reveals_in_two_ticks() {
        let t0 = Instant::now();
        let mut bubble = Bubble::new();

        bubble.show("Hi", t0);
        assert!(bubble.is_visible());
        assert_eq!(bubble.visible_text(), "");

        assert!(bubble.tick(t0 + STEP));
        assert_eq!(bubble.visible_text(), "H");

        assert!(bubble.tick(t0 + 2 * STEP));
        assert_eq!(bubble.visible_text(), "Hi");

        // Hide-eligible only once the full 6s delay elapses after completion.
        assert!(!bubble.tick(t0 + 2 * STEP + Duration::from_millis(5999)));
        assert!(bubble.is_visible());
        assert!(bubble.tick(t0 + 2 * STEP + Duration::from_millis(6000)));
        assert!(!bubble.is_visible());
    }

    #[test]
    fn test_reveal_is_monotonic_and_bounded() {
        let t0 = Instant::now();
        let mut bubble = Bubble::new();
        bubble.show("abc", t0);

        // A very late tick catches up, but never past the end of the text.
        bubble.tick(t0 + Duration::from_secs(1));
        assert_eq!(bubble.revealed_chars(), 3);
        assert_eq!(bubble.visible_text(), "abc");
    }

    #[test]
    fn test_reshow_cancels_pending_reveal_and_hide() {
        let t0 = Instant::now();
        let mut bubble = Bubble::new();
        bubble.show("first message", t0);
        bubble.tick(t0 + 5 * STEP);

        // New message mid-reveal: starts from zero again.
        let t1 = t0 + 6 * STEP;
        bubble.show("second", t1);
        assert_eq!(bubble.visible_text(), "");

        // The old reveal deadlines are gone; the new cadence applies.
        bubble.tick(t1 + STEP);
        assert_eq!(bubble.visible_text(), "s");

        // Fully reveal, then re-show before the hide fires: the old hide
        // deadline is gone, so the bubble is still visible past it.
        bubble.tick(t1 + 6 * STEP);
        assert_eq!(bubble.visible_text(), "second");
        let t2 = t1 + 7 * STEP;
        bubble.show("third", t2);
        bubble.tick(t1 + 6 * STEP + BUBBLE_HIDE_DELAY - STEP);
        assert!(bubble.is_visible());
        assert_eq!(bubble.visible_text(), "third");
    }

    #[test]
    fn test_empty_message_schedules_hide_immediately() {
        let t0 = Instant::now();
        let mut bubble = Bubble::new();
        bubble.show("", t0);
        assert!(bubble.is_visible());
        assert_eq!(bubble.visible_text(), "");

        assert!(bubble.tick(t0 + BUBBLE_HIDE_DELAY));
        assert!(!bubble.is_visible());
    }

    #[test]
    fn test_multibyte_text_reveals_on_char_boundaries() {
        let t0 = Instant::now();
        let mut bubble = Bubble::new();
        bubble.show("héllo", t0);

        bubble.tick(t0 + 2 * STEP);
        assert_eq!(bubble.visible_text(), "hé");
        bubble.tick(t0 + 5 * STEP);
        assert_eq!(bubble.visible_text(), "héllo");
    }
}
