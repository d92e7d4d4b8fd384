//! Fixed timer constants.
//!
//! Every interval in the app lives here so the timing model is auditable in
//! one place. None of these are user-configurable.

use std::time::Duration;

/// How often the avatar blinks on its own.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(5000);

/// How long the blink sprite stays up before reverting to idle.
pub const BLINK_DURATION: Duration = Duration::from_millis(300);

/// How long the talking sprite stays up before reverting to idle.
pub const TALK_DURATION: Duration = Duration::from_millis(700);

/// Default delay between revealed characters in the speech bubble.
pub const CHAR_REVEAL_INTERVAL: Duration = Duration::from_millis(30);

/// How long a fully revealed bubble stays visible before hiding.
pub const BUBBLE_HIDE_DELAY: Duration = Duration::from_millis(6000);

/// Interval between unprompted status summaries.
pub const SUMMARY_INTERVAL: Duration = Duration::from_millis(3_600_000);

/// Grace period between the goodbye message and process exit, so the
/// message is actually readable.
pub const QUIT_DELAY: Duration = Duration::from_millis(2000);

/// Sampling window for CPU usage. This blocks the event loop for its full
/// duration while a health/summary query runs — a deliberate tradeoff.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(500);

/// Render/update cadence of the TUI event loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(30);
