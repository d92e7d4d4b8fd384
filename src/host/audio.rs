//! Default-sink mute control.
//!
//! Unix goes through PulseAudio's `pactl`, which also fronts PipeWire. There
//! is no stock Windows CLI for endpoint mute, so that build reports the
//! capability as unsupported and the responder apologizes.

#[cfg(not(windows))]
use std::process::Command;

use super::HostError;

#[cfg(not(windows))]
pub(super) fn set_mute(mute: bool) -> Result<(), HostError> {
    let flag = if mute { "1" } else { "0" };
    let status = Command::new("pactl")
        .args(["set-sink-mute", "@DEFAULT_SINK@", flag])
        .status()
        .map_err(HostError::Io)?;
    if status.success() {
        tracing::info!("Audio {}", if mute { "muted" } else { "unmuted" });
        Ok(())
    } else {
        Err(HostError::Command(format!("pactl exited with {status}")))
    }
}

#[cfg(windows)]
pub(super) fn set_mute(_mute: bool) -> Result<(), HostError> {
    Err(HostError::Unsupported("audio endpoint control"))
}
