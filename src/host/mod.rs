//! Host Layer
//!
//! Everything the assistant asks of the operating system goes through the
//! [`Host`] trait: battery, CPU/memory, Wi-Fi, clipboard, app launching, disk
//! cleanup, audio mute, and the recent-documents listing. The responder only
//! ever sees typed results — failures are surfaced as [`HostError`] and turned
//! into apology strings at the rule handlers, never propagated further.

mod apps;
mod audio;
mod clipboard;
mod files;
mod system;
mod wifi;

pub use apps::LaunchOutcome;
pub use files::{RecentEntry, RecentFiles};
pub use wifi::WifiStatus;

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single OS capability. Attempted once, never retried.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("command failed: {0}")]
    Command(String),
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
    #[error("{0}")]
    Other(String),
}

/// Battery charge snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    /// Charge percentage, 0–100
    pub percent: f32,
    /// True when on external power
    pub charging: bool,
}

/// CPU/memory snapshot. CPU is sampled over a deliberate 0.5 s window, which
/// blocks the event loop for that long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSnapshot {
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

/// The OS collaborators the responder depends on, behind one seam so tests
/// can substitute a canned fake.
pub trait Host {
    /// Battery status, or None when the machine has no battery sensor.
    fn battery(&mut self) -> Option<BatteryStatus>;

    /// CPU and memory usage. Blocks for the CPU sampling window.
    fn cpu_memory(&mut self) -> ResourceSnapshot;

    /// Wireless status parsed from the platform's network-interface command.
    fn wifi(&mut self) -> Result<WifiStatus, HostError>;

    /// Clipboard text, or Ok(None) when the clipboard is empty or non-text.
    fn read_clipboard(&mut self) -> Result<Option<String>, HostError>;

    /// Launch an app by the name the user typed after "open ".
    fn launch_app(&mut self, name: &str) -> LaunchOutcome;

    /// Launch the platform disk-cleanup utility.
    fn launch_cleanup(&mut self) -> Result<(), HostError>;

    /// Mute (true) or unmute (false) the default audio output.
    fn set_mute(&mut self, mute: bool) -> Result<(), HostError>;

    /// The newest files under the user's documents directory.
    fn recent_documents(&mut self, limit: usize) -> RecentFiles;
}

/// Production [`Host`] backed by sysinfo, starship-battery, arboard, walkdir,
/// and platform commands.
pub struct DesktopHost {
    telemetry: system::Telemetry,
}

impl DesktopHost {
    pub fn new() -> Self {
        Self {
            telemetry: system::Telemetry::new(),
        }
    }

    fn documents_dir() -> PathBuf {
        dirs::document_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Documents")
        })
    }
}

impl Default for DesktopHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for DesktopHost {
    fn battery(&mut self) -> Option<BatteryStatus> {
        system::battery()
    }

    fn cpu_memory(&mut self) -> ResourceSnapshot {
        self.telemetry.cpu_memory()
    }

    fn wifi(&mut self) -> Result<WifiStatus, HostError> {
        wifi::query()
    }

    fn read_clipboard(&mut self) -> Result<Option<String>, HostError> {
        clipboard::read_text()
    }

    fn launch_app(&mut self, name: &str) -> LaunchOutcome {
        apps::launch(crate::config::launcher(), name)
    }

    fn launch_cleanup(&mut self) -> Result<(), HostError> {
        apps::launch_cleanup()
    }

    fn set_mute(&mut self, mute: bool) -> Result<(), HostError> {
        audio::set_mute(mute)
    }

    fn recent_documents(&mut self, limit: usize) -> RecentFiles {
        files::recent_in(&Self::documents_dir(), limit)
    }
}
