//! App launcher table and home-directory paths.
//!
//! Reads `~/.deskpet/apps.toml` at runtime — no recompile needed. Users can
//! add/edit entries freely. Falls back to compiled-in defaults if the file is
//! missing or unparseable.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::PathBuf;

// ── TOML schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
struct AppsFile {
    #[serde(default)]
    apps: Vec<AppEntry>,
}

/// One launchable application: the name the user types after "open ", and the
/// command to spawn for it.
#[derive(Debug, Deserialize, Clone)]
pub struct AppEntry {
    /// Name matched against the text after "open " (case-insensitive)
    pub name: String,
    /// Program to spawn — a bare name resolved on PATH or an absolute path
    pub command: String,
    /// Extra arguments, usually empty
    #[serde(default)]
    pub args: Vec<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub struct LauncherTable {
    entries: Vec<AppEntry>,
}

impl LauncherTable {
    /// Look up an app by the name the user typed. First match wins.
    pub fn resolve(&self, name: &str) -> Option<&AppEntry> {
        let n = name.to_lowercase();
        self.entries.iter().find(|e| e.name.to_lowercase() == n)
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<AppEntry>) -> Self {
        Self { entries }
    }
}

// ── Global instance ───────────────────────────────────────────────────────────

static LAUNCHER: OnceCell<LauncherTable> = OnceCell::new();

/// Returns the global launcher table, loading from disk on first call.
pub fn launcher() -> &'static LauncherTable {
    LAUNCHER.get_or_init(load_launcher)
}

/// Path to the deskpet home directory: `~/.deskpet/`
pub fn deskpet_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".deskpet")
}

fn apps_file_path() -> PathBuf {
    deskpet_home().join("apps.toml")
}

fn load_launcher() -> LauncherTable {
    let path = apps_file_path();
    let parsed = if path.exists() {
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| toml::from_str::<AppsFile>(&s).ok())
    } else {
        None
    };

    let mut entries = parsed.unwrap_or_default().apps;
    if entries.is_empty() {
        entries = default_entries();
    } else {
        tracing::info!("Loaded {} launcher entries from {}", entries.len(), path.display());
    }

    LauncherTable { entries }
}

#[cfg(windows)]
fn default_entries() -> Vec<AppEntry> {
    vec![
        AppEntry {
            name: "chrome".into(),
            command: r"C:/Program Files (x86)/Google/Chrome/Application/chrome.exe".into(),
            args: vec![],
        },
        AppEntry {
            name: "edge".into(),
            command: r"C:/Program Files/Internet Explorer/iexplore.exe".into(),
            args: vec![],
        },
    ]
}

#[cfg(not(windows))]
fn default_entries() -> Vec<AppEntry> {
    vec![
        AppEntry {
            name: "chrome".into(),
            command: "google-chrome".into(),
            args: vec![],
        },
        AppEntry {
            name: "edge".into(),
            command: "microsoft-edge".into(),
            args: vec![],
        },
    ]
}
