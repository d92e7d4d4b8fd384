//! App and disk-cleanup launching.

use std::process::{Command, Stdio};

use crate::config::{AppEntry, LauncherTable};

use super::HostError;

/// Result of an "open <name>" request.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// Spawned successfully; carries the name for the confirmation message.
    Launched(String),
    /// The name is not in the launcher table.
    Unknown,
    /// The table knew the name but the spawn failed.
    Failed(HostError),
}

/// Look the name up in the launcher table and spawn it detached.
pub(super) fn launch(table: &LauncherTable, name: &str) -> LaunchOutcome {
    let Some(entry) = table.resolve(name) else {
        return LaunchOutcome::Unknown;
    };
    match spawn_detached(entry) {
        Ok(()) => {
            tracing::info!("Launched {} via {}", entry.name, entry.command);
            LaunchOutcome::Launched(entry.name.clone())
        }
        Err(e) => {
            tracing::warn!("Failed to launch {}: {e}", entry.name);
            LaunchOutcome::Failed(e)
        }
    }
}

fn spawn_detached(entry: &AppEntry) -> Result<(), HostError> {
    Command::new(&entry.command)
        .args(&entry.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(HostError::Io)
}

/// Launch the platform disk-cleanup utility.
#[cfg(windows)]
pub(super) fn launch_cleanup() -> Result<(), HostError> {
    Command::new("cleanmgr")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(HostError::Io)
}

/// Launch the platform disk-cleanup utility.
#[cfg(not(windows))]
pub(super) fn launch_cleanup() -> Result<(), HostError> {
    let bin = which::which("bleachbit").map_err(|_| HostError::Unsupported("disk cleanup"))?;
    Command::new(bin)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(HostError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherTable;

    #[test]
    fn test_unknown_app() {
        let table = LauncherTable::from_entries(vec![]);
        assert!(matches!(launch(&table, "chrome"), LaunchOutcome::Unknown));
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        let table = LauncherTable::from_entries(vec![AppEntry {
            name: "ghost".into(),
            command: "/nonexistent/binary/for/deskpet/tests".into(),
            args: vec![],
        }]);
        assert!(matches!(launch(&table, "ghost"), LaunchOutcome::Failed(_)));
    }

    #[test]
    fn test_known_app_spawns() {
        // `true` exists on any unix test box; skip the assertion elsewhere.
        #[cfg(unix)]
        {
            let table = LauncherTable::from_entries(vec![AppEntry {
                name: "noop".into(),
                command: "true".into(),
                args: vec![],
            }]);
            assert!(matches!(
                launch(&table, "noop"),
                LaunchOutcome::Launched(_)
            ));
        }
    }
}
