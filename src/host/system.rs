//! CPU, memory, and battery probes.
//!
//! CPU usage needs two refreshes with a gap between them, so the snapshot
//! call sleeps for the sampling window — the one deliberately blocking call
//! in the app.

use sysinfo::System;

use super::{BatteryStatus, ResourceSnapshot};
use crate::timing::CPU_SAMPLE_WINDOW;

/// Stateful sysinfo wrapper. Reused across queries so memory refreshes stay
/// cheap.
pub(super) struct Telemetry {
    system: System,
}

impl Telemetry {
    pub(super) fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    /// CPU usage over the sampling window plus current memory usage.
    pub(super) fn cpu_memory(&mut self) -> ResourceSnapshot {
        self.system.refresh_cpu_usage();
        std::thread::sleep(CPU_SAMPLE_WINDOW);
        self.system.refresh_cpu_usage();
        let cpu_percent = self.system.global_cpu_info().cpu_usage();

        self.system.refresh_memory();
        let total = self.system.total_memory();
        let memory_percent = if total == 0 {
            0.0
        } else {
            self.system.used_memory() as f32 / total as f32 * 100.0
        };

        ResourceSnapshot {
            cpu_percent,
            memory_percent,
        }
    }
}

/// First battery reported by the OS, or None when there is no sensor (a
/// desktop tower, a VM) or the probe fails outright.
pub(super) fn battery() -> Option<BatteryStatus> {
    use starship_battery::units::ratio::percent;
    use starship_battery::{Manager, State};

    let manager = Manager::new().ok()?;
    let battery = match manager.batteries().ok()?.next() {
        Some(Ok(b)) => b,
        Some(Err(e)) => {
            tracing::warn!("Battery probe failed: {e}");
            return None;
        }
        None => return None,
    };

    Some(BatteryStatus {
        percent: battery.state_of_charge().get::<percent>(),
        charging: matches!(battery.state(), State::Charging | State::Full),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_memory_snapshot_is_in_range() {
        let mut telemetry = Telemetry::new();
        let snap = telemetry.cpu_memory();
        assert!(snap.cpu_percent >= 0.0);
        assert!(snap.memory_percent >= 0.0 && snap.memory_percent <= 100.0);
    }
}
