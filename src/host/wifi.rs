//! Wireless status via the platform's network-interface command.
//!
//! Windows runs `netsh wlan show interfaces` and matches the `SSID`,
//! `Signal`, and `State` field prefixes, exactly as that output is shaped.
//! Unix asks NetworkManager (`nmcli` in terse mode) for the active network.
//! Both parsers are pure functions over captured output.

use std::process::Command;

use super::HostError;

/// Parsed wireless fields. Any of them may be missing when the command output
/// is incomplete — the responder reports that case separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WifiStatus {
    pub ssid: Option<String>,
    pub signal: Option<String>,
    pub state: Option<String>,
}

impl WifiStatus {
    /// True when all three fields were found.
    pub fn is_complete(&self) -> bool {
        self.ssid.is_some() && self.signal.is_some() && self.state.is_some()
    }
}

/// Run the platform command and parse its output.
pub(super) fn query() -> Result<WifiStatus, HostError> {
    let output = wifi_command()
        .output()
        .map_err(|e| HostError::Command(format!("wifi query failed to start: {e}")))?;
    if !output.status.success() {
        return Err(HostError::Command(format!(
            "wifi query exited with {}",
            output.status
        )));
    }
    let text = String::from_utf8_lossy(&output.stdout);
    Ok(parse(&text))
}

#[cfg(windows)]
fn wifi_command() -> Command {
    let mut cmd = Command::new("netsh");
    cmd.args(["wlan", "show", "interfaces"]);
    cmd
}

#[cfg(not(windows))]
fn wifi_command() -> Command {
    let mut cmd = Command::new("nmcli");
    cmd.args(["-t", "-f", "ACTIVE,SSID,SIGNAL", "device", "wifi"]);
    cmd
}

#[cfg(windows)]
fn parse(output: &str) -> WifiStatus {
    parse_field_prefixed(output)
}

#[cfg(not(windows))]
fn parse(output: &str) -> WifiStatus {
    parse_nmcli_terse(output)
}

/// Match lines by fixed field prefix, taking the value after the first colon.
/// Later occurrences overwrite earlier ones, mirroring how the netsh output
/// is scanned top to bottom.
#[cfg(any(windows, test))]
fn parse_field_prefixed(output: &str) -> WifiStatus {
    let mut status = WifiStatus::default();
    for line in output.lines() {
        let line = line.trim();
        if line.starts_with("SSID") {
            status.ssid = value_after_colon(line);
        } else if line.starts_with("Signal") {
            status.signal = value_after_colon(line);
        } else if line.starts_with("State") {
            status.state = value_after_colon(line);
        }
    }
    status
}

/// Parse `nmcli -t -f ACTIVE,SSID,SIGNAL device wifi` output: one
/// colon-separated record per network, the active one flagged "yes".
#[cfg(any(not(windows), test))]
fn parse_nmcli_terse(output: &str) -> WifiStatus {
    for line in output.lines() {
        let mut parts = line.splitn(3, ':');
        if parts.next() != Some("yes") {
            continue;
        }
        let ssid = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let signal = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{s}%"));
        return WifiStatus {
            ssid,
            signal,
            state: Some("connected".to_string()),
        };
    }
    WifiStatus::default()
}

#[cfg(any(windows, test))]
fn value_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_prefixed_full_output() {
        let output = "\
    Name                   : Wi-Fi\n\
    Description            : Intel(R) Wireless-AC 9560\n\
    State                  : connected\n\
    SSID                   : HomeNet\n\
    BSSID                  : aa:bb:cc:dd:ee:ff\n\
    Signal                 : 87%\n";
        let status = parse_field_prefixed(output);
        assert_eq!(status.ssid.as_deref(), Some("HomeNet"));
        assert_eq!(status.signal.as_deref(), Some("87%"));
        assert_eq!(status.state.as_deref(), Some("connected"));
        assert!(status.is_complete());
    }

    #[test]
    fn test_parse_field_prefixed_incomplete() {
        let status = parse_field_prefixed("    State : disconnected\n");
        assert_eq!(status.state.as_deref(), Some("disconnected"));
        assert!(status.ssid.is_none());
        assert!(!status.is_complete());
    }

    #[test]
    fn test_parse_field_prefixed_empty_value_is_none() {
        let status = parse_field_prefixed("    SSID : \n");
        assert!(status.ssid.is_none());
    }

    #[test]
    fn test_parse_nmcli_picks_active_row() {
        let output = "no:Neighbors:62\nyes:HomeNet:87\nno:CafeWifi:40\n";
        let status = parse_nmcli_terse(output);
        assert_eq!(status.ssid.as_deref(), Some("HomeNet"));
        assert_eq!(status.signal.as_deref(), Some("87%"));
        assert_eq!(status.state.as_deref(), Some("connected"));
        assert!(status.is_complete());
    }

    #[test]
    fn test_parse_nmcli_no_active_network() {
        let status = parse_nmcli_terse("no:Neighbors:62\n");
        assert_eq!(status, WifiStatus::default());
        assert!(!status.is_complete());
    }
}
