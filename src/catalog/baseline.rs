//! Read-only baseline discovery commands per platform.
//!
//! Every command here must be non-destructive and idempotent. That is a
//! curation rule for whoever edits the table; nothing enforces it at runtime
//! beyond the test that runs each entry through the audit.

use std::collections::BTreeMap;

use serde::Serialize;

/// A named read-only discovery operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaselineTask {
    pub name: &'static str,
    pub command: &'static str,
}

const fn task(name: &'static str, command: &'static str) -> BaselineTask {
    BaselineTask { name, command }
}

const WINDOWS_TASKS: &[BaselineTask] = &[
    task("identity", "whoami /all"),
    task(
        "os_info",
        concat!(
            r#"ver && reg query "HKLM\Software\Microsoft\Windows NT\CurrentVersion" /v ProductName"#,
            r#" && reg query "HKLM\Software\Microsoft\Windows NT\CurrentVersion" /v CurrentBuildNumber"#,
            r#" && reg query "HKLM\Software\Microsoft\Windows NT\CurrentVersion" /v UBR"#,
        ),
    ),
    task("network", "ipconfig /all && route print"),
    task("firewall", "netsh advfirewall show allprofiles"),
    task(
        "hotfixes",
        r#"powershell -NoProfile -Command "Get-HotFix | Sort-Object InstalledOn -Descending | Select-Object -First 20 | Format-Table -AutoSize""#,
    ),
    task(
        "defender_status",
        concat!(
            r#"powershell -NoProfile -Command "if (Get-Command Get-MpComputerStatus -ErrorAction SilentlyContinue) { "#,
            r#"Get-MpComputerStatus | Select-Object AMServiceEnabled,AntispywareEnabled,RealTimeProtectionEnabled,IoavProtectionEnabled,NISEnabled | Format-List "#,
            r#"} else { \"Defender cmdlets not available.\" }""#,
        ),
    ),
    task("audit_policy_hint", "auditpol /get /category:*"),
];

const LINUX_TASKS: &[BaselineTask] = &[
    task("identity", "id"),
    task("os_info", "cat /etc/os-release 2>/dev/null || uname -a"),
    task("network", "ip addr 2>/dev/null || ifconfig -a 2>/dev/null"),
    task(
        "listening_ports",
        "ss -lntup 2>/dev/null || netstat -lntup 2>/dev/null",
    ),
    task("time_sync", "timedatectl status 2>/dev/null || date"),
    task(
        "audit_policy_hint",
        r#"auditctl -s 2>/dev/null || echo "auditd not installed/permission denied""#,
    ),
];

/// Operating system family with a registered baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Linux];

    /// Exact, case-sensitive key lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "windows" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// Tasks in declared order.
    pub fn tasks(self) -> &'static [BaselineTask] {
        match self {
            Self::Windows => WINDOWS_TASKS,
            Self::Linux => LINUX_TASKS,
        }
    }
}

/// Returns the task name to command mapping for `platform`.
///
/// Unknown platforms yield an empty map rather than an error.
///
/// # Examples
/// ```
/// use cmd_audit::catalog::baseline_discovery;
///
/// assert_eq!(baseline_discovery("linux").get("identity"), Some(&"id"));
/// assert!(baseline_discovery("solaris").is_empty());
/// ```
pub fn baseline_discovery(platform: &str) -> BTreeMap<&'static str, &'static str> {
    let Some(platform) = Platform::from_key(platform) else {
        tracing::debug!("No baseline registered for platform '{}'", platform);
        return BTreeMap::new();
    };

    platform
        .tasks()
        .iter()
        .map(|t| (t.name, t.command))
        .collect()
}
