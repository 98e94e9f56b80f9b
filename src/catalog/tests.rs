//! Tests for the baseline and hardening catalogs.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::catalog::{
        Platform, UNDEFINED_TYPE_MESSAGE, VirtualizationType, baseline_discovery,
        hardening_checklist,
    };
    use crate::security::audit_action;

    /// Reviewed read-only entries. Editing the catalog means editing this list.
    fn reviewed_windows() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            ("identity", "whoami /all"),
            (
                "os_info",
                r#"ver && reg query "HKLM\Software\Microsoft\Windows NT\CurrentVersion" /v ProductName && reg query "HKLM\Software\Microsoft\Windows NT\CurrentVersion" /v CurrentBuildNumber && reg query "HKLM\Software\Microsoft\Windows NT\CurrentVersion" /v UBR"#,
            ),
            ("network", "ipconfig /all && route print"),
            ("firewall", "netsh advfirewall show allprofiles"),
            (
                "hotfixes",
                r#"powershell -NoProfile -Command "Get-HotFix | Sort-Object InstalledOn -Descending | Select-Object -First 20 | Format-Table -AutoSize""#,
            ),
            (
                "defender_status",
                r#"powershell -NoProfile -Command "if (Get-Command Get-MpComputerStatus -ErrorAction SilentlyContinue) { Get-MpComputerStatus | Select-Object AMServiceEnabled,AntispywareEnabled,RealTimeProtectionEnabled,IoavProtectionEnabled,NISEnabled | Format-List } else { \"Defender cmdlets not available.\" }""#,
            ),
            ("audit_policy_hint", "auditpol /get /category:*"),
        ])
    }

    fn reviewed_linux() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            ("identity", "id"),
            ("os_info", "cat /etc/os-release 2>/dev/null || uname -a"),
            ("network", "ip addr 2>/dev/null || ifconfig -a 2>/dev/null"),
            (
                "listening_ports",
                "ss -lntup 2>/dev/null || netstat -lntup 2>/dev/null",
            ),
            ("time_sync", "timedatectl status 2>/dev/null || date"),
            (
                "audit_policy_hint",
                r#"auditctl -s 2>/dev/null || echo "auditd not installed/permission denied""#,
            ),
        ])
    }

    #[test]
    fn test_catalog_matches_reviewed_entries() {
        assert_eq!(baseline_discovery("windows"), reviewed_windows());
        assert_eq!(baseline_discovery("linux"), reviewed_linux());
    }

    #[test]
    fn test_unknown_platform_is_empty() {
        for key in ["", "macos", "Windows", "LINUX", " linux", "freebsd"] {
            assert!(baseline_discovery(key).is_empty(), "for: {:?}", key);
        }
    }

    #[test]
    fn test_every_baseline_command_passes_audit() {
        for platform in Platform::ALL {
            for task in platform.tasks() {
                let verdict = audit_action(task.command);
                assert!(
                    verdict.allowed,
                    "{}/{} blocked by {:?}",
                    platform.key(),
                    task.name,
                    verdict.rule
                );
            }
        }
    }

    #[test]
    fn test_platform_keys_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_key(platform.key()), Some(platform));
        }
        assert_eq!(Platform::default(), Platform::Windows);
    }

    #[test]
    fn test_tasks_keep_declared_order() {
        let names: Vec<_> = Platform::Linux.tasks().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "identity",
                "os_info",
                "network",
                "listening_ports",
                "time_sync",
                "audit_policy_hint"
            ]
        );
    }

    #[test]
    fn test_hardening_synonyms() {
        assert_eq!(hardening_checklist("docker"), hardening_checklist("container"));
        assert_eq!(hardening_checklist("k8s"), hardening_checklist("kubernetes"));
        assert_eq!(hardening_checklist("vm"), hardening_checklist("virtualization"));

        assert_ne!(hardening_checklist("docker"), hardening_checklist("k8s"));
        assert_ne!(hardening_checklist("k8s"), hardening_checklist("vm"));
    }

    #[test]
    fn test_hardening_unknown_type() {
        assert_eq!(hardening_checklist("unknown-type"), UNDEFINED_TYPE_MESSAGE);
        assert_eq!(hardening_checklist(""), UNDEFINED_TYPE_MESSAGE);
        assert_eq!(hardening_checklist("Docker"), UNDEFINED_TYPE_MESSAGE);
        assert_eq!(
            VirtualizationType::from_key("podman"),
            VirtualizationType::Unknown
        );
    }

    #[test]
    fn test_fallback_lists_every_key() {
        for (key, _) in VirtualizationType::KEYS {
            assert!(UNDEFINED_TYPE_MESSAGE.contains(key), "missing: {}", key);
        }
    }

    #[test]
    fn test_checklists_are_multiline() {
        for kind in ["docker", "k8s", "vm"] {
            let text = hardening_checklist(kind);
            let lines: Vec<_> = text.lines().collect();
            assert!(lines.len() >= 4, "{} has {} lines", kind, lines.len());
            assert!(lines[0].ends_with(':'));
            assert!(lines[1..].iter().all(|l| l.starts_with("- ")));
        }
    }

    #[test]
    fn test_container_checklist_content() {
        let text = hardening_checklist("container");
        assert!(text.contains("--privileged"));
        assert!(text.contains("/var/run/docker.sock"));
        assert!(text.contains("seccomp"));
    }
}
