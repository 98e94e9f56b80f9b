//! Static hardening checklists for container and virtualization platforms.
//!
//! The text is advisory documentation. It never reflects the state of a real
//! target system.

use serde::Serialize;

/// Returned for any key that does not name a known platform family.
pub const UNDEFINED_TYPE_MESSAGE: &str =
    "undefined type, valid options are: docker/container, k8s/kubernetes, vm/virtualization";

const CONTAINER_CHECKLIST: &str = "\
Container/host isolation checks:
- Avoid privileged containers (--privileged); keep capabilities to the minimum
- Never mount /var/run/docker.sock into workload containers; use a controlled least-privilege proxy when access is required
- Restrict hostPath mounts and sharing of the host PID/Network namespaces
- Enable and verify seccomp/AppArmor/SELinux, read-only root filesystems and rootless runtimes where feasible
- Image provenance and signing: enable image scanning, SBOMs, signature verification and admission policies";

const KUBERNETES_CHECKLIST: &str = "\
Kubernetes hardening checks:
- Least-privilege RBAC; disable token automount for the default ServiceAccount (enable only where needed)
- Enable admission control and policy enforcement (PSA/OPA/Kyverno, per organisational standard)
- Default-deny network policies with explicit allows; enable audit logging and forward it to the SIEM
- Node and control-plane patching: upgrade regularly and verify CVE fixes";

const VIRTUALIZATION_CHECKLIST: &str = "\
Virtualization hardening checks:
- Keep the hypervisor and Guest Additions/Tools up to date; disable unneeded sharing features (shared folders/clipboard/drag and drop)
- Control device passthrough and management-plane access; enable logging and alerting
- Define isolation boundaries and east-west traffic policy; keep management and production networks separate";

/// Platform family a checklist applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VirtualizationType {
    Container,
    Kubernetes,
    Virtualization,
    Unknown,
}

impl VirtualizationType {
    /// Accepted keys, short form first.
    pub const KEYS: [(&'static str, VirtualizationType); 6] = [
        ("docker", Self::Container),
        ("container", Self::Container),
        ("k8s", Self::Kubernetes),
        ("kubernetes", Self::Kubernetes),
        ("vm", Self::Virtualization),
        ("virtualization", Self::Virtualization),
    ];

    /// Exact, case-sensitive lookup falling back to `Unknown`.
    pub fn from_key(key: &str) -> Self {
        Self::KEYS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, t)| *t)
            .unwrap_or(Self::Unknown)
    }

    pub fn checklist(self) -> &'static str {
        match self {
            Self::Container => CONTAINER_CHECKLIST,
            Self::Kubernetes => KUBERNETES_CHECKLIST,
            Self::Virtualization => VIRTUALIZATION_CHECKLIST,
            Self::Unknown => UNDEFINED_TYPE_MESSAGE,
        }
    }
}

/// Returns the hardening checklist for `kind`, or the undefined-type message.
pub fn hardening_checklist(kind: &str) -> &'static str {
    VirtualizationType::from_key(kind).checklist()
}
