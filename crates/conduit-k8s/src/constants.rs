//! Kubernetes labels and annotations used in Conduit's control plane and data plane configs.
//!
//! Keeping them here avoids scattering magic strings throughout the codebase.

use crate::VERSION;

/// Identifies an object as a component of the control plane (e.g. web, controller).
pub const CONTROLLER_COMPONENT_LABEL: &str = "conduit.io/control-plane-component";

/// Injected into mesh-enabled apps, identifying the namespace of the control plane.
pub const CONTROLLER_NS_LABEL: &str = "conduit.io/control-plane-ns";

/// Injected into mesh-enabled apps, identifying the Deployment the proxy belongs to.
pub const PROXY_DEPLOYMENT_LABEL: &str = "conduit.io/proxy-deployment";

/// Injected into mesh-enabled apps, identifying the ReplicationController the proxy belongs to.
pub const PROXY_REPLICATION_CONTROLLER_LABEL: &str = "conduit.io/proxy-replication-controller";

/// Injected into mesh-enabled apps, identifying the ReplicaSet the proxy belongs to.
pub const PROXY_REPLICA_SET_LABEL: &str = "conduit.io/proxy-replica-set";

/// Injected into mesh-enabled apps, identifying the Job the proxy belongs to.
pub const PROXY_JOB_LABEL: &str = "conduit.io/proxy-job";

/// Injected into mesh-enabled apps, identifying the DaemonSet the proxy belongs to.
pub const PROXY_DAEMON_SET_LABEL: &str = "conduit.io/proxy-daemon-set";

/// Source of the injected data plane (e.g. `conduit/cli v0.1.3`).
pub const CREATED_BY_ANNOTATION: &str = "conduit.io/created-by";

/// Version of the injected data plane (e.g. `v0.1.3`).
pub const PROXY_VERSION_ANNOTATION: &str = "conduit.io/proxy-version";

/// Name of the ConfigMap holding the root certificate.
pub const CERTIFICATE_BUNDLE_NAME: &str = "conduit-ca-bundle";

/// Every proxy-owner label, one per owning controller kind.
pub const PROXY_LABELS: [&str; 5] = [
    PROXY_DEPLOYMENT_LABEL,
    PROXY_REPLICATION_CONTROLLER_LABEL,
    PROXY_REPLICA_SET_LABEL,
    PROXY_JOB_LABEL,
    PROXY_DAEMON_SET_LABEL,
];

/// Value written under [`CREATED_BY_ANNOTATION`].
pub fn created_by_annotation_value() -> String {
    format!("conduit/cli {VERSION}")
}
