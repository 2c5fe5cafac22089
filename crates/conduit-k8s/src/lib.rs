//! Kubernetes vocabulary shared by the Conduit control plane.
//!
//! - canonical resource types and the friendly-name table used to resolve user input
//! - label and annotation keys injected into control-plane and mesh-enabled objects
//! - owner-label extraction used for Prometheus relabeling

mod constants;
pub use constants::{
    CERTIFICATE_BUNDLE_NAME, CONTROLLER_COMPONENT_LABEL, CONTROLLER_NS_LABEL,
    CREATED_BY_ANNOTATION, PROXY_DAEMON_SET_LABEL, PROXY_DEPLOYMENT_LABEL, PROXY_JOB_LABEL,
    PROXY_LABELS, PROXY_REPLICA_SET_LABEL, PROXY_REPLICATION_CONTROLLER_LABEL,
    PROXY_VERSION_ANNOTATION, created_by_annotation_value,
};

mod error;
pub use error::{K8sError, K8sResult};

mod owner;
pub use owner::{OwnerLabels, get_owner_labels, to_owner_label};

mod resource;
pub use resource::{
    FRIENDLY_NAMES, KUBERNETES_DEPLOYMENTS, KUBERNETES_PODS, ResourceType,
    canonical_name_from_friendly_name,
};

/// Version identifier of the running tool, as written into [`CREATED_BY_ANNOTATION`].
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
