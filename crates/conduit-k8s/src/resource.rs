use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{K8sError, K8sResult};

/// Canonical name of the Deployments resource kind.
pub const KUBERNETES_DEPLOYMENTS: &str = "deployments";

/// Canonical name of the Pods resource kind.
pub const KUBERNETES_PODS: &str = "pods";

/// Kubernetes resource kinds the metrics backend can be queried for.
///
/// Serialized as the canonical name (`"deployments"`, `"pods"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ResourceType {
    Deployments,
    Pods,
}

/// Friendly names accepted from users, mapped to their resource kind.
///
/// Matching is exact: no trimming and no case folding.
pub const FRIENDLY_NAMES: &[(&str, ResourceType)] = &[
    ("deployments", ResourceType::Deployments),
    ("deployment", ResourceType::Deployments),
    ("deploy", ResourceType::Deployments),
    ("pods", ResourceType::Pods),
    ("pod", ResourceType::Pods),
    ("po", ResourceType::Pods),
];

impl ResourceType {
    /// Returns the canonical name as a static string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Deployments => KUBERNETES_DEPLOYMENTS,
            ResourceType::Pods => KUBERNETES_PODS,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = K8sError;
    fn from_str(s: &str) -> K8sResult<Self> {
        canonical_name_from_friendly_name(s)
    }
}

/// Resolves a friendly name (`"po"`, `"deploy"`, ...) into its canonical resource kind.
pub fn canonical_name_from_friendly_name(friendly: &str) -> K8sResult<ResourceType> {
    FRIENDLY_NAMES
        .iter()
        .find(|(name, _)| *name == friendly)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| K8sError::UnknownFriendlyName(friendly.to_string()))
}
