use serde::{Deserialize, Serialize};

use conduit_k8s::ResourceType;

/// A single Kubernetes resource, or every resource of a type when `name` is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub namespace: String,
    /// Canonical resource type; only values of [`ResourceType`] can appear here.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub name: String,
}

/// Identifies which resources a query targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSelection {
    pub resource: Resource,
}

/// Validated stat summary request, ready for the metrics backend.
///
/// Built from [`crate::StatSummaryRequestParams`] by [`crate::build_stat_summary_request`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummaryRequest {
    pub selector: ResourceSelection,
    /// Time window exactly as supplied by the caller, possibly empty.
    pub time_window: String,
}

impl StatSummaryRequest {
    /// Canonical resource type of the selector.
    pub fn resource_type(&self) -> ResourceType {
        self.selector.resource.resource_type
    }
}
