use serde::{Deserialize, Serialize};

/// Loosely-typed stat summary parameters, as received from the CLI or the web UI.
///
/// Every field is optional on the wire and defaults to the empty string.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatSummaryRequestParams {
    /// Metric lookback window in duration syntax (e.g. `"1m"`).
    ///
    /// Empty means no window was supplied and the backend default applies.
    pub time_window: String,
    /// Namespace of the queried resource; empty selects all namespaces.
    pub namespace: String,
    /// Friendly resource type (`"po"`, `"deploy"`, `"deployments"`, ...).
    pub resource_type: String,
    /// Name of a single resource; empty selects every resource of the type.
    pub resource_name: String,
}
