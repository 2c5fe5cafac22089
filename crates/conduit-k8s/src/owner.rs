use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

use crate::PROXY_LABELS;

const PROXY_LABEL_PREFIX: &str = "conduit.io/proxy-";

/// Prometheus owner labels extracted from an injected object, based on [`BTreeMap`].
///
/// Keys follow the relabel conventions of the Prometheus scrape config
/// (`deployment`, `replica_set`, `k8s_job`, ...).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerLabels(pub BTreeMap<String, String>);

impl OwnerLabels {
    /// Create an empty set of owner labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no owner labels were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the value for an owner label, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all owner labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<OwnerLabels> for BTreeMap<String, String> {
    fn from(labels: OwnerLabels) -> Self {
        labels.0
    }
}

/// Returns the Prometheus owner labels that can be extracted from the proxy
/// labels of an injected Kubernetes object.
///
/// Proxy labels missing from the object are skipped.
pub fn get_owner_labels(meta: &ObjectMeta) -> OwnerLabels {
    let mut out = OwnerLabels::new();
    let Some(labels) = meta.labels.as_ref() else {
        return out;
    };

    for label in PROXY_LABELS {
        if let Some(value) = labels.get(label) {
            out.0.insert(to_owner_label(label), value.clone());
        }
    }
    out
}

/// Converts a proxy label into a Prometheus label name.
///
/// `job` is reserved by Prometheus, so the Job owner becomes `k8s_job`.
pub fn to_owner_label(proxy_label: &str) -> String {
    let stripped = proxy_label
        .strip_prefix(PROXY_LABEL_PREFIX)
        .unwrap_or(proxy_label);
    if stripped == "job" {
        return "k8s_job".to_string();
    }
    stripped.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CONTROLLER_NS_LABEL, PROXY_DAEMON_SET_LABEL, PROXY_DEPLOYMENT_LABEL, PROXY_JOB_LABEL,
        PROXY_REPLICA_SET_LABEL, PROXY_REPLICATION_CONTROLLER_LABEL,
    };

    fn meta_with(labels: &[(&str, &str)]) -> ObjectMeta {
        ObjectMeta {
            labels: Some(
                labels
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn converts_proxy_labels() {
        assert_eq!(to_owner_label(PROXY_DEPLOYMENT_LABEL), "deployment");
        assert_eq!(
            to_owner_label(PROXY_REPLICATION_CONTROLLER_LABEL),
            "replication_controller"
        );
        assert_eq!(to_owner_label(PROXY_REPLICA_SET_LABEL), "replica_set");
        assert_eq!(to_owner_label(PROXY_DAEMON_SET_LABEL), "daemon_set");
        assert_eq!(to_owner_label(PROXY_JOB_LABEL), "k8s_job");
    }

    #[test]
    fn label_without_prefix_only_swaps_dashes() {
        assert_eq!(to_owner_label("stateful-set"), "stateful_set");
        assert_eq!(to_owner_label("job"), "k8s_job");
    }

    #[test]
    fn job_label_becomes_k8s_job() {
        let labels = get_owner_labels(&meta_with(&[(PROXY_JOB_LABEL, "myjob")]));

        let expected: BTreeMap<String, String> =
            [("k8s_job".to_string(), "myjob".to_string())].into();
        assert_eq!(labels.into_inner(), expected);
    }

    #[test]
    fn replication_controller_label_is_underscored() {
        let labels = get_owner_labels(&meta_with(&[(PROXY_REPLICATION_CONTROLLER_LABEL, "rc1")]));

        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("replication_controller"), Some("rc1"));
    }

    #[test]
    fn extracts_every_proxy_label_and_ignores_others() {
        let labels = get_owner_labels(&meta_with(&[
            (PROXY_DEPLOYMENT_LABEL, "web"),
            (PROXY_REPLICATION_CONTROLLER_LABEL, "rc"),
            (PROXY_REPLICA_SET_LABEL, "web-5d8f"),
            (PROXY_JOB_LABEL, "migrate"),
            (PROXY_DAEMON_SET_LABEL, "agent"),
            (CONTROLLER_NS_LABEL, "conduit"),
            ("app", "web"),
        ]));

        let pairs: Vec<_> = labels.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("daemon_set", "agent"),
                ("deployment", "web"),
                ("k8s_job", "migrate"),
                ("replica_set", "web-5d8f"),
                ("replication_controller", "rc"),
            ]
        );
    }

    #[test]
    fn no_proxy_labels_yields_empty_map() {
        let labels = get_owner_labels(&meta_with(&[("app", "web")]));
        assert!(labels.is_empty());
    }

    #[test]
    fn missing_labels_field_yields_empty_map() {
        let labels = get_owner_labels(&ObjectMeta::default());
        assert!(labels.is_empty());
    }

    #[test]
    fn extraction_is_repeatable() {
        let meta = meta_with(&[(PROXY_REPLICA_SET_LABEL, "rs"), (PROXY_JOB_LABEL, "j")]);
        assert_eq!(get_owner_labels(&meta), get_owner_labels(&meta));
    }

    #[test]
    fn serializes_as_plain_map() {
        let labels = get_owner_labels(&meta_with(&[(PROXY_DEPLOYMENT_LABEL, "web")]));
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"deployment":"web"}"#);
    }
}
