use tracing::{debug, trace};

use conduit_k8s::canonical_name_from_friendly_name;

use crate::{
    duration::{DurationError, parse_duration},
    error::{ApiError, ApiResult},
    params::StatSummaryRequestParams,
    request::{Resource, ResourceSelection, StatSummaryRequest},
};

// ============================================================================
// StatSummaryRequestParams → StatSummaryRequest
// ============================================================================

impl TryFrom<&StatSummaryRequestParams> for StatSummaryRequest {
    type Error = ApiError;

    fn try_from(params: &StatSummaryRequestParams) -> Result<Self, Self::Error> {
        build_stat_summary_request(params)
    }
}

impl TryFrom<StatSummaryRequestParams> for StatSummaryRequest {
    type Error = ApiError;

    fn try_from(params: StatSummaryRequestParams) -> Result<Self, Self::Error> {
        build_stat_summary_request(&params)
    }
}

/// Validates user parameters and builds the request sent to the metrics backend.
///
/// A non-empty time window is checked first, so a malformed window is reported
/// even when the resource type is also invalid. The time window is copied into
/// the request unchanged.
pub fn build_stat_summary_request(
    params: &StatSummaryRequestParams,
) -> ApiResult<StatSummaryRequest> {
    if !params.time_window.is_empty() {
        validate_time_window(&params.time_window).inspect_err(|e| {
            debug!(time_window = %params.time_window, error = %e, "rejected stat summary time window");
        })?;
    }

    let resource_type = canonical_name_from_friendly_name(&params.resource_type).inspect_err(|e| {
        debug!(resource_type = %params.resource_type, error = %e, "rejected stat summary resource type");
    })?;

    trace!(
        resource_type = %resource_type,
        namespace = %params.namespace,
        time_window = %params.time_window,
        "built stat summary request"
    );

    Ok(StatSummaryRequest {
        selector: ResourceSelection {
            resource: Resource {
                namespace: params.namespace.clone(),
                resource_type,
                name: params.resource_name.clone(),
            },
        },
        time_window: params.time_window.clone(),
    })
}

/// Checks that `time_window` follows the duration grammar.
///
/// The parser error is returned as is.
pub fn validate_time_window(time_window: &str) -> Result<(), DurationError> {
    parse_duration(time_window).map(|_| ())
}
