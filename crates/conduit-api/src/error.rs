use thiserror::Error;

use conduit_k8s::K8sError;

use crate::duration::DurationError;

/// Errors returned while building a public-API request.
///
/// Both variants are transparent: the message is exactly the one produced by
/// the duration parser or the resource resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidTimeWindow(#[from] DurationError),

    #[error(transparent)]
    UnknownResourceType(#[from] K8sError),
}

impl ApiError {
    /// Returns `true` if the error was caused by caller input
    /// and should be reported as a bad request.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            ApiError::InvalidTimeWindow(_) | ApiError::UnknownResourceType(_) => true,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
