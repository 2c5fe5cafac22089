//! Public-API request model for the Conduit metrics backend.
//!
//! Turns loosely-typed user parameters ([`StatSummaryRequestParams`]) into a
//! validated [`StatSummaryRequest`] via [`build_stat_summary_request`].

mod build;
pub use build::{build_stat_summary_request, validate_time_window};

pub mod duration;
pub use duration::{DurationError, parse_duration};

mod error;
pub use error::{ApiError, ApiResult};

mod params;
pub use params::StatSummaryRequestParams;

mod request;
pub use request::{Resource, ResourceSelection, StatSummaryRequest};
