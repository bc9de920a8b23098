//! Error types for trellis-showcase

use thiserror::Error;

/// Error type for page selection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowcaseError {
	/// The requested page does not exist
	#[error("Unknown page: {0} (expected one of: shipments, dashboard, gauges)")]
	UnknownPage(String),
}

/// Result type for showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;
