//! Error types for trellis-themes

use thiserror::Error;

/// Error type for theme selection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ThemeError {
	/// The requested theme is not one of the built-in adapters
	#[error("Unknown theme: {0} (expected one of: bootstrap, material, tailwind)")]
	UnknownTheme(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
