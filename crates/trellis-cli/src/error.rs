//! Error types for the command-line tool

use std::io;
use std::path::PathBuf;

use trellis_core::RenderError;
use trellis_showcase::ShowcaseError;

use crate::settings::SettingsError;

/// Anything that makes a command fail.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),

	#[error(transparent)]
	Showcase(#[from] ShowcaseError),

	#[error("Render error: {0}")]
	Render(#[from] RenderError),

	#[error("Failed to open {path}: {source}")]
	Output {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Failed to read dataset {path}: {source}")]
	DataIo {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Invalid dataset {path}: {source}")]
	Data {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("IO error: {0}")]
	Io(#[from] io::Error),
}

/// Result type for commands
pub type Result<T> = std::result::Result<T, CliError>;
