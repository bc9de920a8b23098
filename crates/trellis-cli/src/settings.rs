//! Layered settings: defaults, then a TOML file, then `TRELLIS_*`
//! environment variables, then command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trellis_themes::{Palette, ThemeError, ThemeKind};

/// File read when no `--config` is given. Missing is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "trellis.toml";

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {name}: {reason}")]
	Env { name: &'static str, reason: String },

	#[error(transparent)]
	Theme(#[from] ThemeError),
}

/// Result type for settings loading
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Everything the renderer can be configured with.
///
/// ```toml
/// theme = "material"
/// lang = "de"
/// title = "Flotte"
/// buffer_capacity = 8192
///
/// [palette]
/// primary = "#005f73"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	/// Theme used for every page
	pub theme: ThemeKind,
	/// `lang` of generated documents
	pub lang: String,
	/// Site title
	pub title: String,
	/// Output buffer size in bytes; 0 writes straight through
	pub buffer_capacity: usize,
	/// Refresh interval advertised by the dashboard
	pub refresh_seconds: u32,
	/// Write here instead of stdout
	pub output: Option<PathBuf>,
	/// TOML dataset replacing the built-in demo data
	pub data: Option<PathBuf>,
	/// Colors overriding the theme's defaults
	pub palette: Option<Palette>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			theme: ThemeKind::default(),
			lang: "en".to_owned(),
			title: "Trellis".to_owned(),
			buffer_capacity: 8 * 1024,
			refresh_seconds: 10,
			output: None,
			data: None,
			palette: None,
		}
	}
}

impl Settings {
	/// Parses settings from TOML text. Missing keys keep their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Reads settings from a TOML file.
	///
	/// Relative `output` and `data` paths are taken relative to the file's
	/// directory.
	pub fn from_file(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_owned(),
			source,
		})?;
		let mut settings = Self::from_toml_str(&content)?;
		if let Some(parent) = path.parent() {
			settings = settings.relative_to(parent);
		}
		tracing::debug!(path = %path.display(), "loaded settings file");
		Ok(settings)
	}

	/// Reads `explicit` (relative to `dir`) if given, otherwise
	/// [`DEFAULT_CONFIG_FILE`] in `dir` when it exists, otherwise the
	/// defaults.
	pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::from_file(&dir.join(path));
		}
		let fallback = dir.join(DEFAULT_CONFIG_FILE);
		if fallback.is_file() {
			Self::from_file(&fallback)
		} else {
			Ok(Self::default())
		}
	}

	/// Applies `TRELLIS_THEME`, `TRELLIS_LANG`, `TRELLIS_TITLE` and
	/// `TRELLIS_BUFFER` from the process environment.
	pub fn with_env(self) -> Result<Self> {
		self.with_env_from(|name| std::env::var(name).ok())
	}

	/// Same as [`with_env`](Self::with_env), reading variables through
	/// `lookup`. Empty values are ignored.
	pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

		if let Some(theme) = var("TRELLIS_THEME") {
			self.theme = theme.parse()?;
		}
		if let Some(lang) = var("TRELLIS_LANG") {
			self.lang = lang;
		}
		if let Some(title) = var("TRELLIS_TITLE") {
			self.title = title;
		}
		if let Some(buffer) = var("TRELLIS_BUFFER") {
			self.buffer_capacity = buffer.trim().parse().map_err(|err| SettingsError::Env {
				name: "TRELLIS_BUFFER",
				reason: format!("{err}"),
			})?;
		}
		Ok(self)
	}

	/// Joins relative `output` and `data` paths onto `base`.
	pub fn relative_to(mut self, base: &Path) -> Self {
		self.output = self.output.map(|path| base.join(path));
		self.data = self.data.map(|path| base.join(path));
		self
	}

	/// The palette to render with: the configured one, or the theme's own.
	pub fn effective_palette(&self) -> Palette {
		self.palette
			.clone()
			.unwrap_or_else(|| self.theme.default_palette())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;
	use std::collections::HashMap;
	use std::env;
	use tempfile::TempDir;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
			.collect();
		move |name| vars.get(name).cloned()
	}

	#[rstest]
	fn test_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.theme, ThemeKind::Bootstrap);
		assert_eq!(settings.lang, "en");
		assert_eq!(settings.buffer_capacity, 8192);
		assert_eq!(settings.effective_palette(), Palette::bootstrap());
	}

	#[rstest]
	fn test_partial_toml() {
		let settings = Settings::from_toml_str(
			r##"
theme = "tailwind"
title = "Fleet"

[palette]
primary = "#000000"
"##,
		)
		.unwrap();
		assert_eq!(settings.theme, ThemeKind::Tailwind);
		assert_eq!(settings.title, "Fleet");
		assert_eq!(settings.lang, "en");
		let palette = settings.effective_palette();
		assert_eq!(palette.primary, "#000000");
	}

	#[rstest]
	fn test_unknown_key_is_rejected() {
		let err = Settings::from_toml_str("colour = \"red\"").unwrap_err();
		assert!(matches!(err, SettingsError::Toml(_)));
	}

	#[rstest]
	fn test_env_overrides() {
		let settings = Settings::default()
			.with_env_from(lookup(&[
				("TRELLIS_THEME", "Material"),
				("TRELLIS_LANG", "fr"),
				("TRELLIS_BUFFER", " 0 "),
				("TRELLIS_TITLE", ""),
			]))
			.unwrap();
		assert_eq!(settings.theme, ThemeKind::Material);
		assert_eq!(settings.lang, "fr");
		assert_eq!(settings.buffer_capacity, 0);
		assert_eq!(settings.title, "Trellis");
		assert_eq!(settings.effective_palette(), Palette::material());
	}

	#[rstest]
	#[case("TRELLIS_THEME", "bulma")]
	#[case("TRELLIS_BUFFER", "lots")]
	fn test_bad_env_values(#[case] name: &str, #[case] value: &str) {
		let result = Settings::default().with_env_from(lookup(&[(name, value)]));
		assert!(result.is_err());
	}

	#[rstest]
	#[serial]
	fn test_process_env() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("TRELLIS_LANG", "ja");
		}
		let settings = Settings::default().with_env();
		// SAFETY: see above.
		unsafe {
			env::remove_var("TRELLIS_LANG");
		}
		assert_eq!(settings.unwrap().lang, "ja");
	}

	#[rstest]
	fn test_file_paths_are_relative_to_the_file() {
		let temp_dir = TempDir::new().unwrap();
		let site = temp_dir.path().join("site");
		fs::create_dir(&site).unwrap();
		fs::write(
			site.join("trellis.toml"),
			"data = \"fleet.toml\"\noutput = \"/tmp/out.html\"\n",
		)
		.unwrap();

		let settings = Settings::discover(Some(Path::new("site/trellis.toml")), temp_dir.path()).unwrap();
		assert_eq!(settings.data, Some(site.join("fleet.toml")));
		assert_eq!(settings.output, Some(PathBuf::from("/tmp/out.html")));
	}

	#[rstest]
	fn test_discover() {
		let temp_dir = TempDir::new().unwrap();
		assert_eq!(
			Settings::discover(None, temp_dir.path()).unwrap(),
			Settings::default()
		);

		fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), "lang = \"nl\"\n").unwrap();
		assert_eq!(Settings::discover(None, temp_dir.path()).unwrap().lang, "nl");

		let missing = temp_dir.path().join("missing.toml");
		let err = Settings::discover(Some(&missing), temp_dir.path()).unwrap_err();
		assert!(matches!(err, SettingsError::Io { .. }));
		assert!(err.to_string().contains("missing.toml"));
	}
}
