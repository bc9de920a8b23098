//! Command definitions and their execution

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use trellis_core::{Builder, RenderOptions, render_with};
use trellis_showcase::{Dataset, PageKind, PageOptions, page};
use trellis_themes::{ThemeKind, theme_for, theme_with_palette};

use crate::error::{CliError, Result};
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "trellis")]
#[command(about = "Render themed HTML showcase pages", long_about = None)]
#[command(version)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbosity: u8,

	/// Settings file (defaults to ./trellis.toml when present)
	#[arg(short, long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
	/// Render one page as HTML
	Render {
		/// Page to render: shipments, dashboard or gauges
		#[arg(value_name = "PAGE")]
		page: PageKind,

		/// Theme: bootstrap, material or tailwind (overrides settings)
		#[arg(short, long, value_name = "THEME")]
		theme: Option<ThemeKind>,

		/// Output file (defaults to stdout)
		#[arg(short, long, value_name = "PATH")]
		out: Option<PathBuf>,

		/// TOML dataset with `shipments` and `gauges` tables
		#[arg(short, long, value_name = "PATH")]
		data: Option<PathBuf>,

		/// Document language
		#[arg(long, value_name = "LANG")]
		lang: Option<String>,

		/// Site title
		#[arg(long, value_name = "TITLE")]
		title: Option<String>,

		/// Output buffer size in bytes (0 disables buffering)
		#[arg(long, value_name = "BYTES")]
		buffer: Option<usize>,
	},

	/// List the available themes
	Themes,
}

/// Settings file, then environment, then the flags of `command`.
///
/// Relative `--config`, `--out` and `--data` paths are joined onto `dir`;
/// relative paths inside a settings file onto that file's directory.
pub fn resolve_settings(cli: &Cli, dir: &Path) -> Result<Settings> {
	let mut settings = Settings::discover(cli.config.as_deref(), dir)?.with_env()?;

	if let Commands::Render {
		theme,
		out,
		data,
		lang,
		title,
		buffer,
		..
	} = &cli.command
	{
		if let Some(theme) = theme {
			settings.theme = *theme;
		}
		if let Some(out) = out {
			settings.output = Some(dir.join(out));
		}
		if let Some(data) = data {
			settings.data = Some(dir.join(data));
		}
		if let Some(lang) = lang {
			settings.lang = lang.clone();
		}
		if let Some(title) = title {
			settings.title = title.clone();
		}
		if let Some(buffer) = buffer {
			settings.buffer_capacity = *buffer;
		}
	}
	Ok(settings)
}

/// Reads a dataset file. Missing tables fall back to the demo data.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
	let content = fs::read_to_string(path).map_err(|source| CliError::DataIo {
		path: path.to_owned(),
		source,
	})?;
	toml::from_str(&content).map_err(|source| CliError::Data {
		path: path.to_owned(),
		source,
	})
}

/// Renders `kind` with `settings` into `sink`.
pub fn render_page<W: Write + ?Sized>(
	kind: PageKind,
	settings: &Settings,
	sink: &mut W,
) -> Result<()> {
	let data = match &settings.data {
		Some(path) => load_dataset(path)?,
		None => Dataset::sample(),
	};
	let theme = theme_with_palette(settings.theme, settings.effective_palette());
	let options = PageOptions {
		lang: settings.lang.clone(),
		title: settings.title.clone(),
		refresh_seconds: settings.refresh_seconds,
	};

	let template = page(kind, theme.as_ref(), &data, &options);
	let node = template.build(&Builder::new());
	let render_options = RenderOptions::new().buffer_capacity(settings.buffer_capacity);
	render_with(&node, sink, &render_options)?;
	tracing::info!(page = %kind, theme = %settings.theme, "page rendered");
	Ok(())
}

fn list_themes(current: ThemeKind, out: &mut dyn Write) -> Result<()> {
	writeln!(out, "{}", "Available themes:".bold())?;
	for kind in ThemeKind::ALL {
		let theme = theme_for(kind);
		if kind == current {
			writeln!(out, "  {} {}", "*".green(), kind.as_str().green().bold())?;
		} else {
			writeln!(out, "    {}", kind.as_str())?;
		}
		for url in theme.stylesheet_urls() {
			writeln!(out, "      {}", url.dimmed())?;
		}
	}
	Ok(())
}

/// Executes `cli`, resolving relative paths as [`resolve_settings`] does and
/// writing regular output to `stdout`.
pub fn run(cli: &Cli, dir: &Path, stdout: &mut dyn Write) -> Result<()> {
	let settings = resolve_settings(cli, dir)?;
	tracing::debug!(?settings, "resolved settings");

	match &cli.command {
		Commands::Render { page: kind, .. } => match &settings.output {
			Some(path) => {
				let mut file = File::create(path).map_err(|source| CliError::Output {
					path: path.clone(),
					source,
				})?;
				render_page(*kind, &settings, &mut file)?;
				eprintln!(
					"{} {} -> {}",
					"Rendered".green(),
					kind,
					path.display()
				);
				Ok(())
			}
			None => {
				render_page(*kind, &settings, stdout)?;
				stdout.flush()?;
				Ok(())
			}
		},
		Commands::Themes => list_themes(settings.theme, stdout),
	}
}
