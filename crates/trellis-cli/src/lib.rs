//! # Trellis CLI
//!
//! Renders showcase pages from the command line.
//!
//! ```bash
//! trellis render shipments --theme material --out shipments.html
//! trellis render gauges --data fleet.toml
//! trellis themes
//! ```
//!
//! Settings are read from `trellis.toml` (or `--config`), then from
//! `TRELLIS_THEME`, `TRELLIS_LANG`, `TRELLIS_TITLE` and `TRELLIS_BUFFER`,
//! then from flags. Logging honors `TRELLIS_LOG` and `RUST_LOG`.

pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;

pub use cli::{Cli, Commands, load_dataset, render_page, resolve_settings, run};
pub use error::{CliError, Result};
pub use settings::{Settings, SettingsError};
