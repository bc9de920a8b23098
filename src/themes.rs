//! Pluggable CSS themes
//!
//! ## Example
//!
//! ```
//! use trellis::Builder;
//! use trellis::themes::{ThemeKind, Variant, theme_for};
//!
//! let theme = theme_for("tailwind".parse::<ThemeKind>().unwrap());
//! let badge = theme.badge("new", Variant::Success);
//! let html = trellis::render_to_string(&badge.build(&Builder::new()));
//! assert!(html.contains(">new</span>"));
//! ```

pub use trellis_themes::*;
