//! # Trellis Themes
//!
//! UI components for Trellis, rendered through interchangeable visual
//! systems.
//!
//! A [`Theme`] maps abstract operations (button, card, badge, table, nav and
//! so on) onto concrete markup. Each operation returns an [`H`] template, so
//! page code is written once and rendered with whichever theme is selected
//! at runtime:
//!
//! ```
//! use trellis_core::{Builder, render_to_string};
//! use trellis_themes::{ThemeKind, Variant, theme_for};
//!
//! for kind in ThemeKind::ALL {
//! 	let theme = theme_for(kind);
//! 	let badge = theme.badge("In transit", Variant::Info);
//! 	let html = render_to_string(&badge.build(&Builder::new()));
//! 	assert!(html.contains("In transit"));
//! }
//! ```
//!
//! ## Themes
//!
//! - [`Bootstrap`]: Bootstrap 5 classes
//! - [`Material`]: Material Components for the web
//! - [`Tailwind`]: Tailwind utility classes
//!
//! [`H`]: trellis_core::template::H

pub mod bootstrap;
pub mod component;
pub mod error;
pub mod material;
pub mod palette;
pub mod tailwind;
pub mod theme;

pub use bootstrap::Bootstrap;
pub use component::{Crumb, FieldSpec, NavItem, SelectOption, Size, TableData, Variant};
pub use error::{Result, ThemeError};
pub use material::Material;
pub use palette::Palette;
pub use tailwind::Tailwind;
pub use theme::{Theme, ThemeKind, theme_for, theme_with_palette};
