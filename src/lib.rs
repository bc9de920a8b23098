//! # Trellis
//!
//! Type-safe, composable server-side HTML generation with pluggable CSS
//! themes.
//!
//! Pages are built from [`Node`] trees through a stateless [`Builder`],
//! deferred as [`H`] templates, and streamed to any `io::Write` sink with
//! every text and attribute value escaped.
//!
//! ## Feature Flags
//!
//! - `themes` (default) - the [`themes`] module: Bootstrap, Material and Tailwind
//! - `showcase` - the [`showcase`] module: demo pages written once against any theme
//! - `full` - everything
//!
//! ## Quick Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let greeting = H::new(|b| b.p((attr::class("lead"), "Fish & Chips")));
//! assert_eq!(
//! 	render_to_string(&greeting.build(&Builder::new())),
//! 	r#"<p class="lead">Fish &amp; Chips</p>"#
//! );
//! ```

pub use trellis_core::*;

#[cfg(feature = "showcase")]
pub mod showcase;
#[cfg(feature = "themes")]
pub mod themes;
