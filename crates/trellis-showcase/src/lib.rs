//! # Trellis Showcase
//!
//! Demo pages for a small freight business, written once against the
//! [`Theme`](trellis_themes::Theme) capability set and rendered with any
//! theme.
//!
//! - [`shipment`]: shipment cards, table and status summary
//! - [`dashboard`]: gauges and the refreshable gauge grid
//! - [`pages`]: complete documents and the page selector
//!
//! ```
//! use trellis_core::{Builder, render_template};
//! use trellis_showcase::{Dataset, PageKind, PageOptions, page};
//! use trellis_themes::{ThemeKind, theme_for};
//!
//! let theme = theme_for(ThemeKind::Tailwind);
//! let template = page(PageKind::Gauges, theme.as_ref(), &Dataset::sample(), &PageOptions::default());
//!
//! let mut out = Vec::new();
//! render_template(&template, &Builder::new(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("gauge-cpu"));
//! ```

pub mod dashboard;
pub mod error;
pub mod pages;
pub mod shipment;

pub use dashboard::{Gauge, dashboard, gauge_card, gauges_partial, sample_gauges};
pub use error::{Result, ShowcaseError};
pub use pages::{Dataset, PageKind, PageOptions, page};
pub use shipment::{
	Shipment, ShipmentStatus, sample_shipments, shipment_card, shipment_cards, shipments_table,
	status_summary,
};
