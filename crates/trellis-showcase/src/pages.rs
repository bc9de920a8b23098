//! Complete demo pages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trellis_core::attr::{action, class, method, type_};
use trellis_core::page::{Head, document};
use trellis_core::template::{H, seq};
use trellis_themes::{Crumb, FieldSpec, NavItem, SelectOption, Size, Theme, Variant};

use crate::dashboard::{Gauge, dashboard, gauges_partial, sample_gauges};
use crate::error::{Result, ShowcaseError};
use crate::shipment::{
	Shipment, ShipmentStatus, sample_shipments, shipment_cards, shipments_table, status_summary,
};

/// Which page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
	/// Shipment list with table, cards and a filter form
	Shipments,
	/// Gauge dashboard document
	Dashboard,
	/// Gauge grid fragment, without a document around it
	Gauges,
}

impl PageKind {
	/// Every page.
	pub const ALL: [PageKind; 3] = [Self::Shipments, Self::Dashboard, Self::Gauges];

	/// Lowercase name, as accepted by [`FromStr`].
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Shipments => "shipments",
			Self::Dashboard => "dashboard",
			Self::Gauges => "gauges",
		}
	}

	/// Whether the page is a complete HTML document.
	pub fn is_document(&self) -> bool {
		!matches!(self, Self::Gauges)
	}
}

impl fmt::Display for PageKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PageKind {
	type Err = ShowcaseError;

	fn from_str(s: &str) -> Result<Self> {
		let wanted = s.trim();
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| ShowcaseError::UnknownPage(wanted.to_owned()))
	}
}

/// The data pages are built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
	/// Shipments
	pub shipments: Vec<Shipment>,
	/// Gauges
	pub gauges: Vec<Gauge>,
}

impl Default for Dataset {
	fn default() -> Self {
		Self::sample()
	}
}

impl Dataset {
	/// The built-in demo data.
	pub fn sample() -> Self {
		Self {
			shipments: sample_shipments(),
			gauges: sample_gauges(),
		}
	}
}

/// Document-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
	/// `lang` of the `<html>` element
	pub lang: String,
	/// Site title, shown in the navigation bar and the `<title>`
	pub title: String,
	/// Suggested refresh interval of the gauge grid, in seconds
	pub refresh_seconds: u32,
}

impl Default for PageOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_owned(),
			title: "Trellis".to_owned(),
			refresh_seconds: 10,
		}
	}
}

fn navigation(theme: &dyn Theme, brand: &str, current: PageKind) -> H {
	let items = [
		(PageKind::Shipments, "Shipments", "/shipments"),
		(PageKind::Dashboard, "Dashboard", "/dashboard"),
	]
	.map(|(kind, label, target)| {
		let item = NavItem::new(label, target);
		if kind == current { item.active() } else { item }
	});
	theme.nav(brand, &items)
}

fn filter_form(theme: &dyn Theme) -> H {
	let statuses: Vec<SelectOption> = std::iter::once(SelectOption::new("", "Any").selected())
		.chain(
			ShipmentStatus::ALL
				.iter()
				.map(|status| SelectOption::new(status.as_str(), status.label())),
		)
		.collect();

	let search = theme.form_input(
		&FieldSpec::new("q", "Search")
			.input_type("search")
			.placeholder("Reference or city"),
	);
	let status = theme.form_select(&FieldSpec::new("status", "Status"), &statuses);
	let submit = theme.button("Filter", Variant::Primary, vec![type_("submit")]);

	H::new(move |b| {
		b.form((
			action("/shipments"),
			method("get"),
			class("trellis-filter"),
			&search,
			&status,
			&submit,
		))
	})
}

fn shipments_body(theme: &dyn Theme, shipments: &[Shipment], options: &PageOptions) -> H {
	let heading = H::new(|b| b.h1("Shipments"));
	let content = seq([
		theme.breadcrumbs(&[Crumb::link("Home", "/"), Crumb::current("Shipments")]),
		heading,
		status_summary(shipments),
		filter_form(theme),
		shipments_table(theme, shipments),
		shipment_cards(theme, shipments),
		theme.pagination(1, 1, "/shipments"),
	]);
	seq([
		navigation(theme, &options.title, PageKind::Shipments),
		theme.container(Size::Lg, content),
	])
}

fn dashboard_body(theme: &dyn Theme, gauges: &[Gauge], options: &PageOptions) -> H {
	let content = seq([
		theme.breadcrumbs(&[Crumb::link("Home", "/"), Crumb::current("Dashboard")]),
		dashboard(theme, gauges, options.refresh_seconds),
	]);
	seq([
		navigation(theme, &options.title, PageKind::Dashboard),
		theme.container(Size::Xl, content),
	])
}

/// Builds the template of one page.
///
/// [`PageKind::Gauges`] yields the bare gauge grid; the other pages are full
/// documents carrying the theme's stylesheets.
pub fn page(kind: PageKind, theme: &dyn Theme, data: &Dataset, options: &PageOptions) -> H {
	tracing::debug!(page = %kind, theme = theme.name(), "building page");
	let (section, body) = match kind {
		PageKind::Gauges => return gauges_partial(theme, &data.gauges),
		PageKind::Shipments => ("Shipments", shipments_body(theme, &data.shipments, options)),
		PageKind::Dashboard => ("Dashboard", dashboard_body(theme, &data.gauges, options)),
	};
	let head = theme.head(
		Head::new()
			.title(format!("{section} · {}", options.title))
			.meta("generator", "trellis"),
	);
	document(options.lang.clone(), head, body)
}
