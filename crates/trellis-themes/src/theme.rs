//! The theme capability set and runtime selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trellis_core::attr::{self, Attribute, aria, href, id, name, rel};
use trellis_core::page::Head;
use trellis_core::template::H;
use trellis_core::Node;

use crate::bootstrap::Bootstrap;
use crate::component::{Crumb, FieldSpec, NavItem, SelectOption, Size, TableData, Variant};
use crate::error::{Result, ThemeError};
use crate::material::Material;
use crate::palette::Palette;
use crate::tailwind::Tailwind;

/// A visual system that turns abstract UI operations into markup.
///
/// Every operation returns an [`H`], so the same call site renders through
/// any theme. Themes hold no per-render state and can be shared across
/// threads.
pub trait Theme: Send + Sync {
	/// Theme name (for debugging and selection)
	fn name(&self) -> &'static str;

	/// Colors exposed as CSS variables.
	fn palette(&self) -> Palette;

	/// External stylesheets the markup relies on.
	fn stylesheet_urls(&self) -> &'static [&'static str];

	/// `<link>` elements for [`stylesheet_urls`](Theme::stylesheet_urls)
	/// followed by a `<style>` element declaring the palette.
	fn stylesheets(&self) -> H {
		let urls = self.stylesheet_urls();
		let css = self.palette().to_css_variables();
		H::new(move |b| {
			b.fragment((
				urls.iter()
					.map(|url| b.link((rel("stylesheet"), href(url))))
					.collect::<Vec<_>>(),
				b.style(Node::raw(css.clone())),
			))
		})
	}

	/// Adds this theme's stylesheets and palette to a document head.
	fn head(&self, head: Head) -> Head {
		self.stylesheet_urls()
			.iter()
			.fold(head, |head, url| head.stylesheet(*url))
			.inline_style(self.palette().to_css_variables())
	}

	/// A `<button>`. Extra attributes are applied after the theme's own, so
	/// a `class` merges and a `type` replaces the default.
	fn button(&self, label: &str, variant: Variant, attrs: Vec<Attribute>) -> H;

	/// A link styled as a button.
	fn link_button(&self, label: &str, target: &str, variant: Variant) -> H;

	/// A titled content box.
	fn card(&self, title: &str, body: H) -> H;

	/// A small status label.
	fn badge(&self, label: &str, variant: Variant) -> H;

	/// A message banner with `role="alert"`.
	fn alert(&self, message: &str, variant: Variant) -> H;

	/// A labelled `<input>`.
	fn form_input(&self, field: &FieldSpec) -> H;

	/// A labelled `<select>`.
	fn form_select(&self, field: &FieldSpec, options: &[SelectOption]) -> H;

	/// A labelled `<textarea>`.
	fn form_textarea(&self, field: &FieldSpec, rows: u32) -> H;

	/// A width-constrained wrapper. [`Size::Xs`] means full width.
	fn container(&self, size: Size, content: H) -> H;

	/// Cells laid out in `columns` equal columns (clamped to 1..=12).
	fn grid(&self, columns: usize, cells: Vec<H>) -> H;

	/// A side panel next to the main content.
	fn sidebar(&self, side: H, main: H) -> H;

	/// A top navigation bar.
	fn nav(&self, brand: &str, items: &[NavItem]) -> H;

	/// A breadcrumb trail.
	fn breadcrumbs(&self, crumbs: &[Crumb]) -> H;

	/// Page links for `current` of `total` pages. Renders nothing when
	/// `total` is zero.
	fn pagination(&self, current: u32, total: u32, base_href: &str) -> H;

	/// A data table.
	fn table(&self, data: &TableData) -> H;

	/// An unordered list.
	fn list(&self, items: Vec<H>) -> H;

	/// A progress bar filled to `value / max`.
	fn progress(&self, value: f64, max: f64, variant: Variant) -> H;
}

/// Built-in theme selector.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
	/// [`Bootstrap`]
	#[default]
	Bootstrap,
	/// [`Material`]
	Material,
	/// [`Tailwind`]
	Tailwind,
}

impl ThemeKind {
	/// Every built-in theme.
	pub const ALL: [ThemeKind; 3] = [Self::Bootstrap, Self::Material, Self::Tailwind];

	/// Lowercase name, as accepted by [`FromStr`].
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Bootstrap => "bootstrap",
			Self::Material => "material",
			Self::Tailwind => "tailwind",
		}
	}

	/// The default palette of this theme.
	pub fn default_palette(&self) -> Palette {
		match self {
			Self::Bootstrap => Palette::bootstrap(),
			Self::Material => Palette::material(),
			Self::Tailwind => Palette::tailwind(),
		}
	}
}

impl fmt::Display for ThemeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemeKind {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self> {
		let wanted = s.trim();
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| ThemeError::UnknownTheme(wanted.to_owned()))
	}
}

/// The built-in theme for `kind` with its default palette.
pub fn theme_for(kind: ThemeKind) -> Box<dyn Theme> {
	theme_with_palette(kind, kind.default_palette())
}

/// The built-in theme for `kind` using `palette`.
pub fn theme_with_palette(kind: ThemeKind, palette: Palette) -> Box<dyn Theme> {
	match kind {
		ThemeKind::Bootstrap => Box::new(Bootstrap::with_palette(palette)),
		ThemeKind::Material => Box::new(Material::with_palette(palette)),
		ThemeKind::Tailwind => Box::new(Tailwind::with_palette(palette)),
	}
}

/// One slot of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageSlot {
	Page(u32),
	Gap,
}

/// Pages to show for `current` of `total`: all of them up to seven,
/// otherwise the first, the last and the neighbours of `current` with gaps
/// between.
pub(crate) fn page_slots(current: u32, total: u32) -> Vec<PageSlot> {
	if total <= 7 {
		return (1..=total).map(PageSlot::Page).collect();
	}
	let current = current.clamp(1, total);
	let lo = current.saturating_sub(1).max(2);
	let hi = (current + 1).min(total - 1);

	let mut slots = vec![PageSlot::Page(1)];
	if lo > 2 {
		slots.push(PageSlot::Gap);
	}
	slots.extend((lo..=hi).map(PageSlot::Page));
	if hi < total - 1 {
		slots.push(PageSlot::Gap);
	}
	slots.push(PageSlot::Page(total));
	slots
}

/// `base` with a `page` query parameter.
pub(crate) fn page_href(base: &str, page: u32) -> String {
	let separator = if base.contains('?') { '&' } else { '?' };
	format!("{base}{separator}page={page}")
}

/// `value / max` as a percentage in 0..=100. Non-finite input and a
/// non-positive `max` give 0.
pub(crate) fn percent(value: f64, max: f64) -> f64 {
	if !value.is_finite() || !max.is_finite() || max <= 0.0 {
		return 0.0;
	}
	(value / max * 100.0).clamp(0.0, 100.0)
}

/// Attributes every form control carries: `id`, `name`, `required` and the
/// ARIA links to its help or error text.
pub(crate) fn control_attrs(field: &FieldSpec) -> Vec<Attribute> {
	let described = field.error.is_some() || field.help.is_some();
	vec![
		id(field.control_id()),
		name(&field.name),
		attr::when(field.required, attr::required()),
		attr::when(described, aria("describedby", field.help_id())),
		attr::when(field.error.is_some(), aria("invalid", "true")),
	]
}

/// The error message if set, otherwise the help text.
pub(crate) fn field_note(field: &FieldSpec) -> Option<(bool, String)> {
	match (&field.error, &field.help) {
		(Some(error), _) => Some((true, error.clone())),
		(None, Some(help)) => Some((false, help.clone())),
		(None, None) => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use trellis_core::{Builder, render_to_string};

	#[rstest]
	#[case("bootstrap", ThemeKind::Bootstrap)]
	#[case("Material", ThemeKind::Material)]
	#[case("  TAILWIND ", ThemeKind::Tailwind)]
	fn test_parse_theme_kind(#[case] input: &str, #[case] expected: ThemeKind) {
		assert_eq!(input.parse::<ThemeKind>().unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_theme() {
		let err = "foundation".parse::<ThemeKind>().unwrap_err();
		assert_eq!(err, ThemeError::UnknownTheme("foundation".into()));
		assert!(err.to_string().contains("expected one of"));
	}

	#[rstest]
	fn test_display_round_trips() {
		for kind in ThemeKind::ALL {
			assert_eq!(kind.to_string().parse::<ThemeKind>().unwrap(), kind);
		}
	}

	#[rstest]
	fn test_theme_for_names() {
		let names: Vec<_> = ThemeKind::ALL
			.into_iter()
			.map(|kind| theme_for(kind).name())
			.collect();
		assert_eq!(names, ["bootstrap", "material", "tailwind"]);
	}

	#[rstest]
	#[case(0, 0, vec![])]
	#[case(1, 3, vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)])]
	#[case(1, 10, vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Gap, PageSlot::Page(10)])]
	#[case(5, 10, vec![
		PageSlot::Page(1),
		PageSlot::Gap,
		PageSlot::Page(4),
		PageSlot::Page(5),
		PageSlot::Page(6),
		PageSlot::Gap,
		PageSlot::Page(10),
	])]
	#[case(10, 10, vec![PageSlot::Page(1), PageSlot::Gap, PageSlot::Page(9), PageSlot::Page(10)])]
	#[case(99, 8, vec![PageSlot::Page(1), PageSlot::Gap, PageSlot::Page(7), PageSlot::Page(8)])]
	fn test_page_slots(#[case] current: u32, #[case] total: u32, #[case] expected: Vec<PageSlot>) {
		assert_eq!(page_slots(current, total), expected);
	}

	#[rstest]
	fn test_page_href() {
		assert_eq!(page_href("/shipments", 2), "/shipments?page=2");
		assert_eq!(page_href("/shipments?sort=eta", 3), "/shipments?sort=eta&page=3");
	}

	#[rstest]
	#[case(50.0, 200.0, 25.0)]
	#[case(-1.0, 10.0, 0.0)]
	#[case(20.0, 10.0, 100.0)]
	#[case(5.0, 0.0, 0.0)]
	#[case(f64::NAN, 10.0, 0.0)]
	fn test_percent(#[case] value: f64, #[case] max: f64, #[case] expected: f64) {
		assert_eq!(percent(value, max), expected);
	}

	#[rstest]
	fn test_default_stylesheets_and_head() {
		let theme = theme_for(ThemeKind::Bootstrap);
		let html = render_to_string(&theme.stylesheets().build(&Builder::new()));
		assert!(html.starts_with(r#"<link rel="stylesheet" href="https://"#));
		assert!(html.contains("<style>:root { --trellis-primary: #0d6efd;"));

		let head = theme.head(Head::new().title("x"));
		let page = trellis_core::document("en", head, H::empty());
		let html = render_to_string(&page.build(&Builder::new()));
		assert!(html.contains("--trellis-primary"));
		assert!(html.contains(r#"<link rel="stylesheet""#));
	}

	#[rstest]
	fn test_custom_palette_reaches_stylesheets() {
		let theme = theme_with_palette(ThemeKind::Tailwind, Palette::tailwind().primary("#123456"));
		let html = render_to_string(&theme.stylesheets().build(&Builder::new()));
		assert!(html.contains("--trellis-primary: #123456;"));
	}

	#[rstest]
	fn test_control_attrs() {
		let b = Builder::new();
		let field = FieldSpec::new("qty", "Quantity").required().error("Too many");
		let html = render_to_string(&b.input(control_attrs(&field)));
		assert_eq!(
			html,
			r#"<input id="field-qty" name="qty" required="required" aria-describedby="field-qty-help" aria-invalid="true" />"#
		);
		assert_eq!(field_note(&field), Some((true, "Too many".to_owned())));
	}
}
