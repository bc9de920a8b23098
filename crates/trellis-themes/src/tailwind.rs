//! Tailwind CSS utility-class markup

use trellis_core::attr::{
	Attribute, aria, class, for_, href, id, placeholder, role, rows, scope, selected, style, type_,
	value, when,
};
use trellis_core::template::H;

use crate::component::{Crumb, FieldSpec, NavItem, SelectOption, Size, TableData, Variant};
use crate::palette::Palette;
use crate::theme::{PageSlot, Theme, control_attrs, field_note, page_href, page_slots, percent};

const STYLESHEETS: &[&str] = &["https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css"];

const CONTROL: &str = "block w-full rounded-md border border-gray-300 px-3 py-2 shadow-sm focus:border-blue-500 focus:ring-blue-500";

/// Solid background and text color utilities for a variant.
fn solid(variant: Variant) -> &'static str {
	match variant {
		Variant::Primary => "bg-blue-600 text-white",
		Variant::Secondary => "bg-gray-600 text-white",
		Variant::Success => "bg-green-600 text-white",
		Variant::Danger => "bg-red-600 text-white",
		Variant::Warning => "bg-yellow-500 text-gray-900",
		Variant::Info => "bg-cyan-600 text-white",
		Variant::Light => "bg-gray-100 text-gray-900",
		Variant::Dark => "bg-gray-800 text-white",
	}
}

/// Pale background, dark text and border utilities for a variant.
fn soft(variant: Variant) -> &'static str {
	match variant {
		Variant::Primary => "bg-blue-50 text-blue-800 border-blue-200",
		Variant::Secondary => "bg-gray-50 text-gray-800 border-gray-200",
		Variant::Success => "bg-green-50 text-green-800 border-green-200",
		Variant::Danger => "bg-red-50 text-red-800 border-red-200",
		Variant::Warning => "bg-yellow-50 text-yellow-800 border-yellow-200",
		Variant::Info => "bg-cyan-50 text-cyan-800 border-cyan-200",
		Variant::Light => "bg-white text-gray-700 border-gray-100",
		Variant::Dark => "bg-gray-700 text-gray-100 border-gray-900",
	}
}

/// Tailwind theme.
#[derive(Debug, Clone)]
pub struct Tailwind {
	palette: Palette,
}

impl Default for Tailwind {
	fn default() -> Self {
		Self::with_palette(Palette::tailwind())
	}
}

impl Tailwind {
	/// Tailwind with its default palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Tailwind with custom colors.
	pub fn with_palette(palette: Palette) -> Self {
		Self { palette }
	}

	fn field(field: &FieldSpec, control: H) -> H {
		let label = field.label.clone();
		let control_id = field.control_id();
		let help_id = field.help_id();
		let note = field_note(field);
		H::new(move |b| {
			b.div((
				class("mb-4"),
				b.label((
					for_(&control_id),
					class("mb-1 block text-sm font-medium text-gray-700"),
					label.clone(),
				)),
				&control,
				note.as_ref().map(|(is_error, text)| {
					b.p((
						id(&help_id),
						class("mt-1 text-sm"),
						class(if *is_error { "text-red-600" } else { "text-gray-500" }),
						text.clone(),
					))
				}),
			))
		})
	}
}

fn invalid_class(field: &FieldSpec) -> &'static str {
	if field.error.is_some() { "border-red-500" } else { "" }
}

impl Theme for Tailwind {
	fn name(&self) -> &'static str {
		"tailwind"
	}

	fn palette(&self) -> Palette {
		self.palette.clone()
	}

	fn stylesheet_urls(&self) -> &'static [&'static str] {
		STYLESHEETS
	}

	fn button(&self, label: &str, variant: Variant, attrs: Vec<Attribute>) -> H {
		let label = label.to_owned();
		H::new(move |b| {
			b.button((
				type_("button"),
				class("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold shadow-sm hover:opacity-90"),
				class(solid(variant)),
				attrs.clone(),
				label.clone(),
			))
		})
	}

	fn link_button(&self, label: &str, target: &str, variant: Variant) -> H {
		let label = label.to_owned();
		let target = target.to_owned();
		H::new(move |b| {
			b.a((
				href(&target),
				class("inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold no-underline"),
				class(solid(variant)),
				role("button"),
				label.clone(),
			))
		})
	}

	fn card(&self, title: &str, body: H) -> H {
		let title = title.to_owned();
		H::new(move |b| {
			b.div((
				class("overflow-hidden rounded-lg bg-white shadow"),
				b.div((
					class("px-4 py-5 sm:p-6"),
					b.h3((class("mb-2 text-lg font-medium text-gray-900"), title.clone())),
					&body,
				)),
			))
		})
	}

	fn badge(&self, label: &str, variant: Variant) -> H {
		let label = label.to_owned();
		H::new(move |b| {
			b.span((
				class("inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium"),
				class(solid(variant)),
				label.clone(),
			))
		})
	}

	fn alert(&self, message: &str, variant: Variant) -> H {
		let message = message.to_owned();
		H::new(move |b| {
			b.div((
				class("rounded-md border p-4"),
				class(soft(variant)),
				role("alert"),
				message.clone(),
			))
		})
	}

	fn form_input(&self, field: &FieldSpec) -> H {
		let attrs = control_attrs(field);
		let input_type = field.input_type.clone();
		let hint = field.placeholder.clone();
		let initial = field.value.clone();
		let invalid = invalid_class(field);
		let control = H::new(move |b| {
			b.input((
				type_(&input_type),
				class(CONTROL),
				class(invalid),
				attrs.clone(),
				hint.as_ref().map(placeholder),
				initial.as_ref().map(value),
			))
		});
		Self::field(field, control)
	}

	fn form_select(&self, field: &FieldSpec, options: &[SelectOption]) -> H {
		let attrs = control_attrs(field);
		let options = options.to_vec();
		let invalid = invalid_class(field);
		let control = H::new(move |b| {
			b.select((
				class(CONTROL),
				class("bg-white"),
				class(invalid),
				attrs.clone(),
				options
					.iter()
					.map(|o| {
						b.option((
							value(&o.value),
							when(o.selected, selected()),
							o.label.clone(),
						))
					})
					.collect::<Vec<_>>(),
			))
		});
		Self::field(field, control)
	}

	fn form_textarea(&self, field: &FieldSpec, row_count: u32) -> H {
		let attrs = control_attrs(field);
		let hint = field.placeholder.clone();
		let initial = field.value.clone();
		let invalid = invalid_class(field);
		let control = H::new(move |b| {
			b.textarea((
				class(CONTROL),
				class(invalid),
				attrs.clone(),
				rows(row_count),
				hint.as_ref().map(placeholder),
				initial.clone(),
			))
		});
		Self::field(field, control)
	}

	fn container(&self, size: Size, content: H) -> H {
		let width = match size {
			Size::Xs => "w-full",
			Size::Sm => "max-w-screen-sm",
			Size::Md => "max-w-screen-md",
			Size::Lg => "max-w-screen-lg",
			Size::Xl => "max-w-screen-xl",
		};
		H::new(move |b| b.div((class("mx-auto px-4"), class(width), &content)))
	}

	fn grid(&self, columns: usize, cells: Vec<H>) -> H {
		let columns = columns.clamp(1, 12);
		H::new(move |b| {
			b.div((
				class(format!("grid grid-cols-1 gap-4 md:grid-cols-{columns}")),
				cells.iter().map(|cell| b.div(cell)).collect::<Vec<_>>(),
			))
		})
	}

	fn sidebar(&self, side: H, main: H) -> H {
		H::new(move |b| {
			b.div((
				class("flex gap-6"),
				b.aside((class("w-64 shrink-0"), &side)),
				b.main((class("min-w-0 flex-1"), &main)),
			))
		})
	}

	fn nav(&self, brand: &str, items: &[NavItem]) -> H {
		let brand = brand.to_owned();
		let items = items.to_vec();
		H::new(move |b| {
			b.nav((
				class("flex items-center justify-between bg-gray-800 px-4 py-3"),
				b.a((href("/"), class("text-lg font-semibold text-white"), brand.clone())),
				b.ul((
					class("flex space-x-4"),
					items
						.iter()
						.map(|item| {
							b.li(b.a((
								href(&item.href),
								class("rounded-md px-3 py-2 text-sm font-medium"),
								class(if item.active {
									"bg-gray-900 text-white"
								} else {
									"text-gray-300 hover:bg-gray-700 hover:text-white"
								}),
								when(item.active, aria("current", "page")),
								item.label.clone(),
							)))
						})
						.collect::<Vec<_>>(),
				)),
			))
		})
	}

	fn breadcrumbs(&self, crumbs: &[Crumb]) -> H {
		let crumbs = crumbs.to_vec();
		H::new(move |b| {
			let last = crumbs.len().saturating_sub(1);
			b.nav((
				aria("label", "Breadcrumb"),
				b.ol((
					class("flex items-center space-x-2 text-sm text-gray-500"),
					crumbs
						.iter()
						.enumerate()
						.map(|(index, crumb)| {
							let separator = (index < last).then(|| b.span((aria("hidden", "true"), "/")));
							match &crumb.href {
								Some(target) => b.li((
									b.a((href(target), class("hover:text-gray-700"), crumb.label.clone())),
									separator,
								)),
								None => b.li((
									aria("current", "page"),
									class("font-medium text-gray-900"),
									crumb.label.clone(),
									separator,
								)),
							}
						})
						.collect::<Vec<_>>(),
				)),
			))
		})
	}

	fn pagination(&self, current: u32, total: u32, base_href: &str) -> H {
		if total == 0 {
			return H::empty();
		}
		let current = current.clamp(1, total);
		let base = base_href.to_owned();
		let slots = page_slots(current, total);
		H::new(move |b| {
			let link = |label: String, target: u32, state: &'static str, is_current: bool| {
				b.a((
					href(page_href(&base, target)),
					class("border px-3 py-1 text-sm"),
					class(state),
					when(is_current, aria("current", "page")),
					label,
				))
			};
			b.nav((
				class("inline-flex -space-x-px"),
				aria("label", "Pagination"),
				link(
					"Previous".to_owned(),
					current.saturating_sub(1).max(1),
					if current > 1 { "" } else { "pointer-events-none opacity-50" },
					false,
				),
				slots
					.iter()
					.map(|slot| match *slot {
						PageSlot::Page(page) if page == current => {
							link(page.to_string(), page, "bg-blue-600 text-white", true)
						}
						PageSlot::Page(page) => link(page.to_string(), page, "bg-white", false),
						PageSlot::Gap => b.span((class("border px-3 py-1 text-sm"), "…")),
					})
					.collect::<Vec<_>>(),
				link(
					"Next".to_owned(),
					(current + 1).min(total),
					if current < total { "" } else { "pointer-events-none opacity-50" },
					false,
				),
			))
		})
	}

	fn table(&self, data: &TableData) -> H {
		let caption = data.caption.clone();
		let headers = data.headers.clone();
		let rows = data.padded_rows();
		H::new(move |b| {
			b.table((
				class("min-w-full divide-y divide-gray-200"),
				caption
					.as_ref()
					.map(|c| b.caption((class("py-2 text-left text-sm text-gray-500"), c))),
				b.thead((
					class("bg-gray-50"),
					b.tr(
						headers
							.iter()
							.map(|h| {
								b.th((
									scope("col"),
									class("px-4 py-2 text-left text-xs font-medium uppercase text-gray-500"),
									h,
								))
							})
							.collect::<Vec<_>>(),
					),
				)),
				b.tbody((
					class("divide-y divide-gray-200 bg-white"),
					rows.iter()
						.map(|row| {
							b.tr(
								row.iter()
									.map(|cell| b.td((class("whitespace-nowrap px-4 py-2 text-sm"), cell)))
									.collect::<Vec<_>>(),
							)
						})
						.collect::<Vec<_>>(),
				)),
			))
		})
	}

	fn list(&self, items: Vec<H>) -> H {
		H::new(move |b| {
			b.ul((
				class("divide-y divide-gray-200"),
				items
					.iter()
					.map(|item| b.li((class("py-2"), item)))
					.collect::<Vec<_>>(),
			))
		})
	}

	fn progress(&self, current: f64, max: f64, variant: Variant) -> H {
		let pct = percent(current, max);
		H::new(move |b| {
			b.div((
				class("h-2.5 w-full rounded-full bg-gray-200"),
				role("progressbar"),
				aria("valuenow", format!("{pct:.0}")),
				aria("valuemin", "0"),
				aria("valuemax", "100"),
				b.div((
					class("h-2.5 rounded-full"),
					class(solid(variant)),
					style(format!("width: {pct:.0}%")),
				)),
			))
		})
	}
}
