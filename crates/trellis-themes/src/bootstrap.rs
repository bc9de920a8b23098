//! Bootstrap 5 markup

use trellis_core::attr::{
	Attribute, aria, class, for_, href, id, placeholder, role, rows, scope, selected, style, type_,
	value, when,
};
use trellis_core::template::H;

use crate::component::{Crumb, FieldSpec, NavItem, SelectOption, Size, TableData, Variant};
use crate::palette::Palette;
use crate::theme::{PageSlot, Theme, control_attrs, field_note, page_href, page_slots, percent};

const STYLESHEETS: &[&str] =
	&["https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"];

/// Bootstrap 5 theme.
#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
	palette: Palette,
}

impl Bootstrap {
	/// Bootstrap with its default palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Bootstrap with custom colors.
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
				class("mb-3"),
				b.label((for_(&control_id), class("form-label"), label.clone())),
				&control,
				note.as_ref().map(|(is_error, text)| {
					b.div((
						id(&help_id),
						class(if *is_error {
							"invalid-feedback d-block"
						} else {
							"form-text"
						}),
						text.clone(),
					))
				}),
			))
		})
	}
}

fn invalid_class(field: &FieldSpec) -> &'static str {
	if field.error.is_some() { "is-invalid" } else { "" }
}

impl Theme for Bootstrap {
	fn name(&self) -> &'static str {
		"bootstrap"
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
				class(format!("btn btn-{}", variant.as_str())),
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
				class(format!("btn btn-{}", variant.as_str())),
				role("button"),
				label.clone(),
			))
		})
	}

	fn card(&self, title: &str, body: H) -> H {
		let title = title.to_owned();
		H::new(move |b| {
			b.div((
				class("card"),
				b.div((
					class("card-body"),
					b.h5((class("card-title"), title.clone())),
					&body,
				)),
			))
		})
	}

	fn badge(&self, label: &str, variant: Variant) -> H {
		let label = label.to_owned();
		H::new(move |b| {
			b.span((
				class(format!("badge text-bg-{}", variant.as_str())),
				label.clone(),
			))
		})
	}

	fn alert(&self, message: &str, variant: Variant) -> H {
		let message = message.to_owned();
		H::new(move |b| {
			b.div((
				class(format!("alert alert-{}", variant.as_str())),
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
				class("form-control"),
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
				class("form-select"),
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
				class("form-control"),
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
		let name = match size {
			Size::Xs => "container-fluid".to_owned(),
			other => format!("container-{}", other.as_str()),
		};
		H::new(move |b| b.div((class(&name), &content)))
	}

	fn grid(&self, columns: usize, cells: Vec<H>) -> H {
		let columns = columns.clamp(1, 12);
		H::new(move |b| {
			b.div((
				class(format!("row row-cols-{columns} g-3")),
				cells
					.iter()
					.map(|cell| b.div((class("col"), cell)))
					.collect::<Vec<_>>(),
			))
		})
	}

	fn sidebar(&self, side: H, main: H) -> H {
		H::new(move |b| {
			b.div((
				class("row"),
				b.aside((class("col-md-3"), &side)),
				b.main((class("col-md-9"), &main)),
			))
		})
	}

	fn nav(&self, brand: &str, items: &[NavItem]) -> H {
		let brand = brand.to_owned();
		let items = items.to_vec();
		H::new(move |b| {
			b.nav((
				class("navbar navbar-expand-lg bg-body-tertiary"),
				b.div((
					class("container-fluid"),
					b.a((class("navbar-brand"), href("/"), brand.clone())),
					b.ul((
						class("navbar-nav"),
						items
							.iter()
							.map(|item| {
								b.li((
									class("nav-item"),
									b.a((
										class("nav-link"),
										class(if item.active { "active" } else { "" }),
										when(item.active, aria("current", "page")),
										href(&item.href),
										item.label.clone(),
									)),
								))
							})
							.collect::<Vec<_>>(),
					)),
				)),
			))
		})
	}

	fn breadcrumbs(&self, crumbs: &[Crumb]) -> H {
		let crumbs = crumbs.to_vec();
		H::new(move |b| {
			b.nav((
				aria("label", "breadcrumb"),
				b.ol((
					class("breadcrumb"),
					crumbs
						.iter()
						.map(|crumb| match &crumb.href {
							Some(target) => b.li((
								class("breadcrumb-item"),
								b.a((href(target), crumb.label.clone())),
							)),
							None => b.li((
								class("breadcrumb-item active"),
								aria("current", "page"),
								crumb.label.clone(),
							)),
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
			let edge = |label: &'static str, target: u32, enabled: bool| {
				b.li((
					class("page-item"),
					class(if enabled { "" } else { "disabled" }),
					b.a((class("page-link"), href(page_href(&base, target)), label)),
				))
			};
			b.nav((
				aria("label", "Pagination"),
				b.ul((
					class("pagination"),
					edge("Previous", current.saturating_sub(1).max(1), current > 1),
					slots
						.iter()
						.map(|slot| match *slot {
							PageSlot::Page(page) => b.li((
								class("page-item"),
								class(if page == current { "active" } else { "" }),
								b.a((
									class("page-link"),
									href(page_href(&base, page)),
									when(page == current, aria("current", "page")),
									page,
								)),
							)),
							PageSlot::Gap => b.li((
								class("page-item disabled"),
								b.span((class("page-link"), "…")),
							)),
						})
						.collect::<Vec<_>>(),
					edge("Next", (current + 1).min(total), current < total),
				)),
			))
		})
	}

	fn table(&self, data: &TableData) -> H {
		let caption = data.caption.clone();
		let headers = data.headers.clone();
		let rows = data.padded_rows();
		H::new(move |b| {
			b.table((
				class("table table-striped"),
				caption.as_ref().map(|c| b.caption(c)),
				b.thead(b.tr(
					headers
						.iter()
						.map(|h| b.th((scope("col"), h)))
						.collect::<Vec<_>>(),
				)),
				b.tbody(
					rows.iter()
						.map(|row| b.tr(row.iter().map(|cell| b.td(cell)).collect::<Vec<_>>()))
						.collect::<Vec<_>>(),
				),
			))
		})
	}

	fn list(&self, items: Vec<H>) -> H {
		H::new(move |b| {
			b.ul((
				class("list-group"),
				items
					.iter()
					.map(|item| b.li((class("list-group-item"), item)))
					.collect::<Vec<_>>(),
			))
		})
	}

	fn progress(&self, current: f64, max: f64, variant: Variant) -> H {
		let pct = percent(current, max);
		H::new(move |b| {
			b.div((
				class("progress"),
				role("progressbar"),
				aria("valuenow", format!("{pct:.0}")),
				aria("valuemin", "0"),
				aria("valuemax", "100"),
				b.div((
					class(format!("progress-bar bg-{}", variant.as_str())),
					style(format!("width: {pct:.0}%")),
				)),
			))
		})
	}
}
