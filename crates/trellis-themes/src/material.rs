//! Material Components for the web (MDC) markup
//!
//! Variants have no direct MDC counterpart; they are expressed with
//! `trellis-tone-*` classes that read the palette variables.

use trellis_core::attr::{
	Attribute, aria, class, for_, href, id, placeholder, role, rows, scope, selected, style,
	type_, value, when,
};
use trellis_core::template::H;

use crate::component::{Crumb, FieldSpec, NavItem, SelectOption, Size, TableData, Variant};
use crate::palette::Palette;
use crate::theme::{PageSlot, Theme, control_attrs, field_note, page_href, page_slots, percent};

const STYLESHEETS: &[&str] = &[
	"https://unpkg.com/material-components-web@14.0.0/dist/material-components-web.min.css",
	"https://fonts.googleapis.com/css2?family=Roboto:wght@400;500&display=swap",
];

fn tone(variant: Variant) -> String {
	format!("trellis-tone-{}", variant.as_str())
}

/// Material theme.
#[derive(Debug, Clone)]
pub struct Material {
	palette: Palette,
}

impl Default for Material {
	fn default() -> Self {
		Self::with_palette(Palette::material())
	}
}

impl Material {
	/// Material with its default palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Material with custom colors.
	pub fn with_palette(palette: Palette) -> Self {
		Self { palette }
	}

	/// Wraps a control in an MDC text field with a floating label and a
	/// helper line.
	fn text_field(field: &FieldSpec, modifier: &'static str, control: H) -> H {
		let label = field.label.clone();
		let label_id = format!("{}-label", field.control_id());
		let help_id = field.help_id();
		let note = field_note(field);
		let invalid = field.error.is_some();
		H::new(move |b| {
			b.div((
				class("trellis-field"),
				b.label((
					class("mdc-text-field mdc-text-field--filled"),
					class(modifier),
					class(if invalid { "mdc-text-field--invalid" } else { "" }),
					b.span((class("mdc-floating-label"), id(&label_id), label.clone())),
					&control,
					b.span(class("mdc-line-ripple")),
				)),
				note.as_ref().map(|(is_error, text)| {
					b.div((
						class("mdc-text-field-helper-line"),
						b.div((
							id(&help_id),
							class("mdc-text-field-helper-text mdc-text-field-helper-text--persistent"),
							class(if *is_error {
								"mdc-text-field-helper-text--validation-msg"
							} else {
								""
							}),
							text.clone(),
						)),
					))
				}),
			))
		})
	}
}

impl Theme for Material {
	fn name(&self) -> &'static str {
		"material"
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
				class("mdc-button mdc-button--raised"),
				class(tone(variant)),
				attrs.clone(),
				b.span(class("mdc-button__ripple")),
				b.span((class("mdc-button__label"), label.clone())),
			))
		})
	}

	fn link_button(&self, label: &str, target: &str, variant: Variant) -> H {
		let label = label.to_owned();
		let target = target.to_owned();
		H::new(move |b| {
			b.a((
				class("mdc-button mdc-button--unelevated"),
				class(tone(variant)),
				href(&target),
				b.span(class("mdc-button__ripple")),
				b.span((class("mdc-button__label"), label.clone())),
			))
		})
	}

	fn card(&self, title: &str, body: H) -> H {
		let title = title.to_owned();
		H::new(move |b| {
			b.div((
				class("mdc-card mdc-card--outlined"),
				b.div((
					class("trellis-card__content"),
					b.h2((class("mdc-typography--headline6"), title.clone())),
					b.div((class("mdc-typography--body2"), &body)),
				)),
			))
		})
	}

	fn badge(&self, label: &str, variant: Variant) -> H {
		let label = label.to_owned();
		H::new(move |b| {
			b.span((
				class("mdc-evolution-chip"),
				class(tone(variant)),
				role("status"),
				b.span((class("mdc-evolution-chip__text-label"), label.clone())),
			))
		})
	}

	fn alert(&self, message: &str, variant: Variant) -> H {
		let message = message.to_owned();
		H::new(move |b| {
			b.div((
				class("mdc-banner mdc-banner--open"),
				class(tone(variant)),
				role("alert"),
				b.div((
					class("mdc-banner__content"),
					b.div((class("mdc-banner__text"), message.clone())),
				)),
			))
		})
	}

	fn form_input(&self, field: &FieldSpec) -> H {
		let attrs = control_attrs(field);
		let labelled_by = format!("{}-label", field.control_id());
		let input_type = field.input_type.clone();
		let hint = field.placeholder.clone();
		let initial = field.value.clone();
		let control = H::new(move |b| {
			b.input((
				class("mdc-text-field__input"),
				type_(&input_type),
				attrs.clone(),
				aria("labelledby", &labelled_by),
				hint.as_ref().map(placeholder),
				initial.as_ref().map(value),
			))
		});
		Self::text_field(field, "", control)
	}

	fn form_select(&self, field: &FieldSpec, options: &[SelectOption]) -> H {
		let attrs = control_attrs(field);
		let label = field.label.clone();
		let control_id = field.control_id();
		let options = options.to_vec();
		let invalid = field.error.is_some();
		let note = field_note(field);
		let help_id = field.help_id();
		H::new(move |b| {
			b.div((
				class("trellis-field mdc-select mdc-select--filled"),
				class(if invalid { "mdc-select--invalid" } else { "" }),
				b.label((
					class("mdc-floating-label mdc-floating-label--float-above"),
					for_(&control_id),
					label.clone(),
				)),
				b.select((
					class("mdc-select__native-control"),
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
				)),
				note.as_ref().map(|(_, text)| {
					b.p((
						id(&help_id),
						class("mdc-select-helper-text mdc-select-helper-text--persistent"),
						text.clone(),
					))
				}),
			))
		})
	}

	fn form_textarea(&self, field: &FieldSpec, row_count: u32) -> H {
		let attrs = control_attrs(field);
		let labelled_by = format!("{}-label", field.control_id());
		let hint = field.placeholder.clone();
		let initial = field.value.clone();
		let control = H::new(move |b| {
			b.span((
				class("mdc-text-field__resizer"),
				b.textarea((
					class("mdc-text-field__input"),
					attrs.clone(),
					aria("labelledby", &labelled_by),
					rows(row_count),
					hint.as_ref().map(placeholder),
					initial.clone(),
				)),
			))
		});
		Self::text_field(field, "mdc-text-field--textarea", control)
	}

	fn container(&self, size: Size, content: H) -> H {
		let width = match size {
			Size::Xs => "trellis-container--fluid".to_owned(),
			other => format!("trellis-container--{}", other.as_str()),
		};
		H::new(move |b| b.div((class("mdc-layout-grid"), class(&width), &content)))
	}

	fn grid(&self, columns: usize, cells: Vec<H>) -> H {
		let span = 12 / columns.clamp(1, 12);
		H::new(move |b| {
			b.div((
				class("mdc-layout-grid"),
				b.div((
					class("mdc-layout-grid__inner"),
					cells
						.iter()
						.map(|cell| {
							b.div((
								class(format!("mdc-layout-grid__cell mdc-layout-grid__cell--span-{span}")),
								cell,
							))
						})
						.collect::<Vec<_>>(),
				)),
			))
		})
	}

	fn sidebar(&self, side: H, main: H) -> H {
		H::new(move |b| {
			b.div((
				class("trellis-drawer-layout"),
				b.aside((
					class("mdc-drawer"),
					b.div((class("mdc-drawer__content"), &side)),
				)),
				b.main((class("mdc-drawer-app-content"), &main)),
			))
		})
	}

	fn nav(&self, brand: &str, items: &[NavItem]) -> H {
		let brand = brand.to_owned();
		let items = items.to_vec();
		H::new(move |b| {
			b.header((
				class("mdc-top-app-bar"),
				b.div((
					class("mdc-top-app-bar__row"),
					b.section((
						class("mdc-top-app-bar__section mdc-top-app-bar__section--align-start"),
						b.span((class("mdc-top-app-bar__title"), brand.clone())),
					)),
					b.nav((
						class("mdc-top-app-bar__section mdc-top-app-bar__section--align-end"),
						role("tablist"),
						items
							.iter()
							.map(|item| {
								b.a((
									class("mdc-tab"),
									class(if item.active { "mdc-tab--active" } else { "" }),
									role("tab"),
									aria("selected", if item.active { "true" } else { "false" }),
									href(&item.href),
									b.span((class("mdc-tab__text-label"), item.label.clone())),
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
				class("trellis-breadcrumbs mdc-typography--body2"),
				aria("label", "Breadcrumb"),
				b.ol(
					crumbs
						.iter()
						.map(|crumb| match &crumb.href {
							Some(target) => b.li(b.a((href(target), crumb.label.clone()))),
							None => b.li((aria("current", "page"), crumb.label.clone())),
						})
						.collect::<Vec<_>>(),
				),
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
			let arrow = |label: &'static str, icon: &'static str, target: u32, enabled: bool| {
				b.a((
					class("mdc-icon-button material-icons"),
					href(page_href(&base, target)),
					aria("label", label),
					when(!enabled, aria("disabled", "true")),
					icon,
				))
			};
			b.nav((
				class("trellis-pagination"),
				aria("label", "Pagination"),
				arrow("Previous", "chevron_left", current.saturating_sub(1).max(1), current > 1),
				slots
					.iter()
					.map(|slot| match *slot {
						PageSlot::Page(page) => b.a((
							class("mdc-button"),
							class(if page == current {
								"mdc-button--unelevated"
							} else {
								""
							}),
							href(page_href(&base, page)),
							when(page == current, aria("current", "page")),
							b.span((class("mdc-button__label"), page)),
						)),
						PageSlot::Gap => b.span((class("trellis-pagination__gap"), "…")),
					})
					.collect::<Vec<_>>(),
				arrow("Next", "chevron_right", (current + 1).min(total), current < total),
			))
		})
	}

	fn table(&self, data: &TableData) -> H {
		let caption = data.caption.clone();
		let headers = data.headers.clone();
		let rows = data.padded_rows();
		H::new(move |b| {
			b.div((
				class("mdc-data-table"),
				b.div((
					class("mdc-data-table__table-container"),
					b.table((
						class("mdc-data-table__table"),
						caption.as_ref().map(|c| b.caption(c)),
						b.thead(b.tr((
							class("mdc-data-table__header-row"),
							headers
								.iter()
								.map(|h| {
									b.th((
										class("mdc-data-table__header-cell"),
										role("columnheader"),
										scope("col"),
										h,
									))
								})
								.collect::<Vec<_>>(),
						))),
						b.tbody((
							class("mdc-data-table__content"),
							rows.iter()
								.map(|row| {
									b.tr((
										class("mdc-data-table__row"),
										row.iter()
											.map(|cell| b.td((class("mdc-data-table__cell"), cell)))
											.collect::<Vec<_>>(),
									))
								})
								.collect::<Vec<_>>(),
						)),
					)),
				)),
			))
		})
	}

	fn list(&self, items: Vec<H>) -> H {
		H::new(move |b| {
			b.ul((
				class("mdc-list"),
				items
					.iter()
					.map(|item| {
						b.li((
							class("mdc-list-item"),
							b.span((class("mdc-list-item__text"), item)),
						))
					})
					.collect::<Vec<_>>(),
			))
		})
	}

	fn progress(&self, current: f64, max: f64, variant: Variant) -> H {
		let fraction = percent(current, max) / 100.0;
		H::new(move |b| {
			b.div((
				class("mdc-linear-progress"),
				class(tone(variant)),
				role("progressbar"),
				aria("valuemin", "0"),
				aria("valuemax", "1"),
				aria("valuenow", format!("{fraction:.2}")),
				b.div((
					class("mdc-linear-progress__bar mdc-linear-progress__primary-bar"),
					style(format!("transform: scaleX({fraction:.2})")),
					b.span(class("mdc-linear-progress__bar-inner")),
				)),
			))
		})
	}
}
