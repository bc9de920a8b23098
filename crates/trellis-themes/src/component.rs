//! Vocabulary shared by every theme

use trellis_core::template::H;

/// Color variant for components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
	/// Primary color
	#[default]
	Primary,
	/// Secondary color
	Secondary,
	/// Success color
	Success,
	/// Danger color
	Danger,
	/// Warning color
	Warning,
	/// Info color
	Info,
	/// Light color
	Light,
	/// Dark color
	Dark,
}

impl Variant {
	/// Every variant, in declaration order.
	pub const ALL: [Variant; 8] = [
		Self::Primary,
		Self::Secondary,
		Self::Success,
		Self::Danger,
		Self::Warning,
		Self::Info,
		Self::Light,
		Self::Dark,
	];

	/// Convert variant to CSS class string
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::Success => "success",
			Self::Danger => "danger",
			Self::Warning => "warning",
			Self::Info => "info",
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

/// Size variant for components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
	/// Extra small
	Xs,
	/// Small
	Sm,
	/// Medium
	#[default]
	Md,
	/// Large
	Lg,
	/// Extra large
	Xl,
}

impl Size {
	/// Convert size to CSS class string
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Xs => "xs",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
		}
	}
}

/// One entry of a navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
	/// Link text
	pub label: String,
	/// Link target
	pub href: String,
	/// Whether this entry is the current page
	pub active: bool,
}

impl NavItem {
	/// An inactive entry.
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
			active: false,
		}
	}

	/// Marks the entry as the current page.
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}
}

/// One step of a breadcrumb trail.
///
/// A crumb without `href` is the current page and renders as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
	/// Text
	pub label: String,
	/// Link target, if any
	pub href: Option<String>,
}

impl Crumb {
	/// A linked crumb.
	pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: Some(href.into()),
		}
	}

	/// The current page.
	pub fn current(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: None,
		}
	}
}

/// An `<option>` of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	/// Submitted value
	pub value: String,
	/// Displayed text
	pub label: String,
	/// Whether the option starts selected
	pub selected: bool,
}

impl SelectOption {
	/// An unselected option.
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			selected: false,
		}
	}

	/// Marks the option as selected.
	pub fn selected(mut self) -> Self {
		self.selected = true;
		self
	}
}

/// Describes a labelled form control.
///
/// The control id is derived from the name as `field-<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
	/// Form field name
	pub name: String,
	/// Label text
	pub label: String,
	/// `type` of an `<input>`
	pub input_type: String,
	/// Placeholder text
	pub placeholder: Option<String>,
	/// Initial value
	pub value: Option<String>,
	/// Help text below the control
	pub help: Option<String>,
	/// Validation message; marks the control invalid when set
	pub error: Option<String>,
	/// Whether the field is required
	pub required: bool,
}

impl FieldSpec {
	/// A text field.
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			input_type: "text".to_owned(),
			placeholder: None,
			value: None,
			help: None,
			error: None,
			required: false,
		}
	}

	/// Sets the input type.
	pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
		self.input_type = input_type.into();
		self
	}

	/// Sets the placeholder.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Sets the initial value.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Sets the help text.
	pub fn help(mut self, help: impl Into<String>) -> Self {
		self.help = Some(help.into());
		self
	}

	/// Sets a validation message.
	pub fn error(mut self, error: impl Into<String>) -> Self {
		self.error = Some(error.into());
		self
	}

	/// Marks the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// The control id.
	pub fn control_id(&self) -> String {
		format!("field-{}", self.name)
	}

	/// The id of the help or error text.
	pub fn help_id(&self) -> String {
		format!("field-{}-help", self.name)
	}
}

/// Rows and headers of a data table.
///
/// Cells are templates so a theme's badges or links can sit inside them.
#[derive(Debug, Clone, Default)]
pub struct TableData {
	/// Caption text
	pub caption: Option<String>,
	/// Column headers
	pub headers: Vec<String>,
	/// Row cells
	pub rows: Vec<Vec<H>>,
}

impl TableData {
	/// A table with the given headers and no rows.
	pub fn new<I, S>(headers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			caption: None,
			headers: headers.into_iter().map(Into::into).collect(),
			rows: Vec::new(),
		}
	}

	/// Sets the caption.
	pub fn caption(mut self, caption: impl Into<String>) -> Self {
		self.caption = Some(caption.into());
		self
	}

	/// Appends a row of templates.
	pub fn row(mut self, cells: impl IntoIterator<Item = H>) -> Self {
		self.rows.push(cells.into_iter().collect());
		self
	}

	/// Appends a row of plain text cells.
	pub fn text_row<I, S>(self, cells: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.row(cells.into_iter().map(|cell| H::text(Into::<String>::into(cell))))
	}

	/// The number of columns: the longest of the header and every row.
	pub fn column_count(&self) -> usize {
		self.rows
			.iter()
			.map(Vec::len)
			.chain(std::iter::once(self.headers.len()))
			.max()
			.unwrap_or(0)
	}

	/// Each row padded with empty cells up to [`column_count`](Self::column_count).
	pub fn padded_rows(&self) -> Vec<Vec<H>> {
		let columns = self.column_count();
		self.rows
			.iter()
			.map(|row| {
				let mut row = row.clone();
				row.resize_with(columns, H::empty);
				row
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use trellis_core::{Builder, render_to_string};

	#[rstest]
	fn test_variant_as_str() {
		let names: Vec<_> = Variant::ALL.iter().map(Variant::as_str).collect();
		assert_eq!(
			names,
			[
				"primary",
				"secondary",
				"success",
				"danger",
				"warning",
				"info",
				"light",
				"dark"
			]
		);
	}

	#[rstest]
	#[case(Size::Xs, "xs")]
	#[case(Size::Sm, "sm")]
	#[case(Size::Md, "md")]
	#[case(Size::Lg, "lg")]
	#[case(Size::Xl, "xl")]
	fn test_size_as_str(#[case] size: Size, #[case] expected: &str) {
		assert_eq!(size.as_str(), expected);
	}

	#[rstest]
	fn test_field_ids() {
		let field = FieldSpec::new("email", "Email").input_type("email").required();
		assert_eq!(field.control_id(), "field-email");
		assert_eq!(field.help_id(), "field-email-help");
		assert!(field.required);
		assert_eq!(field.input_type, "email");
	}

	#[rstest]
	fn test_ragged_rows_are_padded() {
		let table = TableData::new(["A", "B"])
			.text_row(["1"])
			.text_row(["1", "2", "3"]);
		assert_eq!(table.column_count(), 3);

		let b = Builder::new();
		let padded = table.padded_rows();
		assert!(padded.iter().all(|row| row.len() == 3));
		assert_eq!(render_to_string(&padded[0][2].build(&b)), "");
		assert_eq!(render_to_string(&padded[1][2].build(&b)), "3");
	}

	#[rstest]
	fn test_empty_table_has_no_columns() {
		assert_eq!(TableData::default().column_count(), 0);
	}
}
