//! HTML attributes.
//!
//! An [`Attribute`] is applied to an element while it is being constructed.
//! Values are escaped for attribute context when the attribute is created,
//! so the renderer writes them as-is.
//!
//! ## Example
//!
//! ```
//! use trellis_core::attr::{class, data, disabled, id, merge, when};
//! use trellis_core::Builder;
//!
//! let b = Builder::new();
//! let node = b.button((
//! 	id("save"),
//! 	class("btn"),
//! 	merge("class", ["btn-primary"]),
//! 	data("action", "save"),
//! 	when(true, disabled()),
//! 	"Save",
//! ));
//! assert_eq!(
//! 	trellis_core::render_to_string(&node),
//! 	r#"<button id="save" class="btn btn-primary" data-action="save" disabled="disabled">Save</button>"#
//! );
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use crate::escape::escape_attribute;

/// Attribute names, usually static strings.
///
/// Names are never escaped. An element drops any attribute whose name fails
/// [`is_valid_attribute_name`].
pub type AttrName = Cow<'static, str>;

/// Returns whether `name` can be written as an attribute name.
///
/// Rejects the empty name, whitespace, control characters, and any of
/// `" ' < > / =`.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace()
				|| c.is_control()
				|| matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
		})
}

/// A value applied to an element at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
	/// `name="value"`. The value is stored already escaped.
	Valued {
		/// Attribute name.
		name: AttrName,
		/// Escaped value.
		value: String,
	},
	/// A boolean attribute, rendered as `name="name"`.
	Boolean {
		/// Attribute name.
		name: AttrName,
	},
	/// Applies `inner` only when `guard` is true.
	Conditional {
		/// Evaluated once, at construction time.
		guard: bool,
		/// The attribute to apply.
		inner: Box<Attribute>,
	},
	/// Space-joins `fragments` onto any existing value of `name`.
	Merged {
		/// Attribute name.
		name: AttrName,
		/// Escaped fragments, in order.
		fragments: Vec<String>,
	},
}

impl Attribute {
	/// Creates a valued attribute, escaping `value`.
	pub fn valued(name: impl Into<AttrName>, value: impl AsRef<str>) -> Self {
		Self::Valued {
			name: name.into(),
			value: escape_attribute(value.as_ref()).into_owned(),
		}
	}

	/// Creates a boolean attribute.
	pub fn boolean(name: impl Into<AttrName>) -> Self {
		Self::Boolean { name: name.into() }
	}

	/// Wraps `self` so it only applies when `guard` holds.
	pub fn when(self, guard: bool) -> Self {
		Self::Conditional {
			guard,
			inner: Box::new(self),
		}
	}

	/// Creates a merging attribute. Empty fragments are skipped.
	pub fn merged<I, S>(name: impl Into<AttrName>, fragments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::Merged {
			name: name.into(),
			fragments: fragments
				.into_iter()
				.filter(|f| !f.as_ref().is_empty())
				.map(|f| escape_attribute(f.as_ref()).into_owned())
				.collect(),
		}
	}

	/// Returns the attribute name, looking through conditionals.
	pub fn name(&self) -> &str {
		match self {
			Self::Valued { name, .. } | Self::Boolean { name } | Self::Merged { name, .. } => name,
			Self::Conditional { inner, .. } => inner.name(),
		}
	}
}

/// Any attribute, `name="value"`.
pub fn attr(name: impl Into<AttrName>, value: impl AsRef<str>) -> Attribute {
	Attribute::valued(name, value)
}

/// Any boolean attribute.
pub fn boolean(name: impl Into<AttrName>) -> Attribute {
	Attribute::boolean(name)
}

/// Applies `attribute` only when `guard` is true.
pub fn when(guard: bool, attribute: Attribute) -> Attribute {
	attribute.when(guard)
}

/// Space-joins `fragments` onto any existing value of `name`.
pub fn merge<I, S>(name: impl Into<AttrName>, fragments: I) -> Attribute
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	Attribute::merged(name, fragments)
}

/// `class`, merged with any class already present.
///
/// The value may itself hold several space separated classes.
pub fn class(value: impl AsRef<str>) -> Attribute {
	Attribute::merged("class", [value])
}

/// Several classes at once, merged with any class already present.
pub fn classes<I, S>(values: I) -> Attribute
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	Attribute::merged("class", values)
}

/// `style`, appended to any inline style already present with `; `.
pub fn style_merge(declaration: impl AsRef<str>) -> Attribute {
	let declaration = declaration.as_ref().trim().trim_end_matches(';');
	Attribute::merged("style", [format!("{declaration};")])
}

/// `data-{name}`.
pub fn data(name: impl AsRef<str>, value: impl AsRef<str>) -> Attribute {
	Attribute::valued(format!("data-{}", name.as_ref()), value)
}

/// `aria-{name}`.
pub fn aria(name: impl AsRef<str>, value: impl AsRef<str>) -> Attribute {
	Attribute::valued(format!("aria-{}", name.as_ref()), value)
}

macro_rules! valued_attributes {
	($($(#[$doc:meta])* $fn:ident => $name:literal),* $(,)?) => {
		$(
			$(#[$doc])*
			pub fn $fn(value: impl AsRef<str>) -> Attribute {
				Attribute::valued($name, value)
			}
		)*
	};
}

macro_rules! numeric_attributes {
	($($fn:ident => $name:literal),* $(,)?) => {
		$(
			#[doc = concat!("`", $name, "`, formatted in base 10.")]
			pub fn $fn(value: impl Display) -> Attribute {
				Attribute::valued($name, value.to_string())
			}
		)*
	};
}

macro_rules! boolean_attributes {
	($($fn:ident => $name:literal),* $(,)?) => {
		$(
			#[doc = concat!("The `", $name, "` boolean attribute.")]
			pub fn $fn() -> Attribute {
				Attribute::boolean($name)
			}
		)*
	};
}

valued_attributes! {
	/// `id`.
	id => "id",
	/// `style`, replacing any inline style already present.
	style => "style",
	/// `href`.
	href => "href",
	/// `src`.
	src => "src",
	/// `alt`.
	alt => "alt",
	/// `title`.
	title => "title",
	/// `name`.
	name => "name",
	/// `value`.
	value => "value",
	/// `type`.
	type_ => "type",
	/// `placeholder`.
	placeholder => "placeholder",
	/// `rel`.
	rel => "rel",
	/// `role`.
	role => "role",
	/// `target`.
	target => "target",
	/// `for`.
	for_ => "for",
	/// `lang`.
	lang => "lang",
	/// `charset`.
	charset => "charset",
	/// `content`.
	content => "content",
	/// `action`.
	action => "action",
	/// `method`.
	method => "method",
	/// `scope`.
	scope => "scope",
	/// `autocomplete`.
	autocomplete => "autocomplete",
}

numeric_attributes! {
	width => "width",
	height => "height",
	colspan => "colspan",
	rowspan => "rowspan",
	tabindex => "tabindex",
	rows => "rows",
	min => "min",
	max => "max",
}

boolean_attributes! {
	disabled => "disabled",
	checked => "checked",
	selected => "selected",
	required => "required",
	readonly => "readonly",
	hidden => "hidden",
	multiple => "multiple",
	autofocus => "autofocus",
	open => "open",
	defer => "defer",
}
