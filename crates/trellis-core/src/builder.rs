//! Element builder.
//!
//! [`Builder`] turns a heterogeneous argument list into an [`Element`].
//! Each argument is converted to an [`Arg`], whose variant decides its role:
//!
//! | Argument | Role |
//! |----------|------|
//! | [`Attribute`] | applied to the element |
//! | [`Node`], [`Element`] | appended as a child |
//! | [`H`] | invoked with the same builder, result appended as a child |
//! | strings, numbers, `bool`, `char` | formatted, then appended as an escaped text child |
//! | [`display`]`(value)` | any `Display` type, formatted and escaped the same way |
//!
//! Numbers use their `Display` form: integers in base 10, floats in the
//! shortest form that round-trips (`0.1`, `2.5`, `NaN`, `inf`), booleans as
//! `true` / `false`. The text is escaped exactly like any other string.
//!
//! Types of your own go through [`display`]:
//!
//! ```
//! use std::fmt;
//! use trellis_core::builder::display;
//! use trellis_core::{Builder, render_to_string};
//!
//! struct Reference(u32);
//!
//! impl fmt::Display for Reference {
//! 	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//! 		write!(f, "SHP-{:04}", self.0)
//! 	}
//! }
//!
//! let b = Builder::new();
//! assert_eq!(render_to_string(&b.td(display(Reference(7)))), "<td>SHP-0007</td>");
//! ```
//!
//! Argument lists are tuples (up to 12 members), arrays, `Vec`s or `Option`s
//! of the above, nested freely. Anything else is rejected at compile time:
//!
//! ```compile_fail
//! use trellis_core::Builder;
//!
//! struct Shipment;
//! let b = Builder::new();
//! b.div(Shipment);
//! ```
//!
//! ## Void elements
//!
//! Children passed to a void element (`br`, `img`, `input`, ...) are dropped
//! and a warning is logged. Templates passed to a void element are not
//! invoked at all.
//!
//! ```
//! use trellis_core::{Builder, render_to_string};
//!
//! let b = Builder::new();
//! assert_eq!(render_to_string(&b.br("ignored")), "<br />");
//! ```

mod elements;

use std::borrow::Cow;
use std::fmt;

use crate::attr::Attribute;
use crate::node::{Element, Node, Text};
use crate::template::H;

/// One builder argument, tagged by role.
#[derive(Debug, Clone)]
pub enum Arg {
	/// Applied to the element.
	Attr(Attribute),
	/// Appended as a child.
	Node(Node),
	/// Invoked with the builder; the result is appended as a child.
	Template(H),
	/// Appended as an escaped text child.
	Text(Cow<'static, str>),
}

/// Formats `value` with its `Display` impl into an escaped text argument.
pub fn display(value: impl fmt::Display) -> Arg {
	Arg::Text(Cow::Owned(value.to_string()))
}

/// Passive builder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
	/// Log a warning when children are dropped from a void element or
	/// attributes are passed to a fragment.
	pub warn_on_misuse: bool,
}

impl Default for BuilderConfig {
	fn default() -> Self {
		Self {
			warn_on_misuse: true,
		}
	}
}

/// Stateless element factory.
///
/// Holds no per-render state, so one instance can be shared freely between
/// threads and render passes.
#[derive(Debug, Clone, Default)]
pub struct Builder {
	config: BuilderConfig,
}

impl Builder {
	/// Creates a builder with the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a builder with a custom configuration.
	pub fn with_config(config: BuilderConfig) -> Self {
		Self { config }
	}

	/// Returns the configuration.
	pub fn config(&self) -> &BuilderConfig {
		&self.config
	}

	/// Builds an element with an arbitrary tag name.
	///
	/// This is the primitive behind every named constructor such as
	/// [`Builder::div`].
	pub fn element(&self, tag: impl Into<Cow<'static, str>>, args: impl IntoArgs) -> Node {
		self.build_element(Element::new(tag), args).into_node()
	}

	fn build_element(&self, element: Element, args: impl IntoArgs) -> Element {
		let mut sink = Args {
			builder: self,
			element,
			dropped: 0,
		};
		args.push_args(&mut sink);

		if sink.dropped > 0 && self.config.warn_on_misuse {
			tracing::warn!(
				tag = sink.element.tag_name(),
				dropped = sink.dropped,
				"children passed to a void element were dropped"
			);
		}
		sink.element
	}

	/// Groups the given arguments without a wrapping element.
	///
	/// Attributes have nothing to attach to and are dropped.
	pub fn fragment(&self, args: impl IntoArgs) -> Node {
		let collected = self.build_element(Element::unwrapped(), args);
		if !collected.attrs().is_empty() && self.config.warn_on_misuse {
			tracing::warn!(
				ignored = collected.attrs().len(),
				"attributes passed to a fragment were dropped"
			);
		}
		Node::Fragment(collected.into_children())
	}

	/// An escaped text node.
	pub fn text(&self, content: impl Into<Cow<'static, str>>) -> Node {
		Node::text(content)
	}

	/// A verbatim node. See [`Node::raw`].
	pub fn raw(&self, content: impl Into<Cow<'static, str>>) -> Node {
		Node::raw(content)
	}

	/// A text node whose content is already escaped.
	pub fn pre_escaped(&self, content: impl Into<Cow<'static, str>>) -> Node {
		Node::pre_escaped(content)
	}
}

/// The element under construction, as seen by [`IntoArgs`] impls.
pub struct Args<'b> {
	builder: &'b Builder,
	element: Element,
	dropped: usize,
}

impl Args<'_> {
	/// Routes one argument according to its variant.
	pub fn push(&mut self, arg: Arg) {
		match arg {
			Arg::Attr(attribute) => self.element.apply(attribute),
			Arg::Template(_) | Arg::Node(_) | Arg::Text(_) if self.element.is_void() => {
				self.dropped += 1;
			}
			Arg::Node(node) => self.add(node),
			Arg::Template(template) => self.add(template.build(self.builder)),
			Arg::Text(text) => self.add(Node::Text(Text::new(text))),
		}
	}

	fn add(&mut self, node: Node) {
		if !self.element.push_child(node) {
			self.dropped += 1;
		}
	}
}

/// Values accepted as builder arguments.
pub trait IntoArgs {
	/// Pushes this value's arguments, in order.
	fn push_args(self, args: &mut Args<'_>);
}

impl IntoArgs for Arg {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(self);
	}
}

impl IntoArgs for () {
	fn push_args(self, _args: &mut Args<'_>) {}
}

impl IntoArgs for Attribute {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Attr(self));
	}
}

impl IntoArgs for Node {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Node(self));
	}
}

impl IntoArgs for Element {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Node(Node::Element(self)));
	}
}

impl IntoArgs for H {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Template(self));
	}
}

impl IntoArgs for &H {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Template(self.clone()));
	}
}

impl IntoArgs for String {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Text(Cow::Owned(self)));
	}
}

impl IntoArgs for &String {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Text(Cow::Owned(self.clone())));
	}
}

impl IntoArgs for &str {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Text(Cow::Owned(self.to_owned())));
	}
}

impl IntoArgs for Cow<'static, str> {
	fn push_args(self, args: &mut Args<'_>) {
		args.push(Arg::Text(self));
	}
}

macro_rules! display_args {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoArgs for $ty {
				fn push_args(self, args: &mut Args<'_>) {
					args.push(Arg::Text(Cow::Owned(self.to_string())));
				}
			}
		)*
	};
}

display_args!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl<T: IntoArgs> IntoArgs for Option<T> {
	fn push_args(self, args: &mut Args<'_>) {
		if let Some(value) = self {
			value.push_args(args);
		}
	}
}

impl<T: IntoArgs> IntoArgs for Vec<T> {
	fn push_args(self, args: &mut Args<'_>) {
		for value in self {
			value.push_args(args);
		}
	}
}

impl<T: IntoArgs, const N: usize> IntoArgs for [T; N] {
	fn push_args(self, args: &mut Args<'_>) {
		for value in self {
			value.push_args(args);
		}
	}
}

macro_rules! tuple_args {
	($($name:ident),+) => {
		impl<$($name: IntoArgs),+> IntoArgs for ($($name,)+) {
			#[allow(non_snake_case)]
			fn push_args(self, args: &mut Args<'_>) {
				let ($($name,)+) = self;
				$($name.push_args(args);)+
			}
		}
	};
}

tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
tuple_args!(A, B, C, D, E, F);
tuple_args!(A, B, C, D, E, F, G);
tuple_args!(A, B, C, D, E, F, G, I);
tuple_args!(A, B, C, D, E, F, G, I, J);
tuple_args!(A, B, C, D, E, F, G, I, J, K);
tuple_args!(A, B, C, D, E, F, G, I, J, K, L);
tuple_args!(A, B, C, D, E, F, G, I, J, K, L, M);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attr::{attr, class, href, id};
	use crate::render::render_to_string;
	use rstest::rstest;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_end_to_end_card() {
		let b = Builder::new();
		let node = b.div((
			attr("class", "card"),
			b.h1("Hello & Welcome"),
			"<script>bad</script>",
		));
		assert_eq!(
			render_to_string(&node),
			r#"<div class="card"><h1>Hello &amp; Welcome</h1>&lt;script&gt;bad&lt;/script&gt;</div>"#
		);
	}

	#[rstest]
	fn test_integer_formatting() {
		let b = Builder::new();
		assert_eq!(render_to_string(&b.span(42_i32)), "<span>42</span>");
		assert_eq!(render_to_string(&b.span(-7_i64)), "<span>-7</span>");
		assert_eq!(render_to_string(&b.span(255_u8)), "<span>255</span>");
		assert_eq!(render_to_string(&b.span(usize::MAX)), format!("<span>{}</span>", usize::MAX));
	}

	#[rstest]
	#[case(0.1_f64, "0.1")]
	#[case(2.5_f64, "2.5")]
	#[case(1e21_f64, "1000000000000000000000")]
	#[case(f64::NAN, "NaN")]
	#[case(f64::INFINITY, "inf")]
	fn test_float_formatting(#[case] value: f64, #[case] expected: &str) {
		let b = Builder::new();
		assert_eq!(
			render_to_string(&b.span(value)),
			format!("<span>{expected}</span>")
		);
	}

	#[rstest]
	fn test_bool_and_char_formatting() {
		let b = Builder::new();
		assert_eq!(
			render_to_string(&b.p((true, ' ', false, '<'))),
			"<p>true false&lt;</p>"
		);
	}

	#[rstest]
	fn test_nested_collections_and_options() {
		let b = Builder::new();
		let items = vec!["a", "b"];
		let node = b.ul((
			id("list"),
			items.into_iter().map(|i| b.li(i)).collect::<Vec<_>>(),
			None::<Node>,
			Some(b.li("c")),
			[b.li("d"), b.li("e")],
		));
		assert_eq!(
			render_to_string(&node),
			r#"<ul id="list"><li>a</li><li>b</li><li>c</li><li>d</li><li>e</li></ul>"#
		);
	}

	#[rstest]
	fn test_attributes_anywhere_in_args() {
		let b = Builder::new();
		let node = b.a(("Home", href("/"), class("nav"), class("active")));
		assert_eq!(
			render_to_string(&node),
			r#"<a href="/" class="nav active">Home</a>"#
		);
	}

	#[rstest]
	fn test_void_element_drops_children_but_keeps_attributes() {
		let b = Builder::new();
		let node = b.img((attr("src", "/a.png"), "caption", b.span("x")));
		assert_eq!(render_to_string(&node), r#"<img src="/a.png" />"#);
	}

	#[rstest]
	fn test_void_element_does_not_invoke_templates() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let template = H::new(move |b| {
			counter.fetch_add(1, Ordering::SeqCst);
			b.span("x")
		});
		let b = Builder::new();
		let node = b.input((attr("type", "text"), template.clone()));
		assert_eq!(render_to_string(&node), r#"<input type="text" />"#);
		assert_eq!(calls.load(Ordering::SeqCst), 0);

		let node = b.div(template);
		assert_eq!(render_to_string(&node), "<div><span>x</span></div>");
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_fragment_drops_attributes() {
		let b = Builder::new();
		let node = b.fragment((class("ignored"), b.b("x"), "y"));
		assert_eq!(render_to_string(&node), "<b>x</b>y");
	}

	#[rstest]
	fn test_custom_element() {
		let b = Builder::new();
		let node = b.element("status-badge", (attr("level", "3"), "ok"));
		assert_eq!(
			render_to_string(&node),
			r#"<status-badge level="3">ok</status-badge>"#
		);
	}

	#[rstest]
	#[case("x><script>alert(1)</script")]
	#[case("my tag")]
	#[case("1st")]
	#[case("")]
	fn test_invalid_tag_keeps_only_children(#[case] tag: &'static str) {
		let b = Builder::new();
		let node = b.element(tag, (id("gone"), "a<b", b.em("c")));
		assert_eq!(render_to_string(&node), "a&lt;b<em>c</em>");
	}

	#[rstest]
	#[case(crate::attr::attr("x\" onmouseover=\"alert(1)", "v"))]
	#[case(crate::attr::data("x\" onmouseover=\"alert(1)", "v"))]
	#[case(crate::attr::aria("label onfocus", "v"))]
	#[case(crate::attr::boolean("hidden><script"))]
	#[case(crate::attr::merge("class=", ["a"]))]
	#[case(crate::attr::when(true, crate::attr::data("a/b", "v")))]
	fn test_invalid_attribute_names_are_dropped(#[case] attribute: Attribute) {
		let b = Builder::new();
		let node = b.div((id("kept"), attribute, "t"));
		assert_eq!(render_to_string(&node), r#"<div id="kept">t</div>"#);
	}

	#[rstest]
	fn test_display_argument_is_escaped() {
		struct Range(u8, u8);

		impl fmt::Display for Range {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{} < x < {}", self.0, self.1)
			}
		}

		let b = Builder::new();
		let node = b.p(("Bounds: ", display(Range(1, 9))));
		assert_eq!(render_to_string(&node), "<p>Bounds: 1 &lt; x &lt; 9</p>");
	}

	#[rstest]
	fn test_builder_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Builder>();
		assert_send_sync::<Node>();
	}
}
