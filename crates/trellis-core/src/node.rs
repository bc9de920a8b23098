//! Renderable node types.
//!
//! [`Node`] is the core abstraction for all markup produced by trellis.
//! It forms a tree: every child is owned by exactly one parent, and nothing
//! in a node refers to the output sink, so one tree can be rendered any
//! number of times, to any number of sinks, from any number of threads.
//!
//! ## Example
//!
//! ```
//! use trellis_core::{Element, Node, attr::class, render_to_string};
//!
//! let node = Element::new("div")
//! 	.with(class("card"))
//! 	.child(Element::new("h1").child(Node::text("Hello & Welcome")))
//! 	.child(Node::text("<script>bad</script>"))
//! 	.into_node();
//!
//! assert_eq!(
//! 	render_to_string(&node),
//! 	r#"<div class="card"><h1>Hello &amp; Welcome</h1>&lt;script&gt;bad&lt;/script&gt;</div>"#
//! );
//! ```

use std::borrow::Cow;

use crate::attr::{AttrName, Attribute, is_valid_attribute_name};
use crate::escape::escape_lossy;

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Returns whether `tag` names a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Returns whether `tag` can be written as a tag name: an ASCII letter
/// followed by ASCII alphanumerics or `-`.
pub fn is_valid_tag_name(tag: &str) -> bool {
	let mut chars = tag.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A unit of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A tagged element with attributes and children.
	Element(Element),
	/// A text leaf, escaped at render time unless flagged as already escaped.
	Text(Text),
	/// Content written verbatim, with no escaping at all.
	Raw(Cow<'static, str>),
	/// An ordered group of nodes with no wrapping tag.
	Fragment(Vec<Node>),
}

impl Node {
	/// Creates an element node with no attributes or children.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Element {
		Element::new(tag)
	}

	/// Creates a text node that will be escaped when rendered.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(Text::new(content))
	}

	/// Creates a text node from arbitrary bytes.
	///
	/// Invalid UTF-8 is replaced with U+FFFD and the result is escaped
	/// immediately.
	pub fn text_lossy(bytes: &[u8]) -> Self {
		Self::Text(Text::pre_escaped(escape_lossy(bytes)))
	}

	/// Creates a text node whose content is already escaped.
	///
	/// The caller vouches that `content` is safe markup text.
	pub fn pre_escaped(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(Text::pre_escaped(content))
	}

	/// Creates a node that is written out verbatim.
	///
	/// Nothing is escaped. Never pass untrusted input here.
	pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(content.into())
	}

	/// Creates a fragment from the given nodes.
	pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
		Self::Fragment(children.into_iter().collect())
	}

	/// The empty fragment. Renders nothing.
	pub fn empty() -> Self {
		Self::Fragment(Vec::new())
	}

	/// Returns whether this node renders no output at all.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Element(_) => false,
			Self::Text(text) => text.content.is_empty(),
			Self::Raw(content) => content.is_empty(),
			Self::Fragment(children) => children.iter().all(Node::is_empty),
		}
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl From<Text> for Node {
	fn from(text: Text) -> Self {
		Self::Text(text)
	}
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
	content: Cow<'static, str>,
	escaped: bool,
}

impl Text {
	/// Text that will be escaped when rendered.
	pub fn new(content: impl Into<Cow<'static, str>>) -> Self {
		Self {
			content: content.into(),
			escaped: false,
		}
	}

	/// Text that is already escaped and is written as-is.
	pub fn pre_escaped(content: impl Into<Cow<'static, str>>) -> Self {
		Self {
			content: content.into(),
			escaped: true,
		}
	}

	/// The stored payload.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Whether the payload is already escaped.
	pub fn is_escaped(&self) -> bool {
		self.escaped
	}
}

/// An HTML element.
///
/// Attributes keep their first-insertion order; that order is the order in
/// which they are rendered.
///
/// Names that cannot be written safely are dropped with a warning: an
/// invalid tag renders its children without a wrapper, and an invalid
/// attribute name is not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Vec<(AttrName, String)>,
	children: Vec<Node>,
	is_void: bool,
}

impl Element {
	/// Creates an element. Void-ness is derived from the tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let mut tag = tag.into();
		if !is_valid_tag_name(&tag) {
			tracing::warn!(tag = %tag.escape_debug(), "invalid tag name dropped");
			tag = Cow::Borrowed("");
		}
		let is_void = is_void_element(&tag);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// A tagless element collecting attributes and children for a fragment.
	pub(crate) fn unwrapped() -> Self {
		Self {
			tag: Cow::Borrowed(""),
			attrs: Vec::new(),
			children: Vec::new(),
			is_void: false,
		}
	}

	/// Applies an attribute, consuming and returning the element.
	pub fn with(mut self, attribute: Attribute) -> Self {
		self.apply(attribute);
		self
	}

	/// Adds a child, consuming and returning the element.
	///
	/// Children given to a void element are dropped; see [`Element::push_child`].
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.push_child(child.into());
		self
	}

	/// Adds several children.
	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
		for child in children {
			self.push_child(child);
		}
		self
	}

	/// Applies an attribute in place.
	///
	/// - valued and boolean attributes replace an existing value of the same
	///   name, keeping its position;
	/// - merged attributes append to an existing value with a single space;
	/// - conditional attributes apply their inner attribute only when the
	///   guard holds.
	pub fn apply(&mut self, attribute: Attribute) {
		if !is_valid_attribute_name(attribute.name()) {
			tracing::warn!(
				tag = %self.tag,
				attribute = %attribute.name().escape_debug(),
				"invalid attribute name dropped"
			);
			return;
		}
		match attribute {
			Attribute::Valued { name, value } => self.set(name, value),
			Attribute::Boolean { name } => {
				let value = name.to_string();
				self.set(name, value);
			}
			Attribute::Conditional { guard, inner } => {
				if guard {
					self.apply(*inner);
				}
			}
			Attribute::Merged { name, fragments } => {
				if fragments.is_empty() {
					return;
				}
				let joined = fragments.join(" ");
				match self.attrs.iter_mut().find(|(n, _)| *n == name) {
					Some((_, existing)) if existing.is_empty() => *existing = joined,
					Some((_, existing)) => {
						existing.push(' ');
						existing.push_str(&joined);
					}
					None => self.attrs.push((name, joined)),
				}
			}
		}
	}

	fn set(&mut self, name: AttrName, value: String) {
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some((_, existing)) => *existing = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Adds a child in place.
	///
	/// Void elements cannot have children: the child is dropped and `false`
	/// is returned. Otherwise returns `true`.
	pub fn push_child(&mut self, child: Node) -> bool {
		if self.is_void {
			return false;
		}
		self.children.push(child);
		true
	}

	/// The tag name. Empty when the name given to [`Element::new`] was
	/// invalid.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Whether the element renders without its own tags.
	pub fn is_unwrapped(&self) -> bool {
		self.tag.is_empty()
	}

	/// The attributes, with escaped values, in render order.
	pub fn attrs(&self) -> &[(AttrName, String)] {
		&self.attrs
	}

	/// Looks up the escaped value of an attribute.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// The child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Wraps the element in a [`Node`].
	pub fn into_node(self) -> Node {
		Node::Element(self)
	}

	pub(crate) fn into_children(self) -> Vec<Node> {
		self.children
	}
}
