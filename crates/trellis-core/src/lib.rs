//! # Trellis Core
//!
//! Type-safe, composable HTML generation with a streaming renderer.
//!
//! ## Architecture
//!
//! - [`escape`]: HTML and attribute escaping
//! - [`node`]: the [`Node`] tree (element, text, raw, fragment)
//! - [`attr`]: [`Attribute`] values and their factories
//! - [`builder`]: the stateless [`Builder`] and its argument dispatch
//! - [`template`]: deferred [`H`] templates and composition helpers
//! - [`render`]: the streaming renderer
//! - [`cache`]: single-flight memoization of built nodes
//! - [`page`]: full documents with a `<head>`
//!
//! ## Example
//!
//! ```
//! use trellis_core::attr::class;
//! use trellis_core::template::{for_each, H};
//! use trellis_core::{Builder, render_template};
//!
//! struct Item {
//! 	name: String,
//! 	qty: u32,
//! }
//!
//! fn inventory(items: Vec<Item>) -> H {
//! 	let rows = for_each(items, |item| H::new(move |b| b.li((item.name.clone(), ": ", item.qty))));
//! 	H::new(move |b| b.ul((class("inventory"), &rows)))
//! }
//!
//! let mut out = Vec::new();
//! let template = inventory(vec![Item { name: "Bolts <M8>".into(), qty: 120 }]);
//! render_template(&template, &Builder::new(), &mut out).unwrap();
//! assert_eq!(
//! 	String::from_utf8(out).unwrap(),
//! 	r#"<ul class="inventory"><li>Bolts &lt;M8&gt;: 120</li></ul>"#
//! );
//! ```

pub mod attr;
pub mod builder;
pub mod cache;
pub mod escape;
pub mod node;
pub mod page;
pub mod render;
pub mod template;

pub use attr::Attribute;
pub use builder::{Arg, Builder, BuilderConfig, IntoArgs, display};
pub use cache::{CacheStats, NodeCache};
pub use node::{Element, Node, Text};
pub use page::{Head, document};
pub use render::{
	RenderError, RenderOptions, RenderResult, render, render_template, render_to_string,
	render_with,
};
pub use template::H;

/// A fragment of the given nodes.
pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
	Node::fragment(children)
}

/// An escaped text node.
pub fn text(content: impl Into<std::borrow::Cow<'static, str>>) -> Node {
	Node::text(content)
}

/// A node written verbatim. Never pass untrusted input.
pub fn raw(content: impl Into<std::borrow::Cow<'static, str>>) -> Node {
	Node::raw(content)
}

/// A text node whose content is already escaped.
pub fn pre_escaped(content: impl Into<std::borrow::Cow<'static, str>>) -> Node {
	Node::pre_escaped(content)
}

/// Commonly used items.
pub mod prelude {
	pub use crate::attr::{self, Attribute};
	pub use crate::builder::{Builder, IntoArgs, display};
	pub use crate::node::{Element, Node};
	pub use crate::render::{render, render_to_string};
	pub use crate::template::{self, H, either, for_each, map_each, seq};
}
