//! Deferred templates.
//!
//! An [`H`] is a function from a [`Builder`] to a [`Node`]. Nothing is built
//! until [`H::build`] is called, so templates can be composed, parameterized
//! and passed around before any markup exists.
//!
//! ## Example
//!
//! ```
//! use trellis_core::template::{either, for_each, seq, H};
//! use trellis_core::{Builder, render_to_string};
//!
//! fn greeting(name: &str) -> H {
//! 	let name = name.to_owned();
//! 	H::new(move |b| b.p(("Hello, ", name.clone())))
//! }
//!
//! let page = seq([
//! 	either(true, H::text("signed in"), H::text("guest")),
//! 	for_each(["Ada", "Linus"], |name| greeting(name)),
//! ]);
//!
//! assert_eq!(
//! 	render_to_string(&page.build(&Builder::new())),
//! 	"signed in<p>Hello, Ada</p><p>Hello, Linus</p>"
//! );
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::builder::Builder;
use crate::node::Node;

type TemplateFn = dyn Fn(&Builder) -> Node + Send + Sync;

/// A template: a deferred `Builder -> Node` function.
///
/// Cloning is cheap (the function is reference counted). Templates must be
/// `Send + Sync` so they can be shared across render passes on different
/// threads.
#[derive(Clone)]
pub struct H {
	render: Arc<TemplateFn>,
}

impl fmt::Debug for H {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("H").field("render", &"<closure>").finish()
	}
}

impl H {
	/// Wraps a function.
	pub fn new<F>(render: F) -> Self
	where
		F: Fn(&Builder) -> Node + Send + Sync + 'static,
	{
		Self {
			render: Arc::new(render),
		}
	}

	/// Materializes the node.
	pub fn build(&self, builder: &Builder) -> Node {
		(self.render)(builder)
	}

	/// A template that yields a copy of `node` each time.
	pub fn from_node(node: Node) -> Self {
		Self::new(move |_| node.clone())
	}

	/// A template producing an escaped text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::from_node(Node::text(content))
	}

	/// A template producing a verbatim node.
	pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::from_node(Node::raw(content))
	}

	/// A template producing nothing.
	pub fn empty() -> Self {
		Self::new(|_| Node::empty())
	}

	/// Post-processes the produced node.
	pub fn map<F>(self, f: F) -> Self
	where
		F: Fn(Node) -> Node + Send + Sync + 'static,
	{
		Self::new(move |b| f(self.build(b)))
	}
}

impl<F> From<F> for H
where
	F: Fn(&Builder) -> Node + Send + Sync + 'static,
{
	fn from(render: F) -> Self {
		Self::new(render)
	}
}

/// Combines templates into one producing a fragment, in order.
pub fn seq(templates: impl IntoIterator<Item = H>) -> H {
	let templates: Vec<H> = templates.into_iter().collect();
	H::new(move |b| Node::Fragment(templates.iter().map(|t| t.build(b)).collect()))
}

/// `template` when `condition` holds, nothing otherwise.
pub fn when(condition: bool, template: H) -> H {
	either(condition, template, H::empty())
}

/// Selects one branch. Only the selected template is ever invoked.
pub fn either(condition: bool, then: H, otherwise: H) -> H {
	if condition { then } else { otherwise }
}

/// Maps each item to a template, preserving order.
pub fn map_each<T, F>(items: impl IntoIterator<Item = T>, f: F) -> Vec<H>
where
	F: FnMut(T) -> H,
{
	items.into_iter().map(f).collect()
}

/// Maps each item to a template and sequences the results.
pub fn for_each<T, F>(items: impl IntoIterator<Item = T>, f: F) -> H
where
	F: FnMut(T) -> H,
{
	seq(map_each(items, f))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render::render_to_string;
	use rstest::{fixture, rstest};
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[fixture]
	fn builder() -> Builder {
		Builder::new()
	}

	fn counting(label: &'static str, calls: Arc<AtomicUsize>) -> H {
		H::new(move |b| {
			calls.fetch_add(1, Ordering::SeqCst);
			b.span(label)
		})
	}

	#[rstest]
	fn test_either_false_never_invokes_then(builder: Builder) {
		let then_calls = Arc::new(AtomicUsize::new(0));
		let else_calls = Arc::new(AtomicUsize::new(0));
		let template = either(
			false,
			counting("a", then_calls.clone()),
			counting("b", else_calls.clone()),
		);

		let html = render_to_string(&template.build(&builder));
		let expected = render_to_string(&counting("b", Arc::new(AtomicUsize::new(0))).build(&builder));

		assert_eq!(html, expected);
		assert_eq!(then_calls.load(Ordering::SeqCst), 0);
		assert_eq!(else_calls.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_when_false_renders_nothing(builder: Builder) {
		let template = when(false, H::text("hidden"));
		assert!(template.build(&builder).is_empty());
	}

	#[rstest]
	fn test_seq_preserves_order_without_wrapper(builder: Builder) {
		let template = seq([H::text("1"), H::raw("<hr>"), H::text("3")]);
		assert_eq!(render_to_string(&template.build(&builder)), "1<hr>3");
	}

	#[rstest]
	fn test_map_each_preserves_input_order(builder: Builder) {
		let templates = map_each([3, 1, 2, 1], |n| H::new(move |b| b.li(n)));
		assert_eq!(templates.len(), 4);
		let html = render_to_string(&seq(templates).build(&builder));
		assert_eq!(html, "<li>3</li><li>1</li><li>2</li><li>1</li>");
	}

	#[rstest]
	fn test_templates_are_lazy(builder: Builder) {
		let calls = Arc::new(AtomicUsize::new(0));
		let template = seq([counting("x", calls.clone()), counting("y", calls.clone())]);
		assert_eq!(calls.load(Ordering::SeqCst), 0);
		template.build(&builder);
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[rstest]
	fn test_map_wraps_output(builder: Builder) {
		let template = H::text("inner").map(|node| Node::element("em").child(node).into_node());
		assert_eq!(render_to_string(&template.build(&builder)), "<em>inner</em>");
	}

	#[rstest]
	fn test_closure_converts_into_template(builder: Builder) {
		let template: H = (|b: &Builder| b.b("bold")).into();
		assert_eq!(render_to_string(&template.build(&builder)), "<b>bold</b>");
	}
}
