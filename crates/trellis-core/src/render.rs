//! Streaming renderer.
//!
//! [`render`] walks a [`Node`] tree once, in document order, writing
//! directly to any [`std::io::Write`] sink. No intermediate document string
//! is built.
//!
//! ## Failure semantics
//!
//! The first write error aborts the walk and is returned as
//! [`RenderError::Sink`]. Bytes already handed to the sink are **not**
//! retracted; callers that need all-or-nothing output should render into a
//! buffer first. Since trees are never mutated by rendering, retrying means
//! calling [`render`] again with a fresh sink.

use std::io::{self, BufWriter, Write};

use thiserror::Error;

use crate::builder::Builder;
use crate::escape::write_escaped;
use crate::node::Node;
use crate::template::H;

/// Errors raised while rendering.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RenderError {
	/// The output sink failed.
	#[error("output sink failed after {written} bytes: {source}")]
	Sink {
		/// Bytes accepted by the sink before the failure.
		written: u64,
		/// The underlying I/O error.
		#[source]
		source: io::Error,
	},
}

impl RenderError {
	/// Bytes written before the failure.
	pub fn written(&self) -> u64 {
		match self {
			Self::Sink { written, .. } => *written,
		}
	}
}

/// Result type for rendering.
pub type RenderResult<T = ()> = Result<T, RenderError>;

/// Renderer options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
	/// When non-zero, writes go through a `BufWriter` of this capacity,
	/// flushed before returning.
	pub buffer_capacity: usize,
}

impl RenderOptions {
	/// Unbuffered rendering.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the write buffer capacity.
	pub fn buffer_capacity(mut self, capacity: usize) -> Self {
		self.buffer_capacity = capacity;
		self
	}
}

/// Counts bytes accepted by the wrapped sink.
struct Counting<'w, W: Write + ?Sized> {
	inner: &'w mut W,
	written: u64,
}

impl<W: Write + ?Sized> Write for Counting<'_, W> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let n = self.inner.write(buf)?;
		self.written += n as u64;
		Ok(n)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.inner.flush()
	}
}

enum Step<'a> {
	Enter(&'a Node),
	Close(&'a str),
}

fn walk<W: Write + ?Sized>(root: &Node, out: &mut W) -> io::Result<()> {
	let mut stack = vec![Step::Enter(root)];

	while let Some(step) = stack.pop() {
		match step {
			Step::Close(tag) => {
				out.write_all(b"</")?;
				out.write_all(tag.as_bytes())?;
				out.write_all(b">")?;
			}
			Step::Enter(Node::Element(el)) if el.is_unwrapped() => {
				stack.extend(el.child_nodes().iter().rev().map(Step::Enter));
			}
			Step::Enter(Node::Element(el)) => {
				out.write_all(b"<")?;
				out.write_all(el.tag_name().as_bytes())?;
				for (name, value) in el.attrs() {
					out.write_all(b" ")?;
					out.write_all(name.as_bytes())?;
					out.write_all(b"=\"")?;
					out.write_all(value.as_bytes())?;
					out.write_all(b"\"")?;
				}
				if el.is_void() {
					out.write_all(b" />")?;
					continue;
				}
				out.write_all(b">")?;
				stack.push(Step::Close(el.tag_name()));
				stack.extend(el.child_nodes().iter().rev().map(Step::Enter));
			}
			Step::Enter(Node::Text(text)) => {
				if text.is_escaped() {
					out.write_all(text.content().as_bytes())?;
				} else {
					write_escaped(out, text.content())?;
				}
			}
			Step::Enter(Node::Raw(content)) => out.write_all(content.as_bytes())?,
			Step::Enter(Node::Fragment(children)) => {
				stack.extend(children.iter().rev().map(Step::Enter));
			}
		}
	}

	Ok(())
}

/// Renders `node` to `sink`.
///
/// Returns the first write failure. Partial output is left in the sink.
#[tracing::instrument(level = "trace", skip_all)]
pub fn render<W: Write + ?Sized>(node: &Node, sink: &mut W) -> RenderResult {
	let mut counting = Counting {
		inner: sink,
		written: 0,
	};
	let result = walk(node, &mut counting);
	finish(result, counting.written)
}

/// Renders `node` to `sink` using `options`.
///
/// With a buffer, [`RenderError::Sink`] still counts the bytes the sink
/// itself accepted, including those of a failed final flush. Output still
/// buffered when a write fails is discarded.
pub fn render_with<W: Write + ?Sized>(
	node: &Node,
	sink: &mut W,
	options: &RenderOptions,
) -> RenderResult {
	if options.buffer_capacity == 0 {
		return render(node, sink);
	}

	let counting = Counting {
		inner: sink,
		written: 0,
	};
	let mut buffered = BufWriter::with_capacity(options.buffer_capacity, counting);
	let result = walk(node, &mut buffered).and_then(|()| buffered.flush());
	let (counting, _) = buffered.into_parts();
	finish(result, counting.written)
}

fn finish(result: io::Result<()>, written: u64) -> RenderResult {
	result.map_err(|source| {
		tracing::debug!(written, error = %source, "render aborted");
		RenderError::Sink { written, source }
	})
}

/// Invokes `template` with `builder` and renders the resulting node.
pub fn render_template<W: Write + ?Sized>(
	template: &H,
	builder: &Builder,
	sink: &mut W,
) -> RenderResult {
	render(&template.build(builder), sink)
}

/// Renders `node` into a new `String`.
pub fn render_to_string(node: &Node) -> String {
	let mut buf = Vec::new();
	// Writing into a Vec cannot fail.
	let _ = render(node, &mut buf);
	String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attr::{attr, class};
	use crate::node::Element;
	use rstest::rstest;

	struct FailAfter {
		remaining: usize,
		out: Vec<u8>,
	}

	impl Write for FailAfter {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			if self.remaining == 0 {
				return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
			}
			let n = buf.len().min(self.remaining);
			self.out.extend_from_slice(&buf[..n]);
			self.remaining -= n;
			Ok(n)
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[rstest]
	fn test_render_simple_element() {
		let node = Element::new("div").into_node();
		assert_eq!(render_to_string(&node), "<div></div>");
	}

	#[rstest]
	fn test_render_void_element() {
		let node = Element::new("br").into_node();
		assert_eq!(render_to_string(&node), "<br />");
	}

	#[rstest]
	fn test_render_element_with_children() {
		let node = Element::new("div")
			.child(Node::text("Hello, "))
			.child(Element::new("strong").child(Node::text("World")))
			.into_node();
		assert_eq!(
			render_to_string(&node),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[rstest]
	fn test_render_attributes_in_insertion_order() {
		let node = Element::new("a")
			.with(attr("href", "/x?a=1&b=2"))
			.with(class("link"))
			.into_node();
		assert_eq!(
			render_to_string(&node),
			r#"<a href="/x?a=1&amp;b=2" class="link"></a>"#
		);
	}

	#[rstest]
	fn test_render_text_variants() {
		assert_eq!(render_to_string(&Node::text("a<b")), "a&lt;b");
		assert_eq!(render_to_string(&Node::pre_escaped("a&lt;b")), "a&lt;b");
		assert_eq!(render_to_string(&Node::raw("<b>x</b>")), "<b>x</b>");
	}

	#[rstest]
	fn test_render_nested_fragments() {
		let node = Node::fragment([
			Node::text("One"),
			Node::fragment([Node::text("Two"), Node::empty()]),
			Node::text("Three"),
		]);
		assert_eq!(render_to_string(&node), "OneTwoThree");
	}

	#[rstest]
	fn test_render_deep_tree_does_not_overflow() {
		let mut node = Node::text("leaf");
		for _ in 0..100_000 {
			node = Element::new("span").child(node).into_node();
		}
		let html = render_to_string(&node);
		assert!(html.starts_with("<span><span>"));
		assert!(html.ends_with("</span></span>"));
		// Dropping a very deep tree recurses; keep that off the test thread.
		std::thread::Builder::new()
			.stack_size(256 * 1024 * 1024)
			.spawn(move || drop(node))
			.unwrap()
			.join()
			.unwrap();
	}

	#[rstest]
	fn test_sink_failure_aborts_and_reports_progress() {
		let node = Element::new("div")
			.child(Node::text("0123456789"))
			.into_node();
		let mut sink = FailAfter {
			remaining: 8,
			out: Vec::new(),
		};
		let err = render(&node, &mut sink).unwrap_err();
		assert_eq!(err.written(), 8);
		assert_eq!(sink.out, b"<div>012");
		assert!(matches!(err, RenderError::Sink { ref source, .. } if source.kind() == io::ErrorKind::BrokenPipe));
	}

	#[rstest]
	#[case(8, 8)]
	#[case(0, 0)]
	fn test_buffered_flush_failure_counts_sink_bytes(
		#[case] accepted: usize,
		#[case] expected: u64,
	) {
		let node = Element::new("div")
			.child(Node::text("0123456789"))
			.into_node();
		let mut sink = FailAfter {
			remaining: accepted,
			out: Vec::new(),
		};
		let err = render_with(&node, &mut sink, &RenderOptions::new().buffer_capacity(1024))
			.unwrap_err();
		assert_eq!(err.written(), expected);
		assert_eq!(sink.out.len() as u64, expected);
	}

	#[rstest]
	fn test_buffered_write_failure_counts_sink_bytes() {
		let node = Element::new("div")
			.child(Node::text("0123456789"))
			.into_node();
		let mut sink = FailAfter {
			remaining: 6,
			out: Vec::new(),
		};
		let err = render_with(&node, &mut sink, &RenderOptions::new().buffer_capacity(4))
			.unwrap_err();
		assert_eq!(err.written(), 6);
		assert_eq!(sink.out, b"<div>0");
	}

	#[rstest]
	fn test_render_with_buffer_flushes() {
		let node = Element::new("p").child(Node::text("buffered")).into_node();
		let mut out = Vec::new();
		render_with(&node, &mut out, &RenderOptions::new().buffer_capacity(4)).unwrap();
		assert_eq!(out, b"<p>buffered</p>");
	}
}
