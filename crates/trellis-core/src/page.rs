//! Full HTML documents.
//!
//! [`document`] wraps a body template in `<!DOCTYPE html>`, `<html>`,
//! `<head>` and `<body>`, with the `<head>` contents described by [`Head`].

use crate::attr::{charset, content, defer, href, lang, name, rel, src};
use crate::builder::Builder;
use crate::node::Node;
use crate::template::H;

/// Contents of the `<head>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
	title: Option<String>,
	meta: Vec<(String, String)>,
	stylesheets: Vec<String>,
	scripts: Vec<String>,
	inline_styles: Vec<String>,
}

impl Head {
	/// An empty head. `charset` and `viewport` meta tags are always emitted.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Adds `<meta name=.. content=..>`.
	pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
		self.meta.push((name.into(), content.into()));
		self
	}

	/// Adds a stylesheet link.
	pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
		self.stylesheets.push(href.into());
		self
	}

	/// Adds a deferred external script.
	pub fn script(mut self, src: impl Into<String>) -> Self {
		self.scripts.push(src.into());
		self
	}

	/// Adds CSS inside a `<style>` element.
	///
	/// CSS is not HTML-escaped; any `</` is rewritten to `<\/` so the text
	/// cannot close the element early.
	pub fn inline_style(mut self, css: impl Into<String>) -> Self {
		self.inline_styles.push(css.into());
		self
	}

	/// The title, if set.
	pub fn title_text(&self) -> Option<&str> {
		self.title.as_deref()
	}

	fn build(&self, b: &Builder) -> Node {
		b.head((
			b.meta(charset("utf-8")),
			b.meta((
				name("viewport"),
				content("width=device-width, initial-scale=1"),
			)),
			self.title.as_deref().map(|t| b.title(t)),
			self.meta
				.iter()
				.map(|(n, c)| b.meta((name(n), content(c))))
				.collect::<Vec<_>>(),
			self.stylesheets
				.iter()
				.map(|h| b.link((rel("stylesheet"), href(h))))
				.collect::<Vec<_>>(),
			self.inline_styles
				.iter()
				.map(|css| b.style(Node::raw(css.replace("</", "<\\/"))))
				.collect::<Vec<_>>(),
			self.scripts
				.iter()
				.map(|s| b.script((src(s), defer())))
				.collect::<Vec<_>>(),
		))
	}
}

/// A complete HTML document around `body`.
pub fn document(language: impl Into<String>, head: Head, body: H) -> H {
	let language = language.into();
	H::new(move |b| {
		Node::fragment([
			Node::raw("<!DOCTYPE html>"),
			b.html((lang(&language), head.build(b), b.body(&body))),
		])
	})
}
