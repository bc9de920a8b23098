//! Named element constructors.
//!
//! Each method is a thin wrapper over [`Builder::element`].

use super::{Builder, IntoArgs};
use crate::node::Node;

macro_rules! element_constructors {
	($($tag:ident),* $(,)?) => {
		impl Builder {
			$(
				#[doc = concat!("Builds a `<", stringify!($tag), ">` element.")]
				pub fn $tag(&self, args: impl IntoArgs) -> Node {
					self.element(stringify!($tag), args)
				}
			)*
		}
	};
}

element_constructors!(
	// document
	html, head, body, title, meta, link, script, style,
	// sections
	header, footer, main, nav, section, article, aside, div, span,
	// text
	h1, h2, h3, h4, h5, h6, p, a, b, i, em, strong, small, code, pre, br, hr, img, blockquote,
	// lists
	ul, ol, li, dl, dt, dd,
	// tables
	table, caption, thead, tbody, tfoot, tr, th, td,
	// forms
	form, fieldset, legend, label, input, select, option, textarea, button, progress,
);
