//! HTML escaping.
//!
//! The same five characters are replaced in both element content and
//! double-quoted attribute values:
//!
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`
//!
//! Every other code point, including non-ASCII text, passes through untouched.
//! Escaping is total and is **not** idempotent: escaping `&amp;` again yields
//! `&amp;amp;`. Use [`crate::pre_escaped`] for content that is already safe.

use std::borrow::Cow;
use std::io::{self, Write};

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

fn entity(c: char) -> Option<&'static str> {
	match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#x27;"),
		_ => None,
	}
}

fn escape(s: &str) -> Cow<'_, str> {
	if !s.contains(SPECIAL) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match entity(c) {
			Some(replacement) => escaped.push_str(replacement),
			None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escapes text for use inside element content.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// ```
/// use trellis_core::escape::escape_html;
///
/// assert_eq!(escape_html("Hello & Welcome"), "Hello &amp; Welcome");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
	escape(s)
}

/// Escapes text for use inside a double-quoted attribute value.
///
/// ```
/// use trellis_core::escape::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
	escape(s)
}

/// Normalizes arbitrary bytes to UTF-8 and escapes the result.
///
/// Invalid sequences become U+FFFD, so untrusted input can never make
/// escaping (or rendering) fail.
pub fn escape_lossy(bytes: &[u8]) -> String {
	let text = String::from_utf8_lossy(bytes);
	escape(&text).into_owned()
}

/// Writes `s` to `writer`, escaping as it goes.
///
/// Runs of ordinary characters are written as slices of the input, so no
/// intermediate string is allocated. Splits only happen on the ASCII
/// special characters, which keeps multi-byte sequences intact.
pub fn write_escaped<W: Write + ?Sized>(writer: &mut W, s: &str) -> io::Result<()> {
	let mut last = 0;
	for (index, c) in s.char_indices() {
		if let Some(replacement) = entity(c) {
			if last < index {
				writer.write_all(s[last..index].as_bytes())?;
			}
			writer.write_all(replacement.as_bytes())?;
			last = index + c.len_utf8();
		}
	}
	if last < s.len() {
		writer.write_all(s[last..].as_bytes())?;
	}
	Ok(())
}

/// Reverses [`escape_html`]. Only understands the five entities it produces.
pub fn unescape_html(s: &str) -> String {
	s.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#x27;", "'")
		.replace("&amp;", "&")
}
