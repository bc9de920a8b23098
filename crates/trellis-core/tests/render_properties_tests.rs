//! Rendering property tests
//!
//! Test Categories:
//! 1. Escaping - text and runtime attribute names never leak raw markup
//! 2. Raw bypass - raw nodes are byte-for-byte verbatim
//! 3. Void elements - no closing tag, no children
//! 4. Fragments - transparent concatenation
//! 5. Determinism - repeated and concurrent renders agree
//! 6. Attribute merging
//! 7. Conditional composition
//! 8. End-to-end card scenario

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use proptest::prelude::*;
use rstest::{fixture, rstest};
use trellis_core::attr::{attr, class, data};
use trellis_core::escape::unescape_html;
use trellis_core::template::{either, for_each, seq};
use trellis_core::{Builder, Element, H, Node, render, render_to_string};

#[fixture]
fn b() -> Builder {
	Builder::new()
}

// ============================================================================
// Escaping
// ============================================================================

proptest! {
	#[test]
	fn text_nodes_never_emit_raw_specials(input in "[a-z<>&\"' \u{e9}\u{65e5}]{0,64}") {
		let html = render_to_string(&Node::text(input.clone()));
		prop_assert!(!html.contains(['<', '>', '"']));
		prop_assert_eq!(unescape_html(&html), input);
	}

	#[test]
	fn text_inside_elements_round_trips(input in "\\PC{0,64}") {
		let html = render_to_string(&Builder::new().p(input.clone()));
		let inner = html.strip_prefix("<p>").and_then(|s| s.strip_suffix("</p>")).unwrap();
		prop_assert!(!inner.contains('<'));
		prop_assert_eq!(unescape_html(inner), input);
	}

	#[test]
	fn runtime_data_names_never_break_the_tag(name in "\\PC{0,24}") {
		let html = render_to_string(&Builder::new().div((data(name, "v"), "t")));
		let open = html.strip_suffix("t</div>").unwrap();
		prop_assert!(open.starts_with("<div") && open.ends_with('>'));
		prop_assert_eq!(open.matches('>').count(), 1);
		prop_assert_eq!(open.matches('"').count() % 2, 0);
		prop_assert!(open == "<div>" || open.ends_with("=\"v\">"));
	}
}

#[rstest]
fn test_attribute_values_are_escaped(b: Builder) {
	let node = b.a((attr("title", r#"x" onclick="alert(1)"#), "link"));
	assert_eq!(
		render_to_string(&node),
		r#"<a title="x&quot; onclick=&quot;alert(1)">link</a>"#
	);
}

// ============================================================================
// Raw bypass
// ============================================================================

#[rstest]
fn test_raw_is_verbatim() {
	let input = "<b>x</b>";
	assert_eq!(render_to_string(&Node::raw(input)).as_bytes(), input.as_bytes());
}

#[rstest]
fn test_pre_escaped_is_not_escaped_twice() {
	assert_eq!(render_to_string(&trellis_core::pre_escaped("&amp;")), "&amp;");
	assert_eq!(render_to_string(&trellis_core::text("&amp;")), "&amp;amp;");
}

// ============================================================================
// Void elements
// ============================================================================

#[rstest]
#[case("br")]
#[case("img")]
#[case("input")]
#[case("hr")]
#[case("meta")]
fn test_void_elements_never_close_or_hold_children(b: Builder, #[case] tag: &'static str) {
	let node = b.element(tag, (attr("data-x", "1"), "child text", b.span("child")));
	let html = render_to_string(&node);
	assert_eq!(html, format!(r#"<{tag} data-x="1" />"#));
	assert!(!html.contains(&format!("</{tag}>")));
}

// ============================================================================
// Fragments
// ============================================================================

#[rstest]
fn test_fragment_equals_concatenation(b: Builder) {
	let children = vec![
		b.h2("Title"),
		Node::text("a & b"),
		Node::raw("<hr>"),
		b.ul(b.li(1)),
	];
	let concatenated: String = children.iter().map(render_to_string).collect();
	let fragment = Node::fragment(children);
	assert_eq!(render_to_string(&fragment), concatenated);
}

#[rstest]
fn test_empty_fragment_renders_nothing() {
	assert_eq!(render_to_string(&Node::empty()), "");
}

// ============================================================================
// Determinism
// ============================================================================

fn sample_tree(b: &Builder) -> Node {
	b.div((
		class("grid"),
		attr("id", "main"),
		(0..50)
			.map(|i| b.div((class("cell"), attr("data-i", i.to_string()), i)))
			.collect::<Vec<_>>(),
	))
}

#[rstest]
fn test_rendering_twice_is_identical(b: Builder) {
	let tree = sample_tree(&b);
	let mut first = Vec::new();
	let mut second = Vec::new();
	render(&tree, &mut first).unwrap();
	render(&tree, &mut second).unwrap();
	assert_eq!(first, second);
}

#[rstest]
fn test_concurrent_renders_of_shared_tree(b: Builder) {
	let tree = Arc::new(sample_tree(&b));
	let expected = render_to_string(&tree);

	let handles: Vec<_> = (0..8)
		.map(|_| {
			let tree = Arc::clone(&tree);
			thread::spawn(move || render_to_string(&tree))
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), expected);
	}
}

#[rstest]
fn test_shared_builder_across_threads() {
	let builder = Arc::new(Builder::new());
	let handles: Vec<_> = (0..4)
		.map(|n| {
			let builder = Arc::clone(&builder);
			thread::spawn(move || render_to_string(&builder.span(n)))
		})
		.collect();
	let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
	assert_eq!(
		outputs,
		["<span>0</span>", "<span>1</span>", "<span>2</span>", "<span>3</span>"]
	);
}

// ============================================================================
// Attribute merging
// ============================================================================

#[rstest]
fn test_class_merge(b: Builder) {
	let node = b.div((class("a"), class("b c")));
	assert_eq!(render_to_string(&node), r#"<div class="a b c"></div>"#);
}

#[rstest]
fn test_class_merge_does_not_deduplicate() {
	let node = Element::new("div")
		.with(class("a"))
		.with(class("a"))
		.into_node();
	assert_eq!(render_to_string(&node), r#"<div class="a a"></div>"#);
}

// ============================================================================
// Conditional composition
// ============================================================================

#[rstest]
fn test_conditional_false_skips_then_branch(b: Builder) {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let h_a = H::new(move |b| {
		counter.fetch_add(1, Ordering::SeqCst);
		b.strong("A")
	});
	let h_b = H::new(|b| b.em("B"));

	let chosen = either(false, h_a, h_b.clone());
	assert_eq!(
		render_to_string(&chosen.build(&b)),
		render_to_string(&h_b.build(&b))
	);
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn test_for_each_keeps_order_and_duplicates(b: Builder) {
	let template = seq([
		H::text("["),
		for_each(["b", "a", "b"], |s| H::new(move |b| b.i(s))),
		H::text("]"),
	]);
	assert_eq!(
		render_to_string(&template.build(&b)),
		"[<i>b</i><i>a</i><i>b</i>]"
	);
}

// ============================================================================
// End-to-end
// ============================================================================

#[rstest]
fn test_card_scenario_with_elements() {
	let node = Element::new("div")
		.with(attr("class", "card"))
		.child(Element::new("h1").child(Node::text("Hello & Welcome")))
		.child(Node::text("<script>bad</script>"))
		.into_node();
	assert_eq!(
		render_to_string(&node),
		r#"<div class="card"><h1>Hello &amp; Welcome</h1>&lt;script&gt;bad&lt;/script&gt;</div>"#
	);
}

#[rstest]
fn test_card_scenario_with_builder(b: Builder) {
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
