//! Memoized templates.
//!
//! [`NodeCache`] stores built nodes by string key. Concurrent requests for
//! the same key are single-flight: exactly one caller runs the template and
//! the others wait for its result. Requests for different keys never wait on
//! each other.
//!
//! ```
//! use std::sync::Arc;
//! use trellis_core::cache::{cached, NodeCache};
//! use trellis_core::template::H;
//! use trellis_core::{Builder, render_to_string};
//!
//! let cache = Arc::new(NodeCache::new());
//! let footer = cached(&cache, "footer", H::new(|b| b.footer("© Example")));
//!
//! let b = Builder::new();
//! assert_eq!(render_to_string(&footer.build(&b)), "<footer>© Example</footer>");
//! assert_eq!(render_to_string(&footer.build(&b)), "<footer>© Example</footer>");
//! assert_eq!(cache.stats().misses, 1);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::builder::Builder;
use crate::node::Node;
use crate::template::H;

type Slot = Arc<OnceLock<Node>>;

/// Hit and miss counters of a [`NodeCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
	/// Lookups answered from the cache.
	pub hits: u64,
	/// Lookups that built the node.
	pub misses: u64,
	/// Keys currently stored.
	pub entries: usize,
}

/// A thread-safe, single-flight node cache.
#[derive(Debug, Default)]
pub struct NodeCache {
	slots: Mutex<HashMap<String, Slot>>,
	hits: AtomicU64,
	misses: AtomicU64,
}

impl NodeCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	fn slot(&self, key: &str) -> Slot {
		let mut slots = self.slots.lock();
		if let Some(slot) = slots.get(key) {
			return slot.clone();
		}
		let slot = Slot::default();
		slots.insert(key.to_owned(), slot.clone());
		slot
	}

	/// Returns the node stored under `key`, building it with `template` on
	/// first use.
	///
	/// The map lock is released before `template` runs, so a slow template
	/// only blocks other callers asking for the same key.
	pub fn get_or_build(&self, key: &str, template: &H, builder: &Builder) -> Node {
		let slot = self.slot(key);
		let mut built = false;
		let node = slot.get_or_init(|| {
			built = true;
			template.build(builder)
		});

		if built {
			self.misses.fetch_add(1, Ordering::Relaxed);
			tracing::trace!(key, "node cache miss");
		} else {
			self.hits.fetch_add(1, Ordering::Relaxed);
			tracing::trace!(key, "node cache hit");
		}
		node.clone()
	}

	/// Removes one entry. Returns whether it existed.
	pub fn invalidate(&self, key: &str) -> bool {
		self.slots.lock().remove(key).is_some()
	}

	/// Removes every entry. Counters are kept.
	pub fn clear(&self) {
		self.slots.lock().clear();
	}

	/// Current counters.
	pub fn stats(&self) -> CacheStats {
		CacheStats {
			hits: self.hits.load(Ordering::Relaxed),
			misses: self.misses.load(Ordering::Relaxed),
			entries: self.slots.lock().len(),
		}
	}
}

/// Wraps `template` so its node is built once per key and then reused.
pub fn cached(cache: &Arc<NodeCache>, key: impl Into<String>, template: H) -> H {
	let cache = Arc::clone(cache);
	let key = key.into();
	H::new(move |b| cache.get_or_build(&key, &template, b))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::Barrier;
	use std::sync::atomic::AtomicUsize;
	use std::thread;
	use std::time::Duration;

	fn slow_counter(calls: Arc<AtomicUsize>) -> H {
		H::new(move |b| {
			calls.fetch_add(1, Ordering::SeqCst);
			thread::sleep(Duration::from_millis(20));
			b.p("expensive")
		})
	}

	#[rstest]
	fn test_concurrent_same_key_builds_once() {
		let cache = Arc::new(NodeCache::new());
		let calls = Arc::new(AtomicUsize::new(0));
		let template = cached(&cache, "report", slow_counter(calls.clone()));
		let barrier = Arc::new(Barrier::new(8));

		let handles: Vec<_> = (0..8)
			.map(|_| {
				let template = template.clone();
				let barrier = barrier.clone();
				thread::spawn(move || {
					barrier.wait();
					template.build(&Builder::new())
				})
			})
			.collect();

		for handle in handles {
			let node = handle.join().unwrap();
			assert_eq!(crate::render_to_string(&node), "<p>expensive</p>");
		}
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		let stats = cache.stats();
		assert_eq!(stats.misses, 1);
		assert_eq!(stats.hits, 7);
		assert_eq!(stats.entries, 1);
	}

	#[rstest]
	fn test_distinct_keys_build_separately() {
		let cache = Arc::new(NodeCache::new());
		let calls = Arc::new(AtomicUsize::new(0));
		let b = Builder::new();
		cached(&cache, "a", slow_counter(calls.clone())).build(&b);
		cached(&cache, "b", slow_counter(calls.clone())).build(&b);
		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert_eq!(cache.stats().entries, 2);
	}

	#[rstest]
	fn test_invalidate_forces_rebuild() {
		let cache = Arc::new(NodeCache::new());
		let calls = Arc::new(AtomicUsize::new(0));
		let template = cached(&cache, "k", slow_counter(calls.clone()));
		let b = Builder::new();

		template.build(&b);
		assert!(cache.invalidate("k"));
		assert!(!cache.invalidate("k"));
		template.build(&b);
		assert_eq!(calls.load(Ordering::SeqCst), 2);

		cache.clear();
		assert_eq!(cache.stats().entries, 0);
	}
}
