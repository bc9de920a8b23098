//! Log output on stderr through `tracing-subscriber`

use tracing_subscriber::EnvFilter;

/// Variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "TRELLIS_LOG";

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Picks the filter: `TRELLIS_LOG`, then `RUST_LOG`, then the `-v` count.
pub fn filter_directive(verbosity: u8, lookup: impl Fn(&str) -> Option<String>) -> String {
	[LOG_ENV, "RUST_LOG"]
		.into_iter()
		.filter_map(&lookup)
		.find(|value| !value.trim().is_empty())
		.unwrap_or_else(|| level_for(verbosity).to_owned())
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8) {
	let directive = filter_directive(verbosity, |name| std::env::var(name).ok());
	let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
		eprintln!("Ignoring invalid log filter {directive:?}: {err}");
		EnvFilter::new(level_for(verbosity))
	});
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, "warn")]
	#[case(1, "info")]
	#[case(2, "debug")]
	#[case(7, "trace")]
	fn test_level_for(#[case] verbosity: u8, #[case] expected: &str) {
		assert_eq!(filter_directive(verbosity, |_| None), expected);
	}

	#[rstest]
	fn test_env_precedence() {
		let both = |name: &str| match name {
			LOG_ENV => Some("trellis_core=trace".to_owned()),
			"RUST_LOG" => Some("error".to_owned()),
			_ => None,
		};
		assert_eq!(filter_directive(0, both), "trellis_core=trace");

		let rust_log_only = |name: &str| (name == "RUST_LOG").then(|| "error".to_owned());
		assert_eq!(filter_directive(3, rust_log_only), "error");

		let blank = |_: &str| Some("  ".to_owned());
		assert_eq!(filter_directive(1, blank), "info");
	}
}
