//! Gauge dashboard
//!
//! [`gauges_partial`] renders only the gauge grid so a page can refresh it
//! periodically without rebuilding the surrounding layout.

use serde::{Deserialize, Serialize};
use trellis_core::attr::{attr, class, data, id};
use trellis_core::template::H;
use trellis_themes::{Theme, Variant};

/// Fill level at which a gauge turns to warning.
pub const WARNING_LEVEL: f64 = 0.75;
/// Fill level at which a gauge turns to danger.
pub const DANGER_LEVEL: f64 = 0.9;

/// A named measurement within a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
	/// Display name
	pub name: String,
	/// Current reading
	pub value: f64,
	/// Lower bound
	#[serde(default)]
	pub min: f64,
	/// Upper bound
	pub max: f64,
	/// Unit suffix, e.g. `%` or `°C`
	#[serde(default)]
	pub unit: String,
}

impl Gauge {
	/// Creates a gauge with an empty unit.
	pub fn new(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
		Self {
			name: name.into(),
			value,
			min,
			max,
			unit: String::new(),
		}
	}

	/// Sets the unit.
	pub fn unit(mut self, unit: impl Into<String>) -> Self {
		self.unit = unit.into();
		self
	}

	/// Position of `value` within `min..=max`, clamped to 0.0..=1.0.
	///
	/// An empty or inverted range reads as 0.0.
	pub fn fraction(&self) -> f64 {
		let span = self.max - self.min;
		if !span.is_finite() || span <= 0.0 || !self.value.is_finite() {
			return 0.0;
		}
		((self.value - self.min) / span).clamp(0.0, 1.0)
	}

	/// Color for the current fill level.
	pub fn level(&self) -> Variant {
		let fraction = self.fraction();
		if fraction >= DANGER_LEVEL {
			Variant::Danger
		} else if fraction >= WARNING_LEVEL {
			Variant::Warning
		} else {
			Variant::Success
		}
	}

	/// The reading with its unit.
	pub fn reading(&self) -> String {
		format!("{}{}", trim_float(self.value), self.unit)
	}

	/// The element id of this gauge.
	pub fn element_id(&self) -> String {
		let slug: String = self
			.name
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
			.collect();
		format!("gauge-{slug}")
	}
}

fn trim_float(value: f64) -> String {
	if value.fract() == 0.0 && value.abs() < 1e15 {
		format!("{value:.0}")
	} else {
		format!("{value:.1}")
	}
}

/// One gauge as a card with a progress bar.
pub fn gauge_card(theme: &dyn Theme, gauge: &Gauge) -> H {
	let bar = theme.progress(gauge.fraction(), 1.0, gauge.level());
	let reading = gauge.reading();
	let element_id = gauge.element_id();
	let body = H::new(move |b| {
		b.div((
			id(&element_id),
			class("trellis-gauge"),
			b.p((class("trellis-gauge__value"), reading.clone())),
			&bar,
		))
	});
	theme.card(&gauge.name, body)
}

/// The gauge grid alone, for periodic refreshes.
#[tracing::instrument(level = "debug", skip_all, fields(gauges = gauges.len()))]
pub fn gauges_partial(theme: &dyn Theme, gauges: &[Gauge]) -> H {
	let cards = gauges.iter().map(|gauge| gauge_card(theme, gauge)).collect();
	let grid = theme.grid(4, cards);
	H::new(move |b| b.div((id("gauges"), attr("aria-live", "polite"), &grid)))
}

/// A full dashboard: an alert for gauges in danger, the gauge grid and a
/// side panel listing every reading.
pub fn dashboard(theme: &dyn Theme, gauges: &[Gauge], refresh_seconds: u32) -> H {
	let critical: Vec<&str> = gauges
		.iter()
		.filter(|gauge| gauge.level() == Variant::Danger)
		.map(|gauge| gauge.name.as_str())
		.collect();
	if !critical.is_empty() {
		tracing::warn!(critical = critical.len(), "gauges above danger level");
	}
	let alert = (!critical.is_empty())
		.then(|| theme.alert(&format!("Critical: {}", critical.join(", ")), Variant::Danger));

	let side = theme.list(
		gauges
			.iter()
			.map(|gauge| H::text(format!("{}: {}", gauge.name, gauge.reading())))
			.collect(),
	);
	let grid = gauges_partial(theme, gauges);
	let main = H::new(move |b| {
		b.div((
			class("trellis-dashboard"),
			data("refresh", refresh_seconds.to_string()),
			alert.as_ref(),
			&grid,
		))
	});
	theme.sidebar(side, main)
}

/// Gauges used by the demo pages.
pub fn sample_gauges() -> Vec<Gauge> {
	vec![
		Gauge::new("CPU", 42.0, 0.0, 100.0).unit("%"),
		Gauge::new("Memory", 7.8, 0.0, 8.0).unit(" GB"),
		Gauge::new("Disk", 412.0, 0.0, 512.0).unit(" GB"),
		Gauge::new("Inlet temperature", 21.5, 10.0, 45.0).unit("°C"),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use trellis_core::{Builder, render_to_string};
	use trellis_themes::{Bootstrap, ThemeKind, theme_for};

	fn html(template: &H) -> String {
		render_to_string(&template.build(&Builder::new()))
	}

	#[rstest]
	#[case(Gauge::new("a", 50.0, 0.0, 100.0), 0.5)]
	#[case(Gauge::new("a", 25.0, 20.0, 30.0), 0.5)]
	#[case(Gauge::new("a", -5.0, 0.0, 10.0), 0.0)]
	#[case(Gauge::new("a", 15.0, 0.0, 10.0), 1.0)]
	#[case(Gauge::new("a", 5.0, 10.0, 10.0), 0.0)]
	#[case(Gauge::new("a", 5.0, 10.0, 0.0), 0.0)]
	#[case(Gauge::new("a", f64::NAN, 0.0, 10.0), 0.0)]
	fn test_fraction(#[case] gauge: Gauge, #[case] expected: f64) {
		assert_eq!(gauge.fraction(), expected);
	}

	#[rstest]
	#[case(10.0, Variant::Success)]
	#[case(75.0, Variant::Warning)]
	#[case(89.9, Variant::Warning)]
	#[case(90.0, Variant::Danger)]
	fn test_level(#[case] value: f64, #[case] expected: Variant) {
		assert_eq!(Gauge::new("g", value, 0.0, 100.0).level(), expected);
	}

	#[rstest]
	fn test_reading_and_id() {
		let gauge = Gauge::new("Inlet temperature", 21.5, 10.0, 45.0).unit("°C");
		assert_eq!(gauge.reading(), "21.5°C");
		assert_eq!(gauge.element_id(), "gauge-inlet-temperature");
		assert_eq!(Gauge::new("CPU", 42.0, 0.0, 100.0).unit("%").reading(), "42%");
	}

	#[rstest]
	fn test_partial_is_only_the_grid() {
		let out = html(&gauges_partial(&Bootstrap::new(), &sample_gauges()));
		assert!(out.starts_with(r#"<div id="gauges" aria-live="polite"><div class="row row-cols-4 g-3">"#));
		assert_eq!(out.matches(r#"class="trellis-gauge""#).count(), 4);
		assert!(!out.contains("<html"));
		assert!(!out.contains("<aside"));
	}

	#[rstest]
	fn test_dashboard_alerts_on_critical(
		#[values(ThemeKind::Bootstrap, ThemeKind::Material, ThemeKind::Tailwind)] kind: ThemeKind,
	) {
		let out = html(&dashboard(theme_for(kind).as_ref(), &sample_gauges(), 15));
		assert!(out.contains(r#"role="alert""#));
		assert!(out.contains("Critical: Memory"));
		assert!(out.contains(r#"data-refresh="15""#));
		assert!(out.contains("Memory: 7.8 GB"));
	}

	#[rstest]
	fn test_dashboard_without_critical_has_no_alert() {
		let gauges = [Gauge::new("CPU", 10.0, 0.0, 100.0)];
		let out = html(&dashboard(&Bootstrap::new(), &gauges, 5));
		assert!(!out.contains(r#"role="alert""#));
	}
}
