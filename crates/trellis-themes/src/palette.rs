//! Theme colors as CSS custom properties

use serde::{Deserialize, Serialize};

/// Colors, typography and effects exposed to stylesheets as
/// `--trellis-*` variables.
///
/// Missing fields fall back to the Bootstrap palette when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
	/// Primary color
	pub primary: String,
	/// Secondary color
	pub secondary: String,
	/// Success color
	pub success: String,
	/// Danger color
	pub danger: String,
	/// Warning color
	pub warning: String,
	/// Info color
	pub info: String,
	/// Light color
	pub light: String,
	/// Dark color
	pub dark: String,
	/// Font family
	pub font_family: String,
	/// Border radius
	pub border_radius: String,
}

impl Palette {
	/// Bootstrap 5.3 defaults.
	pub fn bootstrap() -> Self {
		Self {
			primary: "#0d6efd".into(),
			secondary: "#6c757d".into(),
			success: "#198754".into(),
			danger: "#dc3545".into(),
			warning: "#ffc107".into(),
			info: "#0dcaf0".into(),
			light: "#f8f9fa".into(),
			dark: "#212529".into(),
			font_family: "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif".into(),
			border_radius: "0.375rem".into(),
		}
	}

	/// Material baseline colors.
	pub fn material() -> Self {
		Self {
			primary: "#6200ee".into(),
			secondary: "#03dac6".into(),
			success: "#2e7d32".into(),
			danger: "#b00020".into(),
			warning: "#ed6c02".into(),
			info: "#0288d1".into(),
			light: "#f5f5f5".into(),
			dark: "#121212".into(),
			font_family: "Roboto, sans-serif".into(),
			border_radius: "4px".into(),
		}
	}

	/// Tailwind default palette, 600 shades.
	pub fn tailwind() -> Self {
		Self {
			primary: "#2563eb".into(),
			secondary: "#4b5563".into(),
			success: "#16a34a".into(),
			danger: "#dc2626".into(),
			warning: "#ca8a04".into(),
			info: "#0891b2".into(),
			light: "#f3f4f6".into(),
			dark: "#1f2937".into(),
			font_family: "ui-sans-serif, system-ui, sans-serif".into(),
			border_radius: "0.5rem".into(),
		}
	}

	/// Builder method for primary color
	pub fn primary(mut self, color: impl Into<String>) -> Self {
		self.primary = color.into();
		self
	}

	/// Builder method for secondary color
	pub fn secondary(mut self, color: impl Into<String>) -> Self {
		self.secondary = color.into();
		self
	}

	/// Builder method for border radius
	pub fn border_radius(mut self, radius: impl Into<String>) -> Self {
		self.border_radius = radius.into();
		self
	}

	/// Renders a `:root` rule declaring one variable per field.
	///
	/// Characters that could end the declaration or the enclosing rule
	/// (`;`, `{`, `}`, `<`, `>`) are removed from values, since palettes
	/// may come from user configuration.
	pub fn to_css_variables(&self) -> String {
		let declarations = [
			("primary", &self.primary),
			("secondary", &self.secondary),
			("success", &self.success),
			("danger", &self.danger),
			("warning", &self.warning),
			("info", &self.info),
			("light", &self.light),
			("dark", &self.dark),
			("font-family", &self.font_family),
			("border-radius", &self.border_radius),
		];

		let mut css = String::from(":root {");
		for (name, value) in declarations {
			css.push_str(" --trellis-");
			css.push_str(name);
			css.push_str(": ");
			css.extend(
				value
					.chars()
					.filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>')),
			);
			css.push(';');
		}
		css.push_str(" }");
		css
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::bootstrap()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_palette() {
		let palette = Palette::default();
		assert_eq!(palette.primary, "#0d6efd");
		assert_eq!(palette, Palette::bootstrap());
	}

	#[rstest]
	fn test_to_css_variables() {
		let css = Palette::bootstrap().to_css_variables();
		assert!(css.starts_with(":root { --trellis-primary: #0d6efd;"));
		assert!(css.contains("--trellis-success: #198754;"));
		assert!(css.contains("--trellis-border-radius: 0.375rem;"));
		assert!(css.ends_with("; }"));
	}

	#[rstest]
	fn test_values_cannot_break_out_of_rule() {
		let css = Palette::bootstrap()
			.primary("red; } body { display: none")
			.to_css_variables();
		assert!(css.contains("--trellis-primary: red  body  display: none;"));
		assert_eq!(css.matches('{').count(), 1);
		assert_eq!(css.matches('}').count(), 1);
	}

	#[rstest]
	fn test_builder_methods() {
		let palette = Palette::material()
			.primary("#007bff")
			.secondary("#111")
			.border_radius("0.5rem");
		assert_eq!(palette.primary, "#007bff");
		assert_eq!(palette.secondary, "#111");
		assert_eq!(palette.border_radius, "0.5rem");
	}

	#[rstest]
	fn test_partial_toml_uses_defaults() {
		let palette: Palette = toml::from_str(
			r##"
primary = "#ff0000"
border_radius = "0"
"##,
		)
		.unwrap();
		assert_eq!(palette.primary, "#ff0000");
		assert_eq!(palette.border_radius, "0");
		assert_eq!(palette.danger, Palette::bootstrap().danger);
	}
}
