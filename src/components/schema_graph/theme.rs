//! Visual theming for the schema graph.
//!
//! The light theme reproduces the classic schema viewer stylesheet: dark
//! nodes labeled with their id, light green edges, an orange selected node and
//! magenta highlighted edges.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0 to 1.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with another alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
		Self {
			r: mix(self.r, other.r),
			g: mix(self.g, other.g),
			b: mix(self.b, other.b),
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// CSS `rgba(...)` string.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Theme selector used by the viewer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	/// White background, black nodes.
	#[default]
	Light,
	/// Dark background, light nodes.
	Dark,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Node fill.
	pub color: Color,
	/// Fill of the selected node.
	pub selected_color: Color,
	/// Ring drawn around highlighted neighbors.
	pub ring_color: Color,
	/// Label text color.
	pub label_color: Color,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Line color.
	pub color: Color,
	/// Line width in screen pixels at zoom 1.
	pub width: f64,
	/// Line color of highlighted edges.
	pub highlight_color: Color,
	/// Arrowhead color of highlighted edges.
	pub highlight_arrow_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Display name.
	pub name: &'static str,
	/// Canvas background.
	pub background: Color,
	/// Edge style.
	pub edge: EdgeStyle,
	/// Node style.
	pub node: NodeStyle,
}

impl Theme {
	/// Theme for a configured name.
	pub fn named(name: ThemeName) -> Self {
		match name {
			ThemeName::Light => Self::light(),
			ThemeName::Dark => Self::dark(),
		}
	}

	/// White canvas, black nodes (default)
	pub fn light() -> Self {
		Self {
			name: "light",
			background: Color::rgb(255, 255, 255),
			edge: EdgeStyle {
				color: Color::rgb(144, 238, 144),
				width: 4.5,
				highlight_color: Color::rgb(255, 0, 255),
				highlight_arrow_color: Color::rgb(184, 48, 247),
			},
			node: NodeStyle {
				color: Color::rgb(0, 0, 0),
				selected_color: Color::rgb(255, 148, 102),
				ring_color: Color::rgba(184, 48, 247, 0.8),
				label_color: Color::rgb(0, 0, 0),
			},
		}
	}

	/// Same accents on a dark canvas
	pub fn dark() -> Self {
		Self {
			name: "dark",
			background: Color::rgb(22, 27, 34),
			edge: EdgeStyle {
				color: Color::rgba(144, 238, 144, 0.6),
				width: 4.5,
				highlight_color: Color::rgb(255, 0, 255),
				highlight_arrow_color: Color::rgb(184, 48, 247),
			},
			node: NodeStyle {
				color: Color::rgb(129, 161, 193),
				selected_color: Color::rgb(255, 148, 102),
				ring_color: Color::rgba(255, 0, 255, 0.8),
				label_color: Color::rgba(255, 255, 255, 0.9),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output() {
		assert_eq!(Color::rgb(255, 148, 102).to_css(), "#ff9466");
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
	}

	#[test]
	fn lerp_endpoints() {
		let a = Color::rgb(0, 0, 0);
		let b = Color::rgb(200, 100, 50);
		assert_eq!(a.lerp(b, 0.0), a);
		assert_eq!(a.lerp(b, 1.0), b);
		assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
	}

	#[test]
	fn named_themes() {
		assert_eq!(Theme::named(ThemeName::Light).name, "light");
		assert_eq!(Theme::named(ThemeName::Dark).name, "dark");
		assert_eq!(Theme::default().edge.highlight_color.to_css(), "#ff00ff");
	}
}
