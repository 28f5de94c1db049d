//! Visual theming for the treemap.
//!
//! Provides categorical palettes, the ordinal category-to-color scale, and
//! text colors for tiles and the legend.

use std::collections::HashMap;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Build an opaque color from a packed `0xRRGGBB` literal.
	pub const fn hex(rgb: u32) -> Self {
		Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			self.to_css_rgb()
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// An ordered list of categorical colors, cycled when exhausted.
#[derive(Clone, Debug)]
pub struct CategoryPalette {
	pub colors: Vec<Color>,
}

impl CategoryPalette {
	/// The classic ten-color categorical scheme (default)
	pub fn category10() -> Self {
		Self::from_hex(&[
			0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f,
			0xbcbd22, 0x17becf,
		])
	}

	/// Tableau's ten-color scheme - slightly muted
	pub fn tableau10() -> Self {
		Self::from_hex(&[
			0x4e79a7, 0xf28e2c, 0xe15759, 0x76b7b2, 0x59a14f, 0xedc949, 0xaf7aa1, 0xff9da7,
			0x9c755f, 0xbab0ab,
		])
	}

	/// Soft pastels for light backgrounds
	pub fn pastel1() -> Self {
		Self::from_hex(&[
			0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6, 0xffffcc, 0xe5d8bd, 0xfddaec,
			0xf2f2f2,
		])
	}

	fn from_hex(colors: &[u32]) -> Self {
		Self {
			colors: colors.iter().map(|&c| Color::hex(c)).collect(),
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Ordinal scale from category names to palette colors.
///
/// The domain is fixed at construction; the i-th category gets the i-th
/// palette color, wrapping around when there are more categories than colors.
#[derive(Clone, Debug)]
pub struct ColorScale {
	domain: Vec<String>,
	lookup: HashMap<String, Color>,
}

impl ColorScale {
	pub fn ordinal(domain: &[String], palette: &CategoryPalette) -> Self {
		let lookup = domain
			.iter()
			.enumerate()
			.map(|(i, category)| (category.clone(), palette.get(i)))
			.collect();
		Self {
			domain: domain.to_vec(),
			lookup,
		}
	}

	/// Color for `category`, or `None` if it is outside the domain.
	pub fn color(&self, category: &str) -> Option<Color> {
		self.lookup.get(category).copied()
	}

	pub fn domain(&self) -> &[String] {
		&self.domain
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub palette: CategoryPalette,
	/// Fill for tiles whose category is not in the scale.
	pub fallback: Color,
	pub tile_text: Color,
	pub legend_text: Color,
	pub tooltip_background: Color,
	pub tooltip_text: Color,
}

impl Theme {
	/// Bright categorical colors on a light page (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			palette: CategoryPalette::category10(),
			fallback: Color::rgb(128, 128, 128),
			tile_text: Color::rgb(0, 0, 0),
			legend_text: Color::rgb(33, 33, 33),
			tooltip_background: Color::rgba(255, 255, 204, 0.95),
			tooltip_text: Color::rgb(0, 0, 0),
		}
	}

	/// Muted tones with light tile labels
	pub fn tableau() -> Self {
		Self {
			name: "tableau",
			palette: CategoryPalette::tableau10(),
			fallback: Color::rgb(186, 176, 171),
			tile_text: Color::rgb(255, 255, 255),
			legend_text: Color::rgb(60, 60, 60),
			tooltip_background: Color::rgba(40, 44, 52, 0.9),
			tooltip_text: Color::rgb(240, 240, 240),
		}
	}

	/// Pastel fills, dark labels
	pub fn pastel() -> Self {
		Self {
			name: "pastel",
			palette: CategoryPalette::pastel1(),
			fallback: Color::rgb(242, 242, 242),
			tile_text: Color::rgb(50, 50, 50),
			legend_text: Color::rgb(50, 50, 50),
			tooltip_background: Color::rgba(255, 255, 255, 0.95),
			tooltip_text: Color::rgb(30, 30, 30),
		}
	}

	/// Look a theme up by name, as used by the inline config element.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" => Some(Self::default_theme()),
			"tableau" => Some(Self::tableau()),
			"pastel" => Some(Self::pastel()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formatting() {
		assert_eq!(Color::hex(0x1f77b4).to_css(), "#1f77b4");
		assert_eq!(
			Color::rgb(255, 0, 0).with_alpha(0.5).to_css(),
			"rgba(255, 0, 0, 0.5)"
		);
	}

	#[test]
	fn ordinal_scale_follows_domain_order() {
		let domain: Vec<String> = ["Wii", "NES", "GB"].iter().map(|s| s.to_string()).collect();
		let scale = ColorScale::ordinal(&domain, &CategoryPalette::category10());
		assert_eq!(scale.color("Wii"), Some(Color::hex(0x1f77b4)));
		assert_eq!(scale.color("NES"), Some(Color::hex(0xff7f0e)));
		assert_eq!(scale.color("GB"), Some(Color::hex(0x2ca02c)));
		assert_eq!(scale.color("PS4"), None);
		assert_eq!(scale.domain(), domain.as_slice());
	}

	#[test]
	fn palette_wraps_around() {
		let palette = CategoryPalette::category10();
		let domain: Vec<String> = (0..12).map(|i| format!("c{i}")).collect();
		let scale = ColorScale::ordinal(&domain, &palette);
		assert_eq!(scale.color("c10"), scale.color("c0"));
		assert_eq!(scale.color("c11"), Some(palette.get(1)));
	}

	#[test]
	fn themes_resolve_by_name() {
		assert_eq!(Theme::by_name("pastel").map(|t| t.name), Some("pastel"));
		assert!(Theme::by_name("neon").is_none());
		assert_eq!(Theme::default().name, "default");
	}
}
