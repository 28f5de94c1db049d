//! Hover tooltip state.
//!
//! The tooltip is a single absolutely positioned element shared by all tiles.
//! Hovering a tile copies that tile's metadata in and fades the element in;
//! leaving the tile fades it out again while keeping the last contents.

use super::config::TooltipConfig;
use super::render::Tile;

/// Contents and placement of the tooltip element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
	/// 0.0 when hidden.
	pub opacity: f64,
	/// Page coordinates of the top-left corner, in pixels.
	pub left: f64,
	pub top: f64,
	pub name: String,
	pub category: String,
	/// Value text as shown in the source document.
	pub value: String,
}

impl TooltipState {
	/// Show the tooltip for `tile` next to the cursor at (`page_x`, `page_y`).
	pub fn show(&mut self, tile: &Tile, page_x: f64, page_y: f64, config: &TooltipConfig) {
		self.opacity = config.opacity;
		self.left = page_x + config.offset;
		self.top = page_y + config.offset;
		self.name.clone_from(&tile.name);
		self.category.clone_from(&tile.category);
		self.value.clone_from(&tile.value);
	}

	pub fn hide(&mut self) {
		self.opacity = 0.0;
	}

	pub fn is_visible(&self) -> bool {
		self.opacity > 0.0
	}

	/// Inner HTML with one field per line. Text is escaped.
	pub fn html(&self) -> String {
		format!(
			"Name: {}<br>Category: {}<br>Value: {}",
			escape_html(&self.name),
			escape_html(&self.category),
			escape_html(&self.value)
		)
	}

	/// Inline CSS for the tooltip element.
	pub fn style(&self, background: &str, color: &str) -> String {
		format!(
			"position: absolute; pointer-events: none; opacity: {}; left: {}px; top: {}px; \
			 background: {background}; color: {color};",
			self.opacity, self.left, self.top
		)
	}
}

fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::treemap::theme::Color;

	fn tile(name: &str) -> Tile {
		Tile {
			id: format!("root.Wii.{name}"),
			name: name.to_string(),
			category: "Wii".to_string(),
			value: "82.53".to_string(),
			amount: 82.53,
			x: 0.0,
			y: 0.0,
			width: 100.0,
			height: 50.0,
			fill: Color::hex(0x1f77b4),
			lines: Vec::new(),
		}
	}

	#[test]
	fn hover_shows_tile_metadata() {
		let mut tooltip = TooltipState::default();
		assert!(!tooltip.is_visible());

		tooltip.show(&tile("Wii Sports"), 120.0, 340.0, &TooltipConfig::default());
		assert_eq!(tooltip.opacity, 0.9);
		assert_eq!((tooltip.left, tooltip.top), (130.0, 350.0));
		let html = tooltip.html();
		assert_eq!(html, "Name: Wii Sports<br>Category: Wii<br>Value: 82.53");
		assert!(tooltip.style("#fff", "#000").contains("opacity: 0.9;"));
	}

	#[test]
	fn unhover_hides_but_keeps_contents() {
		let mut tooltip = TooltipState::default();
		tooltip.show(&tile("Wii Sports"), 0.0, 0.0, &TooltipConfig::default());
		tooltip.hide();
		assert_eq!(tooltip.opacity, 0.0);
		assert!(!tooltip.is_visible());
		assert_eq!(tooltip.name, "Wii Sports");
		assert!(tooltip.style("#fff", "#000").contains("opacity: 0;"));
	}

	#[test]
	fn markup_in_names_is_escaped() {
		let mut tooltip = TooltipState::default();
		tooltip.show(&tile("<b>Q&A</b>"), 0.0, 0.0, &TooltipConfig::default());
		assert!(tooltip.html().starts_with("Name: &lt;b&gt;Q&amp;A&lt;/b&gt;<br>"));
	}
}
