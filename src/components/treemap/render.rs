//! Scene construction for the treemap.
//!
//! Turns a laid-out [`Hierarchy`] into plain drawing data: one [`Tile`] per
//! leaf plus the legend. The component maps the scene onto SVG elements; all
//! geometry and color decisions are made here so they can be checked without
//! a browser.

use std::sync::OnceLock;

use regex::Regex;

use super::config::{LabelConfig, TreemapConfig};
use super::hierarchy::{Hierarchy, HierarchyNode};
use super::legend::LegendLayout;
use super::theme::{Color, ColorScale, Theme};
use super::types::SalesNode;
use crate::error::Result;

/// Split a tile name into label lines, breaking before every capital letter
/// that is followed by a non-capital (`"Wii Sports"` -> `["Wii ", "Sports"]`).
pub fn split_label(name: &str) -> Vec<&str> {
	static WORD_START: OnceLock<Regex> = OnceLock::new();
	let re = WORD_START
		.get_or_init(|| Regex::new(r"[A-Z][^A-Z]").expect("label regex must compile"));

	let mut lines = Vec::new();
	let mut start = 0;
	for m in re.find_iter(name) {
		if m.start() > start {
			lines.push(&name[start..m.start()]);
			start = m.start();
		}
	}
	if start < name.len() {
		lines.push(&name[start..]);
	}
	lines
}

/// One line of a tile label, positioned relative to the tile origin.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelLine {
	pub text: String,
	pub x: f64,
	pub y: f64,
}

/// A drawable leaf rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
	pub id: String,
	pub name: String,
	pub category: String,
	/// Value text exactly as in the source document.
	pub value: String,
	pub amount: f64,
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
	pub fill: Color,
	pub lines: Vec<LabelLine>,
}

impl Tile {
	fn from_leaf(
		leaf: &HierarchyNode,
		scale: &ColorScale,
		theme: &Theme,
		label: &LabelConfig,
	) -> Self {
		let category = leaf.category.clone().unwrap_or_default();
		let lines = split_label(&leaf.name)
			.into_iter()
			.enumerate()
			.map(|(i, text)| LabelLine {
				text: text.to_string(),
				x: label.x,
				y: label.first_baseline + i as f64 * label.line_height,
			})
			.collect();

		Self {
			id: leaf.id.clone(),
			name: leaf.name.clone(),
			fill: scale.color(&category).unwrap_or(theme.fallback),
			category,
			value: leaf.raw_value.clone().unwrap_or_else(|| leaf.value.to_string()),
			amount: leaf.value,
			x: leaf.rect.x0,
			y: leaf.rect.y0,
			width: leaf.rect.width(),
			height: leaf.rect.height(),
			lines,
		}
	}

	/// SVG `transform` placing the tile group at its top-left corner.
	pub fn transform(&self) -> String {
		format!("translate({},{})", self.x, self.y)
	}
}

/// Everything the component needs to draw one chart.
#[derive(Clone, Debug)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub tiles: Vec<Tile>,
	pub legend: LegendLayout,
	pub colors: ColorScale,
}

impl Scene {
	/// Build the hierarchy from `data`, lay it out, and derive tiles and legend.
	pub fn build(data: &SalesNode, config: &TreemapConfig, theme: &Theme) -> Result<Self> {
		let mut hierarchy = Hierarchy::from_data(data)?;
		config.layout().apply(&mut hierarchy);
		Ok(Self::from_hierarchy(&hierarchy, config, theme))
	}

	/// Derive tiles and legend from an already laid-out hierarchy.
	pub fn from_hierarchy(hierarchy: &Hierarchy, config: &TreemapConfig, theme: &Theme) -> Self {
		let categories = hierarchy.categories();
		let colors = ColorScale::ordinal(&categories, &theme.palette);
		let tiles = hierarchy
			.leaves()
			.map(|leaf| Tile::from_leaf(leaf, &colors, theme, &config.label))
			.collect();
		let legend =
			LegendLayout::compute(&categories, config.width, config.height, &config.legend);

		Self {
			width: config.width,
			height: config.svg_height(),
			tiles,
			legend,
			colors,
		}
	}

	/// Swatch color for a legend entry.
	pub fn legend_color(&self, category: &str) -> Option<Color> {
		self.colors.color(category)
	}

	/// SVG `transform` placing the legend group under the chart.
	pub fn legend_transform(&self) -> String {
		format!("translate({},{})", self.legend.x, self.legend.y)
	}
}
