//! Chart geometry and interaction configuration.
//!
//! Every tunable number of the chart lives here. All structs implement
//! [`Default`] with the stock chart values and deserialize with
//! `#[serde(default)]`, so a JSON override only needs the fields it changes:
//!
//! ```json
//! { "width": 1200, "tiling": "slice-dice", "legend": { "columns": 4 } }
//! ```

use serde::Deserialize;

use super::layout::{Tiling, TreemapLayout};
use super::legend::LegendConfig;

/// Placement of the multi-line tile labels.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
	/// Left inset of every label line.
	pub x: f64,
	/// Baseline of the first line.
	pub first_baseline: f64,
	pub line_height: f64,
}

impl Default for LabelConfig {
	fn default() -> Self {
		Self {
			x: 4.0,
			first_baseline: 13.0,
			line_height: 10.0,
		}
	}
}

/// Hover tooltip appearance.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
	/// Opacity while a tile is hovered.
	pub opacity: f64,
	/// Distance from the cursor in pixels, on both axes.
	pub offset: f64,
}

impl Default for TooltipConfig {
	fn default() -> Self {
		Self {
			opacity: 0.9,
			offset: 10.0,
		}
	}
}

/// Complete chart configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TreemapConfig {
	/// Treemap canvas width.
	pub width: f64,
	/// Treemap canvas height (the legend is drawn below it).
	pub height: f64,
	pub padding_inner: f64,
	pub tiling: Tiling,
	/// Extra SVG height reserved under the canvas for the legend.
	pub legend_band: f64,
	/// Theme name, resolved with [`Theme::by_name`](super::theme::Theme::by_name).
	pub theme: Option<String>,
	pub label: LabelConfig,
	pub legend: LegendConfig,
	pub tooltip: TooltipConfig,
}

impl Default for TreemapConfig {
	fn default() -> Self {
		Self {
			width: 960.0,
			height: 600.0,
			padding_inner: 1.0,
			tiling: Tiling::Squarify,
			legend_band: 180.0,
			theme: None,
			label: LabelConfig::default(),
			legend: LegendConfig::default(),
			tooltip: TooltipConfig::default(),
		}
	}
}

impl TreemapConfig {
	pub fn layout(&self) -> TreemapLayout {
		TreemapLayout {
			width: self.width,
			height: self.height,
			padding_inner: self.padding_inner,
			tiling: self.tiling,
		}
	}

	/// Full SVG height: canvas plus legend band.
	pub fn svg_height(&self) -> f64 {
		self.height + self.legend_band
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_stock_chart() {
		let config = TreemapConfig::default();
		assert_eq!((config.width, config.height), (960.0, 600.0));
		assert_eq!(config.padding_inner, 1.0);
		assert_eq!(config.svg_height(), 780.0);
		assert_eq!(config.tiling, Tiling::Squarify);
		assert_eq!(config.label.first_baseline, 13.0);
		assert_eq!(config.tooltip.opacity, 0.9);
	}

	#[test]
	fn partial_json_overrides() {
		let config: TreemapConfig = serde_json::from_str(
			r#"{ "width": 1200, "tiling": "slice-dice", "theme": "pastel", "legend": { "columns": 4 } }"#,
		)
		.unwrap();
		assert_eq!(config.width, 1200.0);
		assert_eq!(config.height, 600.0);
		assert_eq!(config.tiling, Tiling::SliceDice);
		assert_eq!(config.theme.as_deref(), Some("pastel"));
		assert_eq!(config.legend.columns, 4);
		assert_eq!(config.legend.row_height, 25.0);

		let layout = config.layout();
		assert_eq!(layout.width, 1200.0);
		assert_eq!(layout.tiling, Tiling::SliceDice);
	}

	#[test]
	fn unknown_tiling_is_rejected() {
		assert!(serde_json::from_str::<TreemapConfig>(r#"{ "tiling": "spiral" }"#).is_err());
	}
}
