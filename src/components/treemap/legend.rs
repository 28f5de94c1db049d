//! Grid-packed category legend drawn under the chart.

use serde::Deserialize;

/// Legend geometry parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
	pub columns: usize,
	pub row_height: f64,
	/// Side of the square color swatch.
	pub swatch_size: f64,
	/// Gap between swatch and label, and between columns.
	pub text_padding: f64,
	/// Vertical gap between the chart and the first legend row.
	pub offset: f64,
	/// Horizontal space withheld from the columns before dividing the
	/// canvas width among them.
	pub reserved_width: f64,
}

impl Default for LegendConfig {
	fn default() -> Self {
		Self {
			columns: 3,
			row_height: 25.0,
			swatch_size: 15.0,
			text_padding: 5.0,
			offset: 15.0,
			reserved_width: 500.0,
		}
	}
}

/// One swatch + label, positioned relative to the legend origin.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
	pub category: String,
	pub column: usize,
	pub row: usize,
	pub x: f64,
	pub y: f64,
}

/// Computed legend placement.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
	/// Origin of the legend group in chart coordinates.
	pub x: f64,
	pub y: f64,
	pub column_width: f64,
	/// Total width spanned by all columns.
	pub width: f64,
	pub rows: usize,
	pub items: Vec<LegendItem>,
	/// Label baseline offset within an item.
	pub label_x: f64,
	pub label_y: f64,
	pub swatch_size: f64,
}

impl LegendLayout {
	/// Lay out `categories` in row-major order under a chart of
	/// `chart_width` x `chart_height`, centered horizontally.
	pub fn compute(
		categories: &[String],
		chart_width: f64,
		chart_height: f64,
		config: &LegendConfig,
	) -> Self {
		let columns = config.columns.max(1);
		let column_width =
			((chart_width - config.offset - config.reserved_width) / columns as f64).max(0.0);
		let width = columns as f64 * (column_width + config.text_padding) - config.text_padding;
		let rows = categories.len().div_ceil(columns);

		let items = categories
			.iter()
			.enumerate()
			.map(|(i, category)| {
				let (column, row) = (i % columns, i / columns);
				LegendItem {
					category: category.clone(),
					column,
					row,
					x: column as f64 * (column_width + config.text_padding),
					y: row as f64 * config.row_height,
				}
			})
			.collect();

		Self {
			x: (chart_width - width) / 2.0,
			y: chart_height + config.offset,
			column_width,
			width,
			rows,
			items,
			label_x: config.swatch_size + config.text_padding,
			label_y: config.swatch_size,
			swatch_size: config.swatch_size,
		}
	}

	/// Height occupied by the legend rows.
	pub fn height(&self, config: &LegendConfig) -> f64 {
		self.rows as f64 * config.row_height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(n: usize) -> Vec<String> {
		(0..n).map(|i| format!("cat{i}")).collect()
	}

	#[test]
	fn default_geometry_matches_chart() {
		let legend = LegendLayout::compute(&names(18), 960.0, 600.0, &LegendConfig::default());
		assert!((legend.column_width - 445.0 / 3.0).abs() < 1e-9);
		assert!((legend.width - 455.0).abs() < 1e-9);
		assert!((legend.x - 252.5).abs() < 1e-9);
		assert_eq!(legend.y, 615.0);
		assert_eq!(legend.rows, 6);
		assert_eq!((legend.label_x, legend.label_y), (20.0, 15.0));
	}

	#[test]
	fn items_fill_rows_left_to_right() {
		let config = LegendConfig::default();
		let legend = LegendLayout::compute(&names(7), 960.0, 600.0, &config);
		assert_eq!(legend.rows, 3);
		for (i, item) in legend.items.iter().enumerate() {
			assert_eq!((item.column, item.row), (i % 3, i / 3));
			assert_eq!(item.y, (i / 3) as f64 * 25.0);
			assert!((item.x - (i % 3) as f64 * (legend.column_width + 5.0)).abs() < 1e-9);
		}
		for row in 0..legend.rows {
			assert!(legend.items.iter().filter(|it| it.row == row).count() <= 3);
		}
		assert_eq!(legend.height(&config), 75.0);
	}

	#[test]
	fn two_categories_share_first_row() {
		let cats = vec!["Action".to_string(), "Sports".to_string()];
		let legend = LegendLayout::compute(&cats, 960.0, 600.0, &LegendConfig::default());
		assert_eq!(legend.rows, 1);
		let cells: Vec<_> = legend.items.iter().map(|i| (i.column, i.row)).collect();
		assert_eq!(cells, [(0, 0), (1, 0)]);
		assert_eq!(legend.items[0].category, "Action");
	}

	#[test]
	fn empty_legend_has_no_rows() {
		let legend = LegendLayout::compute(&[], 960.0, 600.0, &LegendConfig::default());
		assert_eq!(legend.rows, 0);
		assert!(legend.items.is_empty());
	}
}
