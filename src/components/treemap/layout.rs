//! Rectangular tiling of a [`Hierarchy`].
//!
//! Positioning follows the usual treemap convention: the root fills the
//! canvas, every internal node's children are tiled inside the parent rect
//! grown by half the inner padding, and every non-root node is then shrunk by
//! half the inner padding. Adjacent siblings therefore end up exactly
//! `padding_inner` apart while the outermost tiles stay flush with the canvas.

use log::debug;
use serde::Deserialize;

use super::hierarchy::{Hierarchy, NodeId, Rect};

/// Target aspect ratio for [`Tiling::Squarify`]: the golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Strategy used to partition a node's rect among its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tiling {
	/// Rows of near-square tiles (Bruls, Huizing and van Wijk).
	#[default]
	Squarify,
	/// Left to right at even depths, top to bottom at odd depths.
	SliceDice,
	/// Children stacked top to bottom.
	Slice,
	/// Children placed left to right.
	Dice,
}

/// Treemap layout parameters.
#[derive(Clone, Debug)]
pub struct TreemapLayout {
	pub width: f64,
	pub height: f64,
	/// Gap between adjacent sibling tiles.
	pub padding_inner: f64,
	pub tiling: Tiling,
}

impl TreemapLayout {
	/// Assign a rect to every node in `hierarchy`.
	pub fn apply(&self, hierarchy: &mut Hierarchy) {
		hierarchy.node_mut(0).rect = Rect::new(0.0, 0.0, self.width, self.height);
		for idx in hierarchy.pre_order() {
			self.position(hierarchy, idx);
		}
		debug!(
			"sales-treemap: laid out {} nodes on {}x{} ({:?})",
			hierarchy.len(),
			self.width,
			self.height,
			self.tiling
		);
	}

	fn position(&self, hierarchy: &mut Hierarchy, idx: NodeId) {
		let half = self.padding_inner / 2.0;
		let node = hierarchy.node_mut(idx);
		let inset = if node.parent.is_some() { half } else { 0.0 };
		let Rect { x0, y0, x1, y1 } = node.rect;
		let (x0, x1) = shrink(x0 + inset, x1 - inset);
		let (y0, y1) = shrink(y0 + inset, y1 - inset);
		node.rect = Rect::new(x0, y0, x1, y1);

		if node.is_leaf() {
			return;
		}
		let (x0, x1) = shrink(x0 - half, x1 + half);
		let (y0, y1) = shrink(y0 - half, y1 + half);
		let area = Rect::new(x0, y0, x1, y1);
		match self.tiling {
			Tiling::Squarify => squarify(hierarchy, idx, area, PHI),
			Tiling::Slice => slice(hierarchy, idx, area),
			Tiling::Dice => dice(hierarchy, idx, area),
			Tiling::SliceDice => {
				if hierarchy.node(idx).depth % 2 == 1 {
					slice(hierarchy, idx, area)
				} else {
					dice(hierarchy, idx, area)
				}
			}
		}
	}
}

/// Collapse an inverted interval to its midpoint.
fn shrink(a0: f64, a1: f64) -> (f64, f64) {
	if a1 < a0 {
		let mid = (a0 + a1) / 2.0;
		(mid, mid)
	} else {
		(a0, a1)
	}
}

/// Lay `nodes` out left to right across `area`, widths proportional to value.
fn dice_nodes(hierarchy: &mut Hierarchy, nodes: &[NodeId], total: f64, area: Rect) {
	let k = if total > 0.0 { area.width() / total } else { 0.0 };
	let mut x = area.x0;
	for &c in nodes {
		let node = hierarchy.node_mut(c);
		let x1 = x + node.value * k;
		node.rect = Rect::new(x, area.y0, x1, area.y1);
		x = x1;
	}
}

/// Lay `nodes` out top to bottom across `area`, heights proportional to value.
fn slice_nodes(hierarchy: &mut Hierarchy, nodes: &[NodeId], total: f64, area: Rect) {
	let k = if total > 0.0 { area.height() / total } else { 0.0 };
	let mut y = area.y0;
	for &c in nodes {
		let node = hierarchy.node_mut(c);
		let y1 = y + node.value * k;
		node.rect = Rect::new(area.x0, y, area.x1, y1);
		y = y1;
	}
}

fn dice(hierarchy: &mut Hierarchy, parent: NodeId, area: Rect) {
	let children = hierarchy.node(parent).children.clone();
	let total = hierarchy.node(parent).value;
	dice_nodes(hierarchy, &children, total, area);
}

fn slice(hierarchy: &mut Hierarchy, parent: NodeId, area: Rect) {
	let children = hierarchy.node(parent).children.clone();
	let total = hierarchy.node(parent).value;
	slice_nodes(hierarchy, &children, total, area);
}

/// Squarified tiling. Children are consumed in order; a row keeps growing
/// while its worst aspect ratio does not get worse, then it is laid along the
/// shorter side of the remaining area.
fn squarify(hierarchy: &mut Hierarchy, parent: NodeId, area: Rect, ratio: f64) {
	let children = hierarchy.node(parent).children.clone();
	let values: Vec<f64> = children.iter().map(|&c| hierarchy.node(c).value).collect();
	let mut remaining = hierarchy.node(parent).value;
	let Rect {
		mut x0,
		mut y0,
		mut x1,
		mut y1,
	} = area;

	let n = children.len();
	let (mut i0, mut i1) = (0, 0);
	while i0 < n {
		let (dx, dy) = (x1 - x0, y1 - y0);

		// Skip leading zero-valued nodes so the row starts non-empty.
		let mut sum = values[i1];
		i1 += 1;
		while sum == 0.0 && i1 < n {
			sum = values[i1];
			i1 += 1;
		}
		let (mut min_value, mut max_value) = (sum, sum);
		let alpha = (dy / dx).max(dx / dy) / (remaining * ratio);
		let mut beta = sum * sum * alpha;
		let mut min_ratio = (max_value / beta).max(beta / min_value);

		while i1 < n {
			let value = values[i1];
			sum += value;
			min_value = min_value.min(value);
			max_value = max_value.max(value);
			beta = sum * sum * alpha;
			let new_ratio = (max_value / beta).max(beta / min_value);
			if new_ratio > min_ratio {
				sum -= value;
				break;
			}
			min_ratio = new_ratio;
			i1 += 1;
		}

		let row = &children[i0..i1];
		if dx < dy {
			let y = if remaining > 0.0 { y0 + dy * sum / remaining } else { y1 };
			dice_nodes(hierarchy, row, sum, Rect::new(x0, y0, x1, y));
			y0 = y;
		} else {
			let x = if remaining > 0.0 { x0 + dx * sum / remaining } else { x1 };
			slice_nodes(hierarchy, row, sum, Rect::new(x0, y0, x, y1));
			x0 = x;
		}
		remaining -= sum;
		i0 = i1;
	}
}
