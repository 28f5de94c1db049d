//! Hierarchy construction over the nested sales document.
//!
//! The tree is stored as an arena: nodes own their children through index
//! lists and refer back to their parent by index. Nodes are laid out in
//! pre-order, so index 0 is always the root.

use log::debug;

use super::types::SalesNode;
use crate::error::{Error, Result};

/// Index of a node in a [`Hierarchy`].
pub type NodeId = usize;

/// Axis-aligned bounding box assigned by the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x0: f64,
	pub y0: f64,
	pub x1: f64,
	pub y1: f64,
}

impl Rect {
	pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
		Self { x0, y0, x1, y1 }
	}

	pub fn width(&self) -> f64 {
		self.x1 - self.x0
	}

	pub fn height(&self) -> f64 {
		self.y1 - self.y0
	}

	pub fn area(&self) -> f64 {
		self.width() * self.height()
	}

	/// Area of the intersection with `other` (0 when disjoint or touching).
	pub fn overlap(&self, other: &Rect) -> f64 {
		let w = self.x1.min(other.x1) - self.x0.max(other.x0);
		let h = self.y1.min(other.y1) - self.y0.max(other.y0);
		if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
	}
}

/// A node of the derived tree.
#[derive(Clone, Debug, Default)]
pub struct HierarchyNode {
	pub name: String,
	/// Dot-joined path of ancestor names, ending with this node's name.
	pub id: String,
	/// Set on leaves only.
	pub category: Option<String>,
	/// Source value text for leaves, used for display attributes.
	pub raw_value: Option<String>,
	/// Sum of all leaf values beneath this node.
	pub value: f64,
	pub depth: usize,
	/// Longest distance to a descendant leaf (0 for leaves).
	pub height: usize,
	pub parent: Option<NodeId>,
	pub children: Vec<NodeId>,
	pub rect: Rect,
}

impl HierarchyNode {
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}
}

/// Rooted tree built from a [`SalesNode`] document.
#[derive(Clone, Debug)]
pub struct Hierarchy {
	nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
	/// Build the tree, compute ids, sum values bottom-up, and sort siblings
	/// by descending height then descending value.
	pub fn from_data(data: &SalesNode) -> Result<Self> {
		let mut hierarchy = Self { nodes: Vec::new() };
		if hierarchy.insert(data, None, 0)?.is_none() {
			return Err(Error::Empty {
				root: data.name.clone(),
			});
		}
		hierarchy.sum();
		hierarchy.sort();

		debug!(
			"sales-treemap: built hierarchy with {} nodes, total value {}",
			hierarchy.nodes.len(),
			hierarchy.root().value
		);
		Ok(hierarchy)
	}

	/// Insert `data` and its subtree. Returns `None` when the record is an
	/// empty group (no surviving children and no value of its own).
	fn insert(
		&mut self,
		data: &SalesNode,
		parent: Option<NodeId>,
		depth: usize,
	) -> Result<Option<NodeId>> {
		let is_group = data.children.is_some();
		if data.is_leaf() && is_group && data.value.is_none() {
			debug!("sales-treemap: skipping empty group {}", data.name);
			return Ok(None);
		}

		let id = match parent {
			Some(p) => format!("{}.{}", self.nodes[p].id, data.name),
			None => data.name.clone(),
		};
		let idx = self.nodes.len();
		self.nodes.push(HierarchyNode {
			name: data.name.clone(),
			id,
			depth,
			parent,
			..Default::default()
		});

		match &data.children {
			Some(children) if !children.is_empty() => {
				for child in children {
					if let Some(child_idx) = self.insert(child, Some(idx), depth + 1)? {
						self.nodes[idx].children.push(child_idx);
					}
				}
				if self.nodes[idx].children.is_empty() {
					debug!("sales-treemap: skipping empty group {}", data.name);
					self.nodes.truncate(idx);
					return Ok(None);
				}
			}
			_ => self.fill_leaf(idx, data)?,
		}
		Ok(Some(idx))
	}

	fn fill_leaf(&mut self, idx: NodeId, data: &SalesNode) -> Result<()> {
		let node = &mut self.nodes[idx];
		let Some(value) = &data.value else {
			return Err(Error::MissingValue {
				id: node.id.clone(),
			});
		};
		let amount = value
			.amount
			.filter(|v| v.is_finite() && *v >= 0.0)
			.ok_or_else(|| Error::InvalidValue {
				id: node.id.clone(),
				value: value.raw.clone(),
			})?;
		let Some(category) = &data.category else {
			return Err(Error::MissingCategory {
				id: node.id.clone(),
			});
		};
		node.value = amount;
		node.raw_value = Some(value.raw.clone());
		node.category = Some(category.clone());
		Ok(())
	}

	/// Post-order summation; children always follow their parent in the arena.
	fn sum(&mut self) {
		for idx in (0..self.nodes.len()).rev() {
			if self.nodes[idx].is_leaf() {
				continue;
			}
			let (value, height) = self.nodes[idx]
				.children
				.iter()
				.map(|&c| (self.nodes[c].value, self.nodes[c].height))
				.fold((0.0, 0), |(v, h), (cv, ch)| (v + cv, h.max(ch + 1)));
			self.nodes[idx].value = value;
			self.nodes[idx].height = height;
		}
	}

	fn sort(&mut self) {
		for idx in 0..self.nodes.len() {
			let mut children = std::mem::take(&mut self.nodes[idx].children);
			children.sort_by(|&a, &b| {
				let (a, b) = (&self.nodes[a], &self.nodes[b]);
				b.height
					.cmp(&a.height)
					.then_with(|| b.value.total_cmp(&a.value))
			});
			self.nodes[idx].children = children;
		}
	}

	pub fn root(&self) -> &HierarchyNode {
		&self.nodes[0]
	}

	pub fn node(&self, id: NodeId) -> &HierarchyNode {
		&self.nodes[id]
	}

	pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut HierarchyNode {
		&mut self.nodes[id]
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node ids in pre-order, following the sorted child order.
	pub fn pre_order(&self) -> Vec<NodeId> {
		let mut order = Vec::with_capacity(self.nodes.len());
		let mut stack = vec![0];
		while let Some(idx) = stack.pop() {
			order.push(idx);
			stack.extend(self.nodes[idx].children.iter().rev());
		}
		order
	}

	/// Leaves in pre-order.
	pub fn leaves(&self) -> impl Iterator<Item = &HierarchyNode> + '_ {
		self.pre_order()
			.into_iter()
			.map(|idx| &self.nodes[idx])
			.filter(|n| n.is_leaf())
	}

	/// Distinct leaf categories in first-seen order.
	pub fn categories(&self) -> Vec<String> {
		let mut seen = Vec::<String>::new();
		for leaf in self.leaves() {
			if let Some(category) = &leaf.category {
				if !seen.contains(category) {
					seen.push(category.clone());
				}
			}
		}
		seen
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scenario() -> SalesNode {
		serde_json::from_str(
			r#"{
				"name": "Sales",
				"children": [
					{ "name": "Action", "children": [
						{ "name": "A", "category": "Action", "value": 10 },
						{ "name": "B", "category": "Action", "value": 30 }
					]},
					{ "name": "Sports", "children": [
						{ "name": "C", "category": "Sports", "value": 20 }
					]}
				]
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn ids_join_ancestor_names() {
		let h = Hierarchy::from_data(&scenario()).unwrap();
		let ids: Vec<_> = h.leaves().map(|l| l.id.as_str()).collect();
		assert_eq!(ids, ["Sales.Action.B", "Sales.Action.A", "Sales.Sports.C"]);
		assert_eq!(h.root().id, "Sales");
	}

	#[test]
	fn values_sum_bottom_up() {
		let h = Hierarchy::from_data(&scenario()).unwrap();
		assert_eq!(h.root().value, 60.0);
		assert_eq!(h.root().height, 2);
		for idx in h.pre_order() {
			let node = h.node(idx);
			if !node.is_leaf() {
				let sum: f64 = node.children.iter().map(|&c| h.node(c).value).sum();
				assert_eq!(node.value, sum);
			}
		}
	}

	#[test]
	fn siblings_sorted_by_height_then_value() {
		let data: SalesNode = serde_json::from_str(
			r#"{ "name": "r", "children": [
				{ "name": "small", "category": "x", "value": 1 },
				{ "name": "group", "children": [
					{ "name": "g1", "category": "x", "value": 2 }
				]},
				{ "name": "big", "category": "x", "value": 50 }
			]}"#,
		)
		.unwrap();
		let h = Hierarchy::from_data(&data).unwrap();
		let names: Vec<_> = h
			.root()
			.children
			.iter()
			.map(|&c| h.node(c).name.as_str())
			.collect();
		assert_eq!(names, ["group", "big", "small"]);
		for &c in &h.root().children {
			assert_eq!(h.node(c).parent, Some(0));
		}
	}

	#[test]
	fn categories_in_first_seen_order() {
		let h = Hierarchy::from_data(&scenario()).unwrap();
		assert_eq!(h.categories(), ["Action", "Sports"]);
	}

	#[test]
	fn missing_leaf_fields_are_errors() {
		let no_value: SalesNode = serde_json::from_str(
			r#"{ "name": "r", "children": [{ "name": "x", "category": "c" }] }"#,
		)
		.unwrap();
		assert!(matches!(
			Hierarchy::from_data(&no_value),
			Err(Error::MissingValue { id }) if id == "r.x"
		));

		let no_category: SalesNode =
			serde_json::from_str(r#"{ "name": "r", "children": [{ "name": "x", "value": 3 }] }"#)
				.unwrap();
		assert!(matches!(
			Hierarchy::from_data(&no_category),
			Err(Error::MissingCategory { .. })
		));

		let negative: SalesNode = serde_json::from_str(
			r#"{ "name": "r", "children": [{ "name": "x", "category": "c", "value": "-2" }] }"#,
		)
		.unwrap();
		assert!(matches!(
			Hierarchy::from_data(&negative),
			Err(Error::InvalidValue { value, .. }) if value == "-2"
		));
	}

	#[test]
	fn empty_groups_are_pruned() {
		let data: SalesNode = serde_json::from_str(
			r#"{ "name": "r", "children": [
				{ "name": "empty", "children": [] },
				{ "name": "x", "category": "c", "value": 1 }
			]}"#,
		)
		.unwrap();
		let h = Hierarchy::from_data(&data).unwrap();
		assert_eq!(h.len(), 2);
		assert_eq!(h.leaves().count(), 1);

		let only_empty: SalesNode =
			serde_json::from_str(r#"{ "name": "r", "children": [{ "name": "e", "children": [] }] }"#)
				.unwrap();
		assert!(matches!(
			Hierarchy::from_data(&only_empty),
			Err(Error::Empty { .. })
		));
	}
}
