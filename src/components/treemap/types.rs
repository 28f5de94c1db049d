//! Sales data structures for input to the treemap component.

use serde::{Deserialize, Deserializer};

/// A node of the sales document: either a grouping record (a platform, or the
/// dataset root) with `children`, or a leaf sales record.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SalesNode {
	/// Display name. Joined with ancestor names to form the node id.
	pub name: String,
	/// Category of a leaf record (the platform for the video game dataset).
	#[serde(default)]
	pub category: Option<String>,
	/// Sales figure of a leaf record. Grouping records usually omit it.
	#[serde(default, deserialize_with = "deserialize_value")]
	pub value: Option<SalesValue>,
	/// Nested records. Absent or empty on leaves.
	#[serde(default)]
	pub children: Option<Vec<SalesNode>>,
}

impl SalesNode {
	/// Returns `true` when this record has no children.
	pub fn is_leaf(&self) -> bool {
		self.children.as_ref().is_none_or(Vec::is_empty)
	}

	/// Number of leaf records beneath (or including) this node.
	pub fn leaf_count(&self) -> usize {
		match &self.children {
			Some(children) if !children.is_empty() => children.iter().map(Self::leaf_count).sum(),
			_ => 1,
		}
	}
}

/// A sales value as written in the source document.
///
/// The public dataset stores figures as strings (`"20.08"`), so both JSON
/// numbers and numeric strings are accepted. The original text is kept for
/// display so `data-value` attributes match the source verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesValue {
	/// Raw text as it appeared in the document.
	pub raw: String,
	/// Parsed number, `None` when `raw` is not numeric.
	pub amount: Option<f64>,
}

impl SalesValue {
	/// Parse a value from its textual form.
	pub fn parse(raw: impl Into<String>) -> Self {
		let raw = raw.into();
		let amount = raw.trim().parse::<f64>().ok();
		Self { raw, amount }
	}

	/// Build a value from a number.
	pub fn from_amount(amount: f64) -> Self {
		Self {
			raw: amount.to_string(),
			amount: Some(amount),
		}
	}
}

impl std::fmt::Display for SalesValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.raw)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
	Number(serde_json::Number),
	Text(String),
}

fn deserialize_value<'de, D>(deserializer: D) -> Result<Option<SalesValue>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<RawValue>::deserialize(deserializer)?;
	Ok(raw.map(|raw| match raw {
		RawValue::Number(n) => SalesValue {
			raw: n.to_string(),
			amount: n.as_f64(),
		},
		RawValue::Text(s) => SalesValue::parse(s),
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_string_and_numeric_values() {
		let json = r#"{
			"name": "Video Game Sales Data Top 100",
			"children": [
				{ "name": "Wii", "children": [
					{ "name": "Wii Sports", "category": "Wii", "value": "82.53" },
					{ "name": "Mario Kart Wii", "category": "Wii", "value": 35.52 }
				]}
			]
		}"#;
		let root: SalesNode = serde_json::from_str(json).unwrap();
		assert!(!root.is_leaf());
		assert_eq!(root.leaf_count(), 2);

		let wii = &root.children.as_ref().unwrap()[0];
		let sports = &wii.children.as_ref().unwrap()[0];
		let kart = &wii.children.as_ref().unwrap()[1];
		assert!(sports.is_leaf());
		assert_eq!(sports.value.as_ref().unwrap().amount, Some(82.53));
		assert_eq!(sports.value.as_ref().unwrap().to_string(), "82.53");
		assert_eq!(kart.value.as_ref().unwrap().amount, Some(35.52));
		assert_eq!(kart.category.as_deref(), Some("Wii"));
	}

	#[test]
	fn non_numeric_strings_keep_raw_text() {
		let node: SalesNode =
			serde_json::from_str(r#"{ "name": "x", "category": "c", "value": "n/a" }"#).unwrap();
		let value = node.value.unwrap();
		assert_eq!(value.raw, "n/a");
		assert_eq!(value.amount, None);
	}

	#[test]
	fn empty_children_is_a_leaf() {
		let node: SalesNode = serde_json::from_str(r#"{ "name": "3DO", "children": [] }"#).unwrap();
		assert!(node.is_leaf());
		assert!(node.value.is_none());
	}
}
