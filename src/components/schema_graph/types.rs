//! Graph elements handed to the schema graph component.
//!
//! The JSON shape mirrors what the data files contain: every element carries
//! its fields under a `data` key.

use serde::{Deserialize, Serialize};

/// Fields of a node element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFields {
	/// Unique identifier, also used as the rendered label.
	pub id: String,
	/// Property names shown in the side panel when the node is selected.
	#[serde(default)]
	pub properties: Vec<String>,
}

/// Fields of an edge element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFields {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

/// A node in the shape `{ data: { id, properties } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeElement {
	/// Node fields.
	pub data: NodeFields,
}

/// A directed edge in the shape `{ data: { source, target } }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeElement {
	/// Edge fields.
	pub data: EdgeFields,
}

/// Either kind of element. Serializes without a tag, exactly like the
/// wrapped element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
	/// A node element.
	Node(NodeElement),
	/// An edge element.
	Edge(EdgeElement),
}

impl NodeElement {
	/// Node with the given id and properties.
	pub fn new(id: impl Into<String>, properties: Vec<String>) -> Self {
		Self {
			data: NodeFields {
				id: id.into(),
				properties,
			},
		}
	}

	/// Node id.
	pub fn id(&self) -> &str {
		&self.data.id
	}
}

impl EdgeElement {
	/// Edge from `source` to `target`.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			data: EdgeFields {
				source: source.into(),
				target: target.into(),
			},
		}
	}
}

impl Element {
	/// The node, if this is one.
	pub fn as_node(&self) -> Option<&NodeElement> {
		match self {
			Element::Node(node) => Some(node),
			Element::Edge(_) => None,
		}
	}

	/// The edge, if this is one.
	pub fn as_edge(&self) -> Option<&EdgeElement> {
		match self {
			Element::Edge(edge) => Some(edge),
			Element::Node(_) => None,
		}
	}
}

impl From<NodeElement> for Element {
	fn from(node: NodeElement) -> Self {
		Element::Node(node)
	}
}

impl From<EdgeElement> for Element {
	fn from(edge: EdgeElement) -> Self {
		Element::Edge(edge)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn elements_serialize_in_data_envelope() {
		let elements: Vec<Element> = vec![
			NodeElement::new("n1", vec!["x=1".into()]).into(),
			EdgeElement::new("n1", "n2").into(),
		];
		assert_eq!(
			serde_json::to_value(&elements).unwrap(),
			json!([
				{ "data": { "id": "n1", "properties": ["x=1"] } },
				{ "data": { "source": "n1", "target": "n2" } },
			])
		);
	}

	#[test]
	fn accessors_match_variant() {
		let node: Element = NodeElement::new("a", vec![]).into();
		let edge: Element = EdgeElement::new("a", "b").into();
		assert_eq!(node.as_node().map(NodeElement::id), Some("a"));
		assert!(node.as_edge().is_none());
		assert!(edge.as_node().is_none());
		assert_eq!(edge.as_edge().unwrap().data.target, "b");
	}
}
