use std::fmt;

/// Fill colour of an unmarried person.
pub const DEFAULT_COLOR: &str = "#fff";
/// Fill colour of a married person.
pub const MARRIED_COLOR: &str = "#FF9999";

/// Canvas coordinate of a node's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Position {
	/// Builds a position from its coordinates.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Gender of a person, `M` unless set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gender {
	/// Male.
	#[default]
	M,
	/// Female.
	F,
}

impl Gender {
	/// One-letter form shown on nodes.
	pub fn as_str(&self) -> &'static str {
		match self {
			Gender::M => "M",
			Gender::F => "F",
		}
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Visual marker of a node. Derived from `married` on edit, but stored so
/// that writes which do not recompute it leave it as it was.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
	/// Plain fill.
	#[default]
	Default,
	/// Married fill.
	Married,
}

impl Marker {
	/// Marker for the given married flag.
	pub fn for_married(married: bool) -> Self {
		if married {
			Marker::Married
		} else {
			Marker::Default
		}
	}

	/// CSS colour of the marker.
	pub fn color(&self) -> &'static str {
		match self {
			Marker::Default => DEFAULT_COLOR,
			Marker::Married => MARRIED_COLOR,
		}
	}
}

/// A person in the family tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique id within the tree.
	pub id: String,
	/// Placement on the canvas.
	pub position: Position,
	/// Display name.
	pub label: String,
	/// Spouse name. Only meaningful while `married` is set.
	pub second_label: String,
	/// Married flag.
	pub married: bool,
	/// Gender.
	pub gender: Gender,
	/// Fill marker.
	pub marker: Marker,
}

impl Node {
	/// An unmarried `M` person with no spouse name.
	pub fn new(id: impl Into<String>, label: impl Into<String>, position: Position) -> Self {
		Self {
			id: id.into(),
			position,
			label: label.into(),
			second_label: String::new(),
			married: false,
			gender: Gender::M,
			marker: Marker::Default,
		}
	}

	/// The node every new tree starts with.
	pub fn root() -> Self {
		Self::new("1", "Parent", Position::default())
	}

	/// Spouse name as it should be shown, hidden while unmarried.
	pub fn visible_spouse(&self) -> Option<&str> {
		(self.married && !self.second_label.is_empty()).then_some(self.second_label.as_str())
	}
}

/// A directed parent -> child relation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// `e<source>-<target>`.
	pub id: String,
	/// Parent id.
	pub source: String,
	/// Child id.
	pub target: String,
}

impl Edge {
	/// Builds the edge with its id derived from both endpoints (`e<source>-<target>`).
	pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
		let (source, target) = (source.into(), target.into());
		Self {
			id: format!("e{}-{}", source, target),
			source,
			target,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edge_id_is_derived_from_endpoints() {
		let edge = Edge::between("1", "2");
		assert_eq!(edge.id, "e1-2");
		assert_eq!(edge.source, "1");
		assert_eq!(edge.target, "2");
	}

	#[test]
	fn root_node_defaults() {
		let root = Node::root();
		assert_eq!(root.id, "1");
		assert_eq!(root.label, "Parent");
		assert!(!root.married);
		assert_eq!(root.gender, Gender::M);
		assert_eq!(root.marker.color(), DEFAULT_COLOR);
	}

	#[test]
	fn spouse_hidden_unless_married() {
		let mut node = Node::root();
		node.second_label = "Bob".into();
		assert_eq!(node.visible_spouse(), None);
		node.married = true;
		assert_eq!(node.visible_spouse(), Some("Bob"));
	}
}
