use super::types::{Edge, Node};

/// Direct parents and children of one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relations {
	/// Sources of edges into the node.
	pub parents: Vec<Node>,
	/// Targets of edges out of the node.
	pub children: Vec<Node>,
}

/// Derives the relatives of `selected` by scanning `edges`.
///
/// Edges pointing at ids missing from `nodes` are skipped. An edge that
/// makes `selected` its own parent is reported once, as a parent.
pub fn resolve(selected: Option<&Node>, nodes: &[Node], edges: &[Edge]) -> Relations {
	let Some(selected) = selected else {
		return Relations::default();
	};
	let find = |id: &str| nodes.iter().find(|n| n.id == id).cloned();

	let mut relations = Relations::default();
	for edge in edges {
		if edge.target == selected.id {
			if let Some(parent) = find(&edge.source) {
				relations.parents.push(parent);
			}
		} else if edge.source == selected.id {
			if let Some(child) = find(&edge.target) {
				relations.children.push(child);
			}
		}
	}
	relations
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::types::Position;

	fn node(id: &str) -> Node {
		Node::new(id, id, Position::default())
	}

	fn ids(nodes: &[Node]) -> Vec<&str> {
		nodes.iter().map(|n| n.id.as_str()).collect()
	}

	#[test]
	fn nothing_selected_yields_nothing() {
		let nodes = vec![node("1"), node("2")];
		let edges = vec![Edge::between("1", "2")];
		assert_eq!(resolve(None, &nodes, &edges), Relations::default());
	}

	#[test]
	fn finds_parents_and_children() {
		let nodes = vec![node("1"), node("2"), node("3"), node("4")];
		let edges = vec![
			Edge::between("1", "2"),
			Edge::between("4", "2"),
			Edge::between("2", "3"),
			Edge::between("1", "3"),
		];
		let relations = resolve(Some(&nodes[1]), &nodes, &edges);
		assert_eq!(ids(&relations.parents), vec!["1", "4"]);
		assert_eq!(ids(&relations.children), vec!["3"]);
	}

	#[test]
	fn dangling_edges_are_skipped() {
		let nodes = vec![node("1")];
		let edges = vec![Edge::between("9", "1"), Edge::between("1", "8")];
		let relations = resolve(Some(&nodes[0]), &nodes, &edges);
		assert!(relations.parents.is_empty());
		assert!(relations.children.is_empty());
	}

	#[test]
	fn self_link_counts_as_parent_only() {
		let nodes = vec![node("1")];
		let edges = vec![Edge::between("1", "1")];
		let relations = resolve(Some(&nodes[0]), &nodes, &edges);
		assert_eq!(ids(&relations.parents), vec!["1"]);
		assert!(relations.children.is_empty());
	}
}
