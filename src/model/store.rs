use log::debug;

use super::types::{Edge, Node};

/// Canonical collections of people and parent -> child links.
///
/// Nodes are only ever changed by swapping a whole node for a new one
/// through [`GraphStore::replace_node`] or [`GraphStore::replace_all_nodes`].
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStore {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	last_id: u64,
}

impl Default for GraphStore {
	fn default() -> Self {
		Self::new(vec![Node::root()], Vec::new())
	}
}

impl GraphStore {
	/// Builds a store from existing collections.
	pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
		let mut store = Self {
			nodes: Vec::with_capacity(nodes.len()),
			edges,
			last_id: 0,
		};
		for node in nodes {
			store.add_node(node);
		}
		store
	}

	/// All nodes in creation order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// All edges in creation order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Node with the given id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Whether a node with the given id exists.
	pub fn contains(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	/// Appends a node. Uniqueness is the caller's responsibility.
	pub fn add_node(&mut self, node: Node) {
		if let Ok(n) = node.id.parse::<u64>() {
			self.last_id = self.last_id.max(n);
		}
		self.nodes.push(node);
	}

	/// Appends an edge without any cycle or duplicate check.
	pub fn add_edge(&mut self, edge: Edge) {
		self.edges.push(edge);
	}

	/// Adds a user-drawn link between two existing nodes.
	///
	/// Refuses unknown endpoints, self links and a second link between the
	/// same pair in the same direction. Returns whether an edge was added.
	pub fn connect(&mut self, source: &str, target: &str) -> bool {
		if source == target || !self.contains(source) || !self.contains(target) {
			debug!("Ignoring connection {} -> {}", source, target);
			return false;
		}
		if self
			.edges
			.iter()
			.any(|e| e.source == source && e.target == target)
		{
			debug!("Connection {} -> {} already exists", source, target);
			return false;
		}
		self.add_edge(Edge::between(source, target));
		true
	}

	/// Swaps every node whose id is `id` for `updater(node)`.
	/// Returns whether anything matched.
	pub fn replace_node(&mut self, id: &str, mut updater: impl FnMut(&Node) -> Node) -> bool {
		let mut found = false;
		self.nodes = self
			.nodes
			.iter()
			.map(|node| {
				if node.id == id {
					found = true;
					updater(node)
				} else {
					node.clone()
				}
			})
			.collect();
		found
	}

	/// Rebuilds the node collection by passing every node through `mapper`.
	pub fn replace_all_nodes(&mut self, mapper: impl FnMut(&Node) -> Node) {
		self.nodes = self.nodes.iter().map(mapper).collect();
	}

	/// Issues a fresh node id.
	///
	/// Matches `node count + 1` for a tree that only grows, but never hands
	/// out an id twice even if the collection shrinks or ids arrive out of
	/// order. Once the counter is exhausted, falls back to the lowest free
	/// number above the node count.
	pub fn next_node_id(&mut self) -> String {
		let base = self.last_id.max(self.nodes.len() as u64);
		if let Some(next) = base.checked_add(1) {
			self.last_id = next;
			return next.to_string();
		}
		let mut next = self.nodes.len() as u64 + 1;
		while self.contains(&next.to_string()) {
			next += 1;
		}
		next.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::types::Position;

	fn node(id: &str) -> Node {
		Node::new(id, format!("Person {}", id), Position::default())
	}

	#[test]
	fn starts_with_root_only() {
		let store = GraphStore::default();
		assert_eq!(store.nodes().len(), 1);
		assert_eq!(store.nodes()[0].label, "Parent");
		assert!(store.edges().is_empty());
	}

	#[test]
	fn next_id_follows_count() {
		let mut store = GraphStore::default();
		assert_eq!(store.next_node_id(), "2");
		store.add_node(node("2"));
		assert_eq!(store.next_node_id(), "3");
	}

	#[test]
	fn next_id_is_never_reissued() {
		let mut store = GraphStore::new(vec![node("1"), node("7")], Vec::new());
		assert_eq!(store.next_node_id(), "8");
		// Issued but never added: the counter still moves on.
		assert_eq!(store.next_node_id(), "9");
	}

	#[test]
	fn next_id_survives_exhausted_counter() {
		let max = u64::MAX.to_string();
		let mut store = GraphStore::new(vec![node("1"), node(&max)], Vec::new());
		let id = store.next_node_id();
		assert_eq!(id, "3");
		store.add_node(node(&id));
		assert_eq!(store.next_node_id(), "4");
	}

	#[test]
	fn next_id_after_large_id() {
		let mut store = GraphStore::new(vec![node("1000000000000000")], Vec::new());
		assert_eq!(store.next_node_id(), "1000000000000001");
	}

	#[test]
	fn replace_node_touches_only_the_match() {
		let mut store = GraphStore::new(vec![node("1"), node("2")], Vec::new());
		let replaced = store.replace_node("2", |n| Node {
			label: "Renamed".into(),
			..n.clone()
		});
		assert!(replaced);
		assert_eq!(store.node("1").unwrap().label, "Person 1");
		assert_eq!(store.node("2").unwrap().label, "Renamed");
		assert!(!store.replace_node("9", |n| n.clone()));
	}

	#[test]
	fn replace_all_nodes_keeps_order() {
		let mut store = GraphStore::new(vec![node("1"), node("2"), node("3")], Vec::new());
		store.replace_all_nodes(|n| Node {
			married: n.id != "2",
			..n.clone()
		});
		let married: Vec<bool> = store.nodes().iter().map(|n| n.married).collect();
		assert_eq!(married, vec![true, false, true]);
	}

	#[test]
	fn add_edge_allows_duplicates() {
		let mut store = GraphStore::new(vec![node("1"), node("2")], Vec::new());
		store.add_edge(Edge::between("1", "2"));
		store.add_edge(Edge::between("1", "2"));
		assert_eq!(store.edges().len(), 2);
	}

	#[test]
	fn connect_refuses_bad_links() {
		let mut store = GraphStore::new(vec![node("1"), node("2")], Vec::new());
		assert!(store.connect("1", "2"));
		assert!(!store.connect("1", "2"));
		assert!(!store.connect("1", "1"));
		assert!(!store.connect("1", "5"));
		assert!(store.connect("2", "1"));
		assert_eq!(store.edges().len(), 2);
		assert_eq!(store.edges()[0].id, "e1-2");
	}
}
