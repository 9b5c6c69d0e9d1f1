use log::debug;

use super::editor::TreeEditor;
use super::types::{Edge, Marker, Node, Position};

/// Width and height of the square new children are scattered over.
pub const PLACEMENT_RANGE: f64 = 300.0;

const SCATTER_PERIOD: u64 = 233280;

/// Deterministic pseudo-random value in `[0, 1)`.
fn rand_simple(seed: u64) -> f64 {
	let x = ((seed % SCATTER_PERIOD + 1) * 9301 + 49297) % SCATTER_PERIOD;
	(x as f64) / SCATTER_PERIOD as f64
}

/// Spreads new children over the placement square, keyed on their id.
fn scatter(seed: u64) -> Position {
	let seed = seed % SCATTER_PERIOD;
	Position::new(
		rand_simple(seed * 2) * PLACEMENT_RANGE,
		rand_simple(seed * 2 + 1) * PLACEMENT_RANGE,
	)
}

impl TreeEditor {
	/// Writes the edit buffer into the selected node and closes the edit.
	///
	/// The spouse name is only written while the buffer says married;
	/// otherwise the stored one is kept as is.
	pub fn commit_edit(&mut self) {
		let (Some(id), Some(buffer)) = (self.selection.selected_id(), self.selection.buffer())
		else {
			debug!("Commit ignored: nothing selected");
			return;
		};
		let (id, buffer) = (id.to_owned(), buffer.clone());

		self.store.replace_node(&id, |node| Node {
			label: buffer.label.clone(),
			second_label: if buffer.married {
				buffer.additional_text.clone()
			} else {
				node.second_label.clone()
			},
			married: buffer.married,
			gender: buffer.gender,
			marker: Marker::for_married(buffer.married),
			..node.clone()
		});
		debug!("Committed edit of node {}", id);
		self.selection.cancel();
	}

	/// Creates a default child under the selected node, links it and clears
	/// the selection. Returns the new node's id.
	pub fn add_child(&mut self) -> Option<String> {
		let Some(parent) = self.selection.selected_id().map(str::to_owned) else {
			debug!("Add child ignored: nothing selected");
			return None;
		};

		let id = self.store.next_node_id();
		let seed = id.parse().unwrap_or(self.store.nodes().len() as u64);
		self.store
			.add_node(Node::new(id.clone(), format!("Child {}", id), scatter(seed)));
		self.store.add_edge(Edge::between(parent.as_str(), id.as_str()));
		debug!("Added child {} under {}", id, parent);

		self.selection.cancel();
		Some(id)
	}

	/// Writes the buffered spouse name to the selected node and to every node
	/// it links to as a source. Leaves the edit open.
	pub fn propagate_spouse_label(&mut self) {
		let (Some(id), Some(buffer)) = (self.selection.selected_id(), self.selection.buffer())
		else {
			debug!("Spouse propagation ignored: nothing selected");
			return;
		};
		if buffer.additional_text.is_empty() {
			debug!("Spouse propagation ignored: empty name");
			return;
		}
		let (id, buffer) = (id.to_owned(), buffer.clone());

		let edges = self.store.edges().to_vec();
		let linked_from_selected =
			|node: &Node| edges.iter().any(|e| e.source == id && e.target == node.id);

		self.store.replace_all_nodes(|node| {
			if node.id == id {
				Node {
					second_label: buffer.additional_text.clone(),
					married: buffer.married,
					gender: buffer.gender,
					marker: Marker::for_married(buffer.married),
					..node.clone()
				}
			} else if linked_from_selected(node) {
				Node {
					second_label: buffer.additional_text.clone(),
					..node.clone()
				}
			} else {
				node.clone()
			}
		});
		debug!("Propagated spouse name from node {}", id);
	}
}
