use log::debug;

use super::relations::{self, Relations};
use super::selection::SelectionController;
use super::store::GraphStore;
use super::types::{Gender, Node, Position};

/// A single user gesture, applied as a whole by [`TreeEditor::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
	/// Select a node and open its edit buffer.
	Select(String),
	/// Edit the buffered name.
	SetLabel(String),
	/// Edit the buffered spouse name.
	SetAdditionalText(String),
	/// Set the buffered married flag.
	SetMarried(bool),
	/// Set the buffered gender.
	SetGender(Gender),
	/// Flip the buffered married flag.
	ToggleMarried,
	/// Close the edit without saving.
	Cancel,
	/// Save the buffer into the selected node.
	CommitEdit,
	/// Add a child under the selected node.
	AddChild,
	/// Copy the buffered spouse name to the selected node and its children.
	PropagateSpouseLabel,
	/// User-drawn link from parent to child.
	Connect {
		/// Parent id.
		source: String,
		/// Child id.
		target: String,
	},
	/// Node dragged to a new place.
	MoveNode {
		/// Node id.
		id: String,
		/// New top-left corner.
		position: Position,
	},
}

/// The graph together with the selection editing it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeEditor {
	pub(crate) store: GraphStore,
	pub(crate) selection: SelectionController,
}

impl TreeEditor {
	/// Editor over a fresh tree holding the root node.
	pub fn new() -> Self {
		Self::default()
	}

	/// Editor over an existing store.
	pub fn from_store(store: GraphStore) -> Self {
		Self {
			store,
			selection: SelectionController::default(),
		}
	}

	/// The underlying graph.
	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	/// The selection and its buffer.
	pub fn selection(&self) -> &SelectionController {
		&self.selection
	}

	/// Selects the node with `id`. Unknown ids are ignored.
	pub fn select(&mut self, id: &str) {
		match self.store.node(id) {
			Some(node) => self.selection.select(node),
			None => debug!("Select ignored: no node {}", id),
		}
	}

	/// The selected node as currently stored.
	pub fn selected_node(&self) -> Option<&Node> {
		self.selection.selected_id().and_then(|id| self.store.node(id))
	}

	/// Parents and children of the current selection, derived afresh.
	pub fn relations(&self) -> Relations {
		relations::resolve(
			self.selected_node(),
			self.store.nodes(),
			self.store.edges(),
		)
	}

	/// Applies one command to completion.
	pub fn apply(&mut self, command: Command) {
		match command {
			Command::Select(id) => self.select(&id),
			Command::SetLabel(label) => self.selection.set_label(label),
			Command::SetAdditionalText(text) => self.selection.set_additional_text(text),
			Command::SetMarried(married) => self.selection.set_married(married),
			Command::SetGender(gender) => self.selection.set_gender(gender),
			Command::ToggleMarried => self.selection.toggle_married(),
			Command::Cancel => self.selection.cancel(),
			Command::CommitEdit => self.commit_edit(),
			Command::AddChild => {
				self.add_child();
			}
			Command::PropagateSpouseLabel => self.propagate_spouse_label(),
			Command::Connect { source, target } => {
				if self.store.connect(&source, &target) {
					debug!("Connected {} -> {}", source, target);
				}
			}
			Command::MoveNode { id, position } => {
				self.store.replace_node(&id, |node| Node {
					position,
					..node.clone()
				});
			}
		}
	}
}
