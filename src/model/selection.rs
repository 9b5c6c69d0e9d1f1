use super::types::{Gender, Node};

/// Uncommitted copy of the editable fields of the selected node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditBuffer {
	/// Display name.
	pub label: String,
	/// Spouse name.
	pub additional_text: String,
	/// Married flag.
	pub married: bool,
	/// Gender.
	pub gender: Gender,
}

impl EditBuffer {
	/// Copies the editable fields of `node`.
	pub fn seeded_from(node: &Node) -> Self {
		Self {
			label: node.label.clone(),
			additional_text: node.second_label.clone(),
			married: node.married,
			gender: node.gender,
		}
	}
}

/// Where the selection lifecycle currently is.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
	/// Nothing selected, no buffer.
	#[default]
	Idle,
	/// A node is selected and its fields are being edited.
	Editing {
		/// Id of the selected node. Its current fields live in the store.
		node_id: String,
		buffer: EditBuffer,
	},
}

/// Tracks the selected node and its edit buffer.
///
/// Setters only ever touch the buffer. They are ignored while idle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionController {
	state: Selection,
}

impl SelectionController {
	/// Current lifecycle state.
	pub fn state(&self) -> &Selection {
		&self.state
	}

	/// Whether a node is selected.
	pub fn is_editing(&self) -> bool {
		matches!(self.state, Selection::Editing { .. })
	}

	/// Id of the selected node, if any.
	pub fn selected_id(&self) -> Option<&str> {
		match &self.state {
			Selection::Editing { node_id, .. } => Some(node_id.as_str()),
			Selection::Idle => None,
		}
	}

	/// The edit buffer, while editing.
	pub fn buffer(&self) -> Option<&EditBuffer> {
		match &self.state {
			Selection::Editing { buffer, .. } => Some(buffer),
			Selection::Idle => None,
		}
	}

	/// Opens (or reopens) the edit buffer seeded from `node`.
	pub fn select(&mut self, node: &Node) {
		self.state = Selection::Editing {
			node_id: node.id.clone(),
			buffer: EditBuffer::seeded_from(node),
		};
	}

	/// Drops the selection and the buffer without writing anything back.
	pub fn cancel(&mut self) {
		self.state = Selection::Idle;
	}

	/// Sets the buffered name.
	pub fn set_label(&mut self, label: impl Into<String>) {
		self.edit(|b| b.label = label.into());
	}

	/// Sets the buffered spouse name.
	pub fn set_additional_text(&mut self, text: impl Into<String>) {
		self.edit(|b| b.additional_text = text.into());
	}

	/// Sets the buffered married flag.
	pub fn set_married(&mut self, married: bool) {
		self.edit(|b| b.married = married);
	}

	/// Sets the buffered gender.
	pub fn set_gender(&mut self, gender: Gender) {
		self.edit(|b| b.gender = gender);
	}

	/// Flips the buffered married flag, keeping the spouse name.
	pub fn toggle_married(&mut self) {
		self.edit(|b| b.married = !b.married);
	}

	fn edit(&mut self, f: impl FnOnce(&mut EditBuffer)) {
		if let Selection::Editing { buffer, .. } = &mut self.state {
			f(buffer);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::types::Position;

	fn married_node() -> Node {
		Node {
			second_label: "Bob".into(),
			married: true,
			gender: Gender::F,
			..Node::new("3", "Alice", Position::default())
		}
	}

	#[test]
	fn select_seeds_buffer() {
		let mut selection = SelectionController::default();
		selection.select(&married_node());
		assert!(selection.is_editing());
		assert_eq!(selection.selected_id(), Some("3"));
		assert_eq!(
			selection.buffer(),
			Some(&EditBuffer {
				label: "Alice".into(),
				additional_text: "Bob".into(),
				married: true,
				gender: Gender::F,
			})
		);
	}

	#[test]
	fn toggle_keeps_spouse_text() {
		let mut selection = SelectionController::default();
		selection.select(&married_node());
		selection.toggle_married();
		let buffer = selection.buffer().unwrap();
		assert!(!buffer.married);
		assert_eq!(buffer.additional_text, "Bob");
	}

	#[test]
	fn setters_ignored_while_idle() {
		let mut selection = SelectionController::default();
		selection.set_label("Nobody");
		selection.toggle_married();
		assert_eq!(selection, SelectionController::default());
	}

	#[test]
	fn cancel_discards_buffer() {
		let mut selection = SelectionController::default();
		selection.select(&married_node());
		selection.set_label("Changed");
		selection.cancel();
		assert!(!selection.is_editing());
		assert!(selection.buffer().is_none());
	}
}
