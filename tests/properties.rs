//! Property checks over randomly shaped trees.

use std::collections::BTreeMap;

use family_tree_canvas::model::relations::resolve;
use family_tree_canvas::model::{Command, Edge, GraphStore, Node, Position, TreeEditor};
use proptest::prelude::*;

const MAX_NODES: usize = 8;

fn nodes(count: usize) -> Vec<Node> {
	(1..=count)
		.map(|i| Node::new(i.to_string(), format!("Person {}", i), Position::default()))
		.collect()
}

/// Edges between ids in `1..=MAX_NODES + 2`, so some dangle.
fn edges() -> impl Strategy<Value = Vec<Edge>> {
	prop::collection::vec((1..=MAX_NODES + 2, 1..=MAX_NODES + 2), 0..20).prop_map(|pairs| {
		pairs
			.into_iter()
			.map(|(s, t)| Edge::between(s.to_string(), t.to_string()))
			.collect()
	})
}

/// Occurrence count per id, ignoring order.
fn tally(nodes: &[Node]) -> BTreeMap<String, usize> {
	let mut counts = BTreeMap::new();
	for node in nodes {
		*counts.entry(node.id.clone()).or_insert(0) += 1;
	}
	counts
}

proptest! {
	#[test]
	fn resolve_ignores_collection_order(
		count in 1..=MAX_NODES,
		edges in edges(),
		selected in 1..=MAX_NODES,
		seed in any::<u64>(),
	) {
		let nodes = nodes(count);
		let selected = nodes.get(selected - 1).cloned();

		let mut shuffled_nodes = nodes.clone();
		let mut shuffled_edges = edges.clone();
		// Deterministic rotation keyed on the seed.
		shuffled_nodes.rotate_left(seed as usize % nodes.len());
		shuffled_edges.reverse();

		let a = resolve(selected.as_ref(), &nodes, &edges);
		let b = resolve(selected.as_ref(), &shuffled_nodes, &shuffled_edges);
		prop_assert_eq!(tally(&a.parents), tally(&b.parents));
		prop_assert_eq!(tally(&a.children), tally(&b.children));
	}

	#[test]
	fn resolve_matches_one_hop_edges(
		count in 1..=MAX_NODES,
		edges in edges(),
		selected in 1..=MAX_NODES,
	) {
		let nodes = nodes(count);
		let Some(selected) = nodes.get(selected - 1) else {
			return Ok(());
		};
		let exists = |id: &str| nodes.iter().any(|n| n.id == id);
		let expected_parents = edges
			.iter()
			.filter(|e| e.target == selected.id && exists(&e.source))
			.count();
		let expected_children = edges
			.iter()
			.filter(|e| e.source == selected.id && e.target != selected.id && exists(&e.target))
			.count();

		let relations = resolve(Some(selected), &nodes, &edges);
		prop_assert_eq!(relations.parents.len(), expected_parents);
		prop_assert_eq!(relations.children.len(), expected_children);
		prop_assert!(relations.parents.iter().all(|p| edges
			.iter()
			.any(|e| e.source == p.id && e.target == selected.id)));
	}

	#[test]
	fn add_child_grows_by_one_node_and_edge(picks in prop::collection::vec(0usize..64, 1..16)) {
		let mut editor = TreeEditor::from_store(GraphStore::default());
		for pick in picks {
			let ids: Vec<String> = editor.store().nodes().iter().map(|n| n.id.clone()).collect();
			let parent = ids[pick % ids.len()].clone();
			let (node_count, edge_count) = (editor.store().nodes().len(), editor.store().edges().len());

			editor.apply(Command::Select(parent.clone()));
			editor.apply(Command::AddChild);

			let store = editor.store();
			prop_assert_eq!(store.nodes().len(), node_count + 1);
			prop_assert_eq!(store.edges().len(), edge_count + 1);
			let edge = store.edges().last().unwrap();
			prop_assert_eq!(&edge.source, &parent);
			prop_assert!(store.contains(&edge.target));
			prop_assert!(!editor.selection().is_editing());
		}
		let mut ids: Vec<&str> = editor.store().nodes().iter().map(|n| n.id.as_str()).collect();
		let total = ids.len();
		ids.sort();
		ids.dedup();
		prop_assert_eq!(ids.len(), total);
	}
}
