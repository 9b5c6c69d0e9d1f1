use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::model::{Command, EditBuffer, Gender, Node, TreeEditor};

/// Line shown for a parent in the relatives list.
fn describe_parent(node: &Node) -> String {
	match node.visible_spouse() {
		Some(spouse) => format!("{} and {}", node.label, spouse),
		None => node.label.clone(),
	}
}

/// Edit form for the selected person, with their parents and children.
#[component]
pub fn EditPanel(editor: RwSignal<TreeEditor>) -> impl IntoView {
	let dispatch = move |command: Command| editor.update(|e| e.apply(command));
	let buffer = Memo::new(move |_| editor.with(|e| e.selection().buffer().cloned()));
	let relations = Memo::new(move |_| editor.with(|e| e.relations()));

	let field = move |read: fn(&EditBuffer) -> String| {
		buffer.with(|b| b.as_ref().map(read).unwrap_or_default())
	};
	let married = move || buffer.with(|b| b.as_ref().is_some_and(|b| b.married));
	let gender = move || buffer.with(|b| b.as_ref().map(|b| b.gender).unwrap_or_default());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		dispatch(Command::CommitEdit);
	};

	let gender_button = move |g: Gender| {
		view! {
			<button
				type="button"
				class="gender-button"
				class:active=move || gender() == g
				on:click=move |_| dispatch(Command::SetGender(g))
			>
				{g.as_str()}
			</button>
		}
	};

	view! {
		<Show when=move || buffer.with(Option::is_some)>
			<div class="edit-panel">
				<div class="edit-panel-header">
					<h3>"Add Profile"</h3>
					<div class="gender-picker">
						<label>"Gender:"</label>
						{gender_button(Gender::M)}
						{gender_button(Gender::F)}
					</div>
				</div>
				<form on:submit=on_submit>
					<div class="field">
						<label>
							"Name:"
							<input
								type="text"
								prop:value=move || field(|b| b.label.clone())
								on:input=move |ev| dispatch(Command::SetLabel(event_target_value(&ev)))
							/>
						</label>
					</div>
					<Show when=married>
						<div class="field">
							<h4>"Married with"</h4>
							<label>
								"Name:"
								<input
									type="text"
									prop:value=move || field(|b| b.additional_text.clone())
									on:input=move |ev| {
										dispatch(Command::SetAdditionalText(event_target_value(&ev)))
									}
								/>
							</label>
						</div>
					</Show>
					<button type="submit" class="submit-button">
						"Update Name"
					</button>
					<button
						type="button"
						class="married-toggle"
						class:married=married
						on:click=move |_| dispatch(Command::ToggleMarried)
					>
						{move || if married() { "Married" } else { "Not-Married" }}
					</button>
					<Show when=married>
						<button
							type="button"
							class="action-button"
							on:click=move |_| dispatch(Command::PropagateSpouseLabel)
						>
							"Update Married with Name"
						</button>
						<button
							type="button"
							class="action-button"
							on:click=move |_| dispatch(Command::AddChild)
						>
							"Add Children"
						</button>
					</Show>
					<button type="button" class="close-button" on:click=move |_| dispatch(Command::Cancel)>
						"Close"
					</button>
				</form>
				<h4>"Parent"</h4>
				<ul>
					{move || {
						relations
							.get()
							.parents
							.iter()
							.map(|parent| view! { <li>{describe_parent(parent)}</li> })
							.collect_view()
					}}
				</ul>
				<h4>"Children"</h4>
				<ul>
					{move || {
						relations
							.get()
							.children
							.into_iter()
							.map(|child| {
								let id = child.id.clone();
								view! {
									<li class="child-link" on:click=move |_| dispatch(Command::Select(id.clone()))>
										{child.label}
									</li>
								}
							})
							.collect_view()
					}}
				</ul>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::Position;

	#[test]
	fn parent_line_shows_spouse_only_when_married() {
		let mut parent = Node::new("1", "Alice", Position::default());
		parent.second_label = "Bob".into();
		assert_eq!(describe_parent(&parent), "Alice");
		parent.married = true;
		assert_eq!(describe_parent(&parent), "Alice and Bob");
	}
}
