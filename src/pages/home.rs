use leptos::prelude::*;

use crate::components::edit_panel::EditPanel;
use crate::components::export::ExportButton;
use crate::components::family_tree::FamilyTreeCanvas;
use crate::model::TreeEditor;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let editor = RwSignal::new(TreeEditor::new());
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<FamilyTreeCanvas editor=editor canvas_ref=canvas_ref fullscreen=true />
				<div class="graph-overlay">
					<h1>"Family Tree"</h1>
					<p class="subtitle">
						"Click a person to edit. Shift-drag between people to link parent and child."
					</p>
				</div>
				<ExportButton canvas_ref=canvas_ref />
				<EditPanel editor=editor />
			</div>
		</ErrorBoundary>
	}
}
