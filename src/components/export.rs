//! Saving the rendered tree as a PNG download.

use leptos::html::Canvas;
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

/// Name of the downloaded image.
pub const EXPORT_FILE_NAME: &str = "diagram.png";

/// Failures of the export adapter. These never touch the tree itself.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
	#[error("no window available")]
	NoWindow,
	#[error("no document available")]
	NoDocument,
	#[error("failed to encode canvas: {0}")]
	Encode(String),
	#[error("failed to start download: {0}")]
	Download(String),
}

fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Encodes the current canvas contents as a PNG data URI and downloads it.
pub fn export_png(canvas: &HtmlCanvasElement) -> Result<(), ExportError> {
	let data_url = canvas
		.to_data_url_with_type("image/png")
		.map_err(|e| ExportError::Encode(describe(&e)))?;
	let document = web_sys::window()
		.ok_or(ExportError::NoWindow)?
		.document()
		.ok_or(ExportError::NoDocument)?;
	let link: HtmlAnchorElement = document
		.create_element("a")
		.map_err(|e| ExportError::Download(describe(&e)))?
		.dyn_into()
		.map_err(|e| ExportError::Download(describe(&e)))?;
	link.set_href(&data_url);
	link.set_download(EXPORT_FILE_NAME);
	link.click();
	Ok(())
}

/// Button that downloads the canvas as `diagram.png`.
#[component]
pub fn ExportButton(canvas_ref: NodeRef<Canvas>) -> impl IntoView {
	let on_click = move |_| {
		let Some(canvas) = canvas_ref.get() else {
			error!("Export failed: canvas not mounted");
			return;
		};
		match export_png(&canvas) {
			Ok(()) => info!("Exported {}", EXPORT_FILE_NAME),
			Err(e) => error!("Export failed: {}", e),
		}
	};

	view! {
		<button type="button" class="export-button" on:click=on_click>
			"Export as Image"
		</button>
	}
}
