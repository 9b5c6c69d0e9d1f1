use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::{CanvasState, ConnectDraft};
use crate::model::{Command, TreeEditor};

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|h| h.as_f64())
			.unwrap_or(600.0),
	)
}

/// Pointer position relative to the canvas.
fn local_point(canvas_ref: NodeRef<Canvas>, x: i32, y: i32) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((x as f64 - rect.left(), y as f64 - rect.top()))
}

/// Canvas view of the family tree.
///
/// Click a person to select them, drag to move, shift-drag from one person
/// to another to link parent to child. Dragging the background pans and the
/// wheel zooms.
#[component]
pub fn FamilyTreeCanvas(
	editor: RwSignal<TreeEditor>,
	canvas_ref: NodeRef<Canvas>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let state: Rc<RefCell<Option<CanvasState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());
	let dispatch = move |command: Command| editor.update(|e| e.apply(command));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("Canvas has no 2d context");
				return;
			}
		};
		*state_init.borrow_mut() = Some(CanvasState::new(w, h));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref s) = *state_anim.borrow() {
				let _ = editor.try_with_untracked(|e| render::render(s, e.store(), &ctx));
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			let hit = editor.with_untracked(|e| s.node_at_position(e.store(), x, y).cloned());
			match hit {
				Some(node) if ev.shift_key() => {
					let (gx, gy) = s.screen_to_graph(x, y);
					s.connect = Some(ConnectDraft {
						source: node.id,
						x: gx,
						y: gy,
					});
				}
				Some(node) => s.start_drag(&node, x, y),
				None => s.start_pan(x, y),
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		let mut moved = None;
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.hover = editor.with_untracked(|e| s.node_at_position(e.store(), x, y).map(|n| n.id.clone()));

			let (gx, gy) = s.screen_to_graph(x, y);
			if let Some(draft) = s.connect.as_mut() {
				(draft.x, draft.y) = (gx, gy);
			} else if s.drag.node_id.is_some() {
				moved = s.drag_to(x, y);
			} else {
				s.pan_to(x, y);
			}
		}
		if let Some((id, position)) = moved {
			dispatch(Command::MoveNode { id, position });
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let point = local_point(canvas_ref, ev.client_x(), ev.client_y());
		let mut command = None;
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if let Some(draft) = s.connect.take() {
				let target = point.and_then(|(x, y)| {
					editor.with_untracked(|e| s.node_at_position(e.store(), x, y).map(|n| n.id.clone()))
				});
				command = target.map(|target| Command::Connect {
					source: draft.source,
					target,
				});
			} else if let (Some(id), false) = (s.drag.node_id.clone(), s.drag.moved) {
				command = Some(Command::Select(id));
			}
			s.release();
		}
		if let Some(command) = command {
			dispatch(command);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.release();
			s.hover = None;
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="family-tree-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
