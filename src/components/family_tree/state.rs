use crate::model::{GraphStore, Node, Position};

/// Node box width in graph units.
pub const NODE_WIDTH: f64 = 150.0;
/// Node box height in graph units.
pub const NODE_HEIGHT: f64 = 44.0;
/// Background dot spacing in graph units.
pub const GRID_GAP: f64 = 12.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
/// Pointer travel (screen pixels) before a press on a node becomes a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_id: Option<String>,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Position,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// A link being drawn from `source` towards the pointer (graph coordinates).
#[derive(Clone, Debug)]
pub struct ConnectDraft {
	pub source: String,
	pub x: f64,
	pub y: f64,
}

/// View-only state of the canvas. Never holds tree data.
pub struct CanvasState {
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub connect: Option<ConnectDraft>,
	pub hover: Option<String>,
	pub width: f64,
	pub height: f64,
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			transform: ViewTransform {
				x: width / 2.0 - NODE_WIDTH / 2.0,
				y: height / 3.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			connect: None,
			hover: None,
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point.
	pub fn node_at_position<'a>(&self, store: &'a GraphStore, sx: f64, sy: f64) -> Option<&'a Node> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		store.nodes().iter().rev().find(|node| {
			let p = node.position;
			gx >= p.x && gx <= p.x + NODE_WIDTH && gy >= p.y && gy <= p.y + NODE_HEIGHT
		})
	}

	pub fn start_drag(&mut self, node: &Node, sx: f64, sy: f64) {
		self.drag = DragState {
			node_id: Some(node.id.clone()),
			moved: false,
			start_x: sx,
			start_y: sy,
			node_start: node.position,
		};
	}

	/// Where the dragged node should be for a pointer at `(sx, sy)`.
	/// `None` until the pointer has left the click threshold.
	pub fn drag_to(&mut self, sx: f64, sy: f64) -> Option<(String, Position)> {
		let id = self.drag.node_id.clone()?;
		let (dx, dy) = (sx - self.drag.start_x, sy - self.drag.start_y);
		if !self.drag.moved && dx.hypot(dy) < DRAG_THRESHOLD {
			return None;
		}
		self.drag.moved = true;
		let k = self.transform.k;
		Some((
			id,
			Position::new(self.drag.node_start.x + dx / k, self.drag.node_start.y + dy / k),
		))
	}

	pub fn start_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// Zooms around the screen point, keeping it fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Clears every in-progress gesture.
	pub fn release(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.connect = None;
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hover.as_deref() == Some(id)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
