//! Graph state, selection and pointer interaction.
//!
//! Wraps a `force_graph` graph holding the node elements, the view transform
//! for pan/zoom, and the highlight state of the current selection. Pointer
//! handling lives here too, so the canvas component only translates DOM events
//! into calls on [`GraphState`].

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::layout::{Bounds, HierarchicalConfig, LayoutKind, hierarchical, label_width};
use super::scale::{ScaleConfig, ScaledValues};
use super::types::{Element, NodeElement};

/// Smallest zoom factor for wheel zoom and fitting.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest zoom factor for wheel zoom.
pub const MAX_ZOOM: f64 = 10.0;
/// Fitting never zooms in further than this, so tiny graphs are not blown up.
const MAX_FIT_ZOOM: f64 = 2.0;
/// Screen padding kept around the graph when fitting.
const FIT_PADDING: f64 = 50.0;
/// A press that moves less than this (screen px) before release is a tap.
pub const TAP_TOLERANCE: f64 = 4.0;

/// Element data attached to each node in the graph.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// The node element as loaded.
	pub element: NodeElement,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	/// Horizontal offset in screen pixels.
	pub x: f64,
	/// Vertical offset in screen pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Transform that centers `bounds` in a `width` x `height` viewport.
	pub fn fit(bounds: &Bounds, width: f64, height: f64) -> Self {
		let avail_w = (width - 2.0 * FIT_PADDING).max(1.0);
		let avail_h = (height - 2.0 * FIT_PADDING).max(1.0);
		let k = (avail_w / bounds.width().max(1.0))
			.min(avail_h / bounds.height().max(1.0))
			.clamp(MIN_ZOOM, MAX_FIT_ZOOM);
		let (cx, cy) = bounds.center();
		Self {
			x: width / 2.0 - cx * k,
			y: height / 2.0 - cy * k,
			k,
		}
	}

	/// Zoom by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Whether a node is being dragged.
	pub active: bool,
	/// Dragged node.
	pub node_idx: Option<DefaultNodeIdx>,
	/// Press position, screen x.
	pub start_x: f64,
	/// Press position, screen y.
	pub start_y: f64,
	/// Node position when the drag started, world x.
	pub node_start_x: f32,
	/// Node position when the drag started, world y.
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether the view is being panned.
	pub active: bool,
	/// Press position, screen x.
	pub start_x: f64,
	/// Press position, screen y.
	pub start_y: f64,
	/// Transform offset when the pan started, x.
	pub transform_start_x: f64,
	/// Transform offset when the pan started, y.
	pub transform_start_y: f64,
}

/// Where the current press started and whether it has turned into a drag.
#[derive(Clone, Debug)]
struct Press {
	x: f64,
	y: f64,
	moved: bool,
}

/// What a completed tap landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum Tap {
	/// A node was tapped; it is now selected.
	Node(NodeElement),
	/// Empty canvas was tapped; highlights are cleared.
	Background,
}

/// Highlight of the selected node's direct neighborhood.
///
/// The target sets change instantly on selection; per-element intensities
/// follow them with exponential smoothing so highlights fade in and out.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	selected: Option<DefaultNodeIdx>,
	/// Selected node plus its direct successors and predecessors.
	target_nodes: HashSet<DefaultNodeIdx>,
	/// Edges touching the selected node, as (source, target).
	target_edges: HashSet<(DefaultNodeIdx, DefaultNodeIdx)>,
	node_intensity: HashMap<DefaultNodeIdx, f64>,
	edge_intensity: HashMap<(DefaultNodeIdx, DefaultNodeIdx), f64>,
}

impl HighlightState {
	/// Select `node` and highlight exactly its one-hop neighborhood.
	pub fn select(&mut self, node: DefaultNodeIdx, edges: &[(DefaultNodeIdx, DefaultNodeIdx)]) {
		self.selected = Some(node);
		self.target_nodes.clear();
		self.target_edges.clear();
		self.target_nodes.insert(node);
		for &(src, tgt) in edges {
			if src == node || tgt == node {
				self.target_nodes.insert(src);
				self.target_nodes.insert(tgt);
				self.target_edges.insert((src, tgt));
			}
		}
	}

	/// Background click: drop the selection marker and every highlight.
	pub fn clear(&mut self) {
		self.selected = None;
		self.target_nodes.clear();
		self.target_edges.clear();
	}

	/// Currently selected node.
	pub fn selected(&self) -> Option<DefaultNodeIdx> {
		self.selected
	}

	/// Whether a node is the selection or one of its neighbors.
	pub fn is_node_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.target_nodes.contains(&idx)
	}

	/// Whether an edge touches the selected node.
	pub fn is_edge_highlighted(&self, src: DefaultNodeIdx, tgt: DefaultNodeIdx) -> bool {
		self.target_edges.contains(&(src, tgt))
	}

	/// Number of edges touching the selection.
	pub fn highlighted_edge_count(&self) -> usize {
		self.target_edges.len()
	}

	/// Animate intensities towards their targets.
	///
	/// value += (target - value) * (1 - e^(-speed * dt))
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 10.0;
		const FADE_OUT_SPEED: f64 = 6.0;

		let fade_in = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_nodes {
			let i = self.node_intensity.entry(idx).or_insert(0.0);
			*i += (1.0 - *i) * fade_in;
		}
		for &edge in &self.target_edges {
			let i = self.edge_intensity.entry(edge).or_insert(0.0);
			*i += (1.0 - *i) * fade_in;
		}

		let targets = &self.target_nodes;
		self.node_intensity.retain(|idx, i| {
			if !targets.contains(idx) {
				*i *= fade_out;
			}
			*i > 0.005
		});
		let targets = &self.target_edges;
		self.edge_intensity.retain(|edge, i| {
			if !targets.contains(edge) {
				*i *= fade_out;
			}
			*i > 0.005
		});
	}

	/// Current highlight intensity of a node, 0 to 1.
	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Current highlight intensity of an edge, 0 to 1.
	pub fn edge_intensity(&self, src: DefaultNodeIdx, tgt: DefaultNodeIdx) -> f64 {
		self.edge_intensity.get(&(src, tgt)).copied().unwrap_or(0.0)
	}
}

/// Core graph state: elements, layout positions, view and highlight.
///
/// Rebuilt from scratch whenever the element list changes; mutated by pointer
/// events and by the animation loop between rebuilds.
pub struct GraphState {
	/// Node storage, positions and the force simulation.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Current pan and zoom.
	pub transform: ViewTransform,
	/// In-progress node drag.
	pub drag: DragState,
	/// In-progress pan.
	pub pan: PanState,
	/// Selection and neighborhood highlight.
	pub highlight: HighlightState,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Layout run on every rebuild.
	pub layout: LayoutKind,
	/// Whether the physics simulation advances each frame.
	pub animation_running: bool,
	press: Option<Press>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	ids: HashMap<String, DefaultNodeIdx>,
}

impl GraphState {
	/// Build the graph from `elements`, lay it out and fit it to the viewport.
	///
	/// Duplicate node ids and edges to unknown nodes are skipped with a warning.
	pub fn new(elements: &[Element], width: f64, height: f64, layout: LayoutKind) -> Self {
		let mut nodes: Vec<&NodeElement> = Vec::new();
		let mut slots: HashMap<&str, usize> = HashMap::new();
		for node in elements.iter().filter_map(Element::as_node) {
			if slots.contains_key(node.id()) {
				warn!("schema-graph: duplicate node id {:?} ignored", node.id());
				continue;
			}
			slots.insert(node.id(), nodes.len());
			nodes.push(node);
		}

		let mut links = Vec::new();
		for edge in elements.iter().filter_map(Element::as_edge) {
			match (slots.get(edge.data.source.as_str()), slots.get(edge.data.target.as_str())) {
				(Some(&s), Some(&t)) => links.push((s, t)),
				_ => warn!(
					"schema-graph: edge {} -> {} references an unknown node",
					edge.data.source, edge.data.target
				),
			}
		}

		let positions = match layout {
			LayoutKind::Hierarchical => {
				let sizes = ScaleConfig::default();
				let widths: Vec<f64> = nodes
					.iter()
					.map(|n| label_width(n.id(), sizes.label_size).max(2.0 * sizes.node_radius))
					.collect();
				hierarchical(&widths, &links, &HierarchicalConfig::default())
			}
			LayoutKind::Force => circle_positions(nodes.len()),
		};

		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 250.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut ids = HashMap::new();
		let mut indices = Vec::with_capacity(nodes.len());
		for (node, &(x, y)) in nodes.iter().zip(&positions) {
			let idx = graph.add_node(NodeData {
				x: x as f32,
				y: y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					element: (*node).clone(),
				},
			});
			ids.insert(node.id().to_string(), idx);
			indices.push(idx);
		}

		let mut edges = Vec::with_capacity(links.len());
		for (s, t) in links {
			let (src, tgt) = (indices[s], indices[t]);
			// The simulation cannot hold self loops; they are only drawn.
			if src != tgt {
				graph.add_edge(src, tgt, EdgeData::default());
			}
			edges.push((src, tgt));
		}

		let transform = Bounds::of(&positions)
			.map(|b| ViewTransform::fit(&b, width, height))
			.unwrap_or(ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			});

		Self {
			graph,
			transform,
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			layout,
			animation_running: layout == LayoutKind::Force,
			press: None,
			edges,
			ids,
		}
	}

	/// Replace the elements and run the layout again. A selected node that
	/// still exists stays selected.
	pub fn rebuild(&mut self, elements: &[Element]) {
		let selected = self.selected_element().map(|n| n.data.id);
		*self = Self::new(elements, self.width, self.height, self.layout);
		if let Some(idx) = selected.and_then(|id| self.index_of(&id)) {
			self.highlight.select(idx, &self.edges);
		}
	}

	/// Number of distinct nodes.
	pub fn node_count(&self) -> usize {
		self.ids.len()
	}

	/// Number of drawn edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Every drawn edge as (source, target), self loops included.
	pub fn edges(&self) -> &[(DefaultNodeIdx, DefaultNodeIdx)] {
		&self.edges
	}

	/// World-space positions of all nodes.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::with_capacity(self.ids.len());
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	/// Node lookup by element id.
	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	/// Element of the node at `idx`.
	pub fn node_element(&self, idx: DefaultNodeIdx) -> Option<NodeElement> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.element.clone());
			}
		});
		found
	}

	/// World-space position of a node.
	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	/// Element of the selected node, if any.
	pub fn selected_element(&self) -> Option<NodeElement> {
		self.highlight.selected().and_then(|idx| self.node_element(idx))
	}

	/// Screen pixels to world units.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// World units to screen pixels.
	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	/// Topmost node under a screen position.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < scale.hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Select a node and highlight its neighborhood.
	pub fn select(&mut self, idx: DefaultNodeIdx) {
		self.highlight.select(idx, &self.edges);
	}

	/// Clear the selection and all highlights.
	pub fn clear_highlight(&mut self) {
		self.highlight.clear();
	}

	/// Start a node drag or a pan, depending on what is under the pointer.
	pub fn pointer_down(&mut self, sx: f64, sy: f64, config: &ScaleConfig) {
		self.press = Some(Press {
			x: sx,
			y: sy,
			moved: false,
		});
		if let Some(idx) = self.node_at_position(sx, sy, config) {
			let (nx, ny) = self.node_position(idx).unwrap_or_default();
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: sx,
				start_y: sy,
				node_start_x: nx as f32,
				node_start_y: ny as f32,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	/// Drag the pressed node or pan the view once the press moved far enough.
	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		let Some(press) = self.press.as_mut() else {
			return;
		};
		if !press.moved && (sx - press.x).hypot(sy - press.y) >= TAP_TOLERANCE {
			press.moved = true;
		}
		if !press.moved {
			return;
		}

		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				let (dx, dy) = (
					(sx - self.drag.start_x) / self.transform.k,
					(sy - self.drag.start_y) / self.transform.k,
				);
				let (nx, ny) = (
					self.drag.node_start_x + dx as f32,
					self.drag.node_start_y + dy as f32,
				);
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// Finish a press. Returns what was tapped unless the press became a drag.
	/// A node tap selects it; a background tap clears all highlights.
	pub fn pointer_up(&mut self) -> Option<Tap> {
		let press = self.press.take();
		let dragged = self.drag.node_idx.filter(|_| self.drag.active);
		self.cancel_pointer();

		press.filter(|p| !p.moved)?;
		match dragged {
			Some(idx) => {
				self.select(idx);
				self.node_element(idx).map(Tap::Node)
			}
			None => {
				self.clear_highlight();
				Some(Tap::Background)
			}
		}
	}

	/// Pointer left the canvas: abandon any press without tapping.
	pub fn cancel_pointer(&mut self) {
		self.press = None;
		self.drag = DragState::default();
		self.pan = PanState::default();
	}

	/// Advance the simulation (force layout only) and the highlight fades by `dt` seconds.
	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.graph.update(dt);
		}
		self.highlight.tick(dt as f64);
	}

	/// Track a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Initial ring placement for the force simulation.
fn circle_positions(n: usize) -> Vec<(f64, f64)> {
	(0..n)
		.map(|i| {
			let angle = (i as f64) * 2.0 * PI / n as f64;
			(100.0 * angle.cos(), 100.0 * angle.sin())
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::schema_graph::EdgeElement;

	fn node(id: &str) -> Element {
		NodeElement::new(id, vec![format!("{id}_prop")]).into()
	}

	fn edge(s: &str, t: &str) -> Element {
		EdgeElement::new(s, t).into()
	}

	/// a -> b -> c, d -> b
	fn sample() -> GraphState {
		let elements = vec![
			node("a"),
			node("b"),
			node("c"),
			node("d"),
			edge("a", "b"),
			edge("b", "c"),
			edge("d", "b"),
		];
		GraphState::new(&elements, 800.0, 600.0, LayoutKind::Hierarchical)
	}

	fn screen_of(state: &GraphState, id: &str) -> (f64, f64) {
		let (gx, gy) = state.node_position(state.index_of(id).unwrap()).unwrap();
		state.graph_to_screen(gx, gy)
	}

	fn tap(state: &mut GraphState, (x, y): (f64, f64)) -> Option<Tap> {
		state.pointer_down(x, y, &ScaleConfig::default());
		state.pointer_up()
	}

	#[test]
	fn builds_nodes_and_known_edges_only() {
		let elements = vec![node("a"), node("a"), node("b"), edge("a", "b"), edge("a", "zz")];
		let state = GraphState::new(&elements, 800.0, 600.0, LayoutKind::Hierarchical);
		assert_eq!(state.node_count(), 2);
		assert_eq!(state.edge_count(), 1);
		assert!(!state.animation_running);
	}

	#[test]
	fn hierarchical_places_parents_above_children() {
		let state = sample();
		let y = |id| state.node_position(state.index_of(id).unwrap()).unwrap().1;
		assert!(y("a") < y("b"));
		assert!(y("d") < y("b"));
		assert!(y("b") < y("c"));
	}

	#[test]
	fn fitted_layout_is_on_screen() {
		let state = sample();
		for id in ["a", "b", "c", "d"] {
			let (x, y) = screen_of(&state, id);
			assert!((0.0..=800.0).contains(&x) && (0.0..=600.0).contains(&y), "{id} off screen");
		}
	}

	#[test]
	fn selection_highlights_direct_neighbors_only() {
		let mut state = sample();
		let [a, b, c, d] = ["a", "b", "c", "d"].map(|id| state.index_of(id).unwrap());

		state.select(a);
		assert!(state.highlight.is_node_highlighted(a));
		assert!(state.highlight.is_node_highlighted(b));
		assert!(!state.highlight.is_node_highlighted(c));
		assert!(!state.highlight.is_node_highlighted(d));
		assert!(state.highlight.is_edge_highlighted(a, b));
		assert!(!state.highlight.is_edge_highlighted(b, c));

		state.select(b);
		for idx in [a, b, c, d] {
			assert!(state.highlight.is_node_highlighted(idx));
		}
		assert_eq!(state.highlight.highlighted_edge_count(), 3);
	}

	#[test]
	fn new_selection_replaces_previous_highlight() {
		let mut state = sample();
		let [a, b, c] = ["a", "b", "c"].map(|id| state.index_of(id).unwrap());
		state.select(a);
		state.select(c);
		assert!(!state.highlight.is_node_highlighted(a));
		assert!(!state.highlight.is_edge_highlighted(a, b));
		assert!(state.highlight.is_edge_highlighted(b, c));
	}

	#[test]
	fn tapping_a_node_selects_it() {
		let mut state = sample();
		let at = screen_of(&state, "b");
		let tapped = tap(&mut state, at);
		assert_eq!(tapped, Some(Tap::Node(NodeElement::new("b", vec!["b_prop".into()]))));
		assert_eq!(state.highlight.selected(), state.index_of("b"));
	}

	#[test]
	fn background_tap_clears_every_edge_highlight() {
		let mut state = sample();
		state.select(state.index_of("b").unwrap());
		assert_eq!(state.highlight.highlighted_edge_count(), 3);

		assert_eq!(tap(&mut state, (1.0, 1.0)), Some(Tap::Background));
		assert_eq!(state.highlight.highlighted_edge_count(), 0);
		assert!(state.highlight.selected().is_none());

		for _ in 0..200 {
			state.tick(0.016);
		}
		let (a, b) = (state.index_of("a").unwrap(), state.index_of("b").unwrap());
		assert_eq!(state.highlight.edge_intensity(a, b), 0.0);
	}

	#[test]
	fn dragging_a_node_is_not_a_tap() {
		let mut state = sample();
		let (x, y) = screen_of(&state, "c");
		state.pointer_down(x, y, &ScaleConfig::default());
		state.pointer_move(x + 30.0, y + 10.0);
		assert_eq!(state.pointer_up(), None);
		assert!(state.highlight.selected().is_none());

		let (nx, _) = screen_of(&state, "c");
		assert!((nx - (x + 30.0)).abs() < 0.01);
	}

	#[test]
	fn panning_moves_the_view() {
		let mut state = sample();
		let before = state.transform.x;
		state.pointer_down(1.0, 1.0, &ScaleConfig::default());
		state.pointer_move(21.0, 1.0);
		assert_eq!(state.pointer_up(), None);
		assert!((state.transform.x - (before + 20.0)).abs() < 1e-9);
	}

	#[test]
	fn rebuild_keeps_surviving_selection() {
		let mut state = sample();
		state.select(state.index_of("b").unwrap());
		state.rebuild(&[node("b"), node("c"), edge("b", "c")]);
		assert_eq!(state.selected_element().map(|n| n.data.id), Some("b".to_string()));
		assert_eq!(state.highlight.highlighted_edge_count(), 1);

		state.rebuild(&[node("x")]);
		assert!(state.selected_element().is_none());
	}

	#[test]
	fn intensities_fade_in() {
		let mut state = sample();
		let a = state.index_of("a").unwrap();
		state.select(a);
		assert_eq!(state.highlight.node_intensity(a), 0.0);
		for _ in 0..60 {
			state.tick(0.016);
		}
		assert!(state.highlight.node_intensity(a) > 0.95);
	}

	#[test]
	fn self_loops_survive_the_force_simulation() {
		let elements = vec![
			node("Observation"),
			node("Patient"),
			edge("Observation", "Observation"),
			edge("Observation", "Patient"),
		];
		let mut state = GraphState::new(&elements, 800.0, 600.0, LayoutKind::Force);
		assert!(state.animation_running);
		for _ in 0..10 {
			state.tick(0.016);
		}
		assert_eq!(state.edge_count(), 2);

		let obs = state.index_of("Observation").unwrap();
		state.select(obs);
		assert!(state.highlight.is_edge_highlighted(obs, obs));
		assert_eq!(state.highlight.highlighted_edge_count(), 2);
	}

	#[test]
	fn zoom_keeps_anchor_point() {
		let mut t = ViewTransform::default();
		t.zoom_at(100.0, 50.0, 2.0);
		assert_eq!(t.k, 2.0);
		// The world point under (100, 50) is still under it.
		assert_eq!(((100.0 - t.x) / t.k, (50.0 - t.y) / t.k), (100.0, 50.0));
		t.zoom_at(0.0, 0.0, 1000.0);
		assert_eq!(t.k, MAX_ZOOM);
	}
}
