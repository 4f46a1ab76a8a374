//! Leptos component wrapping the schema graph canvas.
//!
//! The component owns a `<canvas>` and a [`GraphState`] shared with its event
//! handlers. One effect mounts the canvas and starts the
//! `requestAnimationFrame` loop; a second one rebuilds the graph and reruns the
//! layout whenever the element signal changes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::layout::LayoutKind;
use super::render;
use super::scale::ScaleConfig;
use super::state::{GraphState, Tap};
use super::theme::{Theme, ThemeName};
use super::types::{Element, NodeElement};

/// Bundles graph state with visual configuration.
struct GraphContext {
	state: GraphState,
	scale: ScaleConfig,
	theme: Theme,
}

/// Longest frame step fed to the simulation, in seconds.
const MAX_FRAME_DT: f64 = 0.1;

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>, fallback: f64| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(dim(window.inner_width(), 800.0), dim(window.inner_height(), 600.0))
}

fn canvas_size(
	canvas: &HtmlCanvasElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> (f64, f64) {
	if fullscreen {
		if let Some(window) = web_sys::window() {
			return viewport_size(&window);
		}
	}
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
				.unwrap_or(600.0)
		}),
	)
}

/// Renders the schema graph on a canvas element.
///
/// `elements` is reactive: every change rebuilds the graph and reruns the
/// layout. Tapping a node selects it, highlights its direct neighborhood and
/// reports it through `on_select`. Tapping the background clears the
/// highlight. Dragging a node moves it, dragging the background pans, and the
/// wheel zooms.
#[component]
pub fn SchemaGraphCanvas(
	#[prop(into)] elements: Signal<Vec<Element>>,
	#[prop(optional, into)] on_select: Option<Callback<NodeElement>>,
	#[prop(default = LayoutKind::Hierarchical)] layout: LayoutKind,
	#[prop(default = ThemeName::Light)] theme: ThemeName,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = canvas_size(&canvas, fullscreen, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("schema-graph: canvas 2d context unavailable");
			return;
		};

		let state = GraphState::new(&elements.get_untracked(), w, h, layout);
		info!(
			"schema-graph: canvas {}x{} with {} nodes, {} edges",
			w,
			h,
			state.node_count(),
			state.edge_count()
		);
		*context_init.borrow_mut() = Some(GraphContext {
			state,
			scale: ScaleConfig::default(),
			theme: Theme::named(theme),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = canvas_size(&canvas_resize, fullscreen, width, height);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		let last_frame = Rc::new(Cell::new(js_sys::Date::now()));
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last_frame.get()) / 1000.0).clamp(0.0, MAX_FRAME_DT);
			last_frame.set(now);

			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(dt as f32);
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_data = context.clone();
	Effect::new(move |_| {
		let elements = elements.get();
		if let Some(ref mut c) = *context_data.borrow_mut() {
			c.state.rebuild(&elements);
			info!(
				"schema-graph: relayout with {} nodes, {} edges",
				c.state.node_count(),
				c.state.edge_count()
			);
		}
	});

	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.pointer_down(x, y, &c.scale);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.pointer_move(x, y);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		// Release the borrow before running the callback.
		let tap = context_mu
			.borrow_mut()
			.as_mut()
			.and_then(|c| c.state.pointer_up());
		match tap {
			Some(Tap::Node(node)) => {
				debug!("schema-graph: tapped {}", node.id());
				if let Some(cb) = on_select.as_ref() {
					cb.run(node);
				}
			}
			Some(Tap::Background) => debug!("schema-graph: cleared highlight"),
			None => {}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.cancel_pointer();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let mouse: &MouseEvent = &ev;
		let Some((x, y)) = pointer(mouse) else {
			return;
		};
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			c.state.transform.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="schema-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
