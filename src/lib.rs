//! schema-graph-viewer: interactive viewer for schema graphs.
//!
//! This crate provides a WASM-based viewer that polls a static JSON graph
//! document, lays it out hierarchically, and shows the properties of a
//! clicked node while highlighting its direct neighborhood.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, debug, info, warn};

pub mod components;
pub mod config;
pub mod loader;
pub mod viewer;

pub use components::schema_graph::{EdgeElement, Element, NodeElement, SchemaGraphCanvas};
pub use config::ViewerConfig;
pub use loader::{Adapter, GraphSource, LoadError};
pub use viewer::{PayloadOutcome, ViewerState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("schema-graph: logging initialized");
}

/// Fetch the active source once and offer the result to the viewer state.
fn fetch_active_source(viewer: RwSignal<ViewerState>, config: StoredValue<ViewerConfig>) {
	let file = viewer.with_untracked(|v| v.source.clone());
	let Some((source, path)) = config.with_value(|c| {
		c.source(&file)
			.map(|s| (s.clone(), s.resource_path(&c.data_prefix)))
	}) else {
		warn!("schema-graph: unknown source {:?}", file);
		return;
	};
	let Some(request) = viewer.try_update_untracked(|v| v.begin_request()) else {
		return;
	};

	debug!("schema-graph: loading {} (request {})", path, request.seq);
	spawn_local(async move {
		let payload = match loader::fetch_payload(&path).await {
			Ok(payload) => payload,
			Err(e) => {
				warn!("schema-graph: loading {} failed: {}", path, e);
				return;
			}
		};
		match viewer.try_update(|v| v.apply_payload(&request, source.adapter, &payload)) {
			Some(PayloadOutcome::Replaced { nodes, edges }) => {
				info!("schema-graph: {} now has {} nodes, {} edges", path, nodes, edges)
			}
			Some(PayloadOutcome::Unchanged) => debug!("schema-graph: {} unchanged", path),
			Some(PayloadOutcome::Stale) => {
				debug!("schema-graph: dropped stale response {} for {}", request.seq, path)
			}
			None => {}
		}
	});
}

/// Main application component.
/// Polls the selected source and renders the graph next to the property panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = config::load_config();
	let (layout, theme) = (config.layout, config.theme);
	let interval = Duration::from_millis(config.poll_interval_ms as u64);
	let sources = config.sources.clone();
	let viewer = RwSignal::new(ViewerState::new(config.initial_source().file.clone()));
	let config = StoredValue::new(config);

	// Each tick bumps the poll counter; the effect below does the fetching.
	match set_interval_with_handle(move || viewer.update(ViewerState::poll), interval) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("schema-graph: could not start polling: {:?}", e),
	}

	let poll_key = Memo::new(move |_| viewer.with(|v| (v.source.clone(), v.tick)));
	Effect::new(move |_| {
		poll_key.track();
		fetch_active_source(viewer, config);
	});

	let elements = Memo::new(move |_| viewer.with(|v| v.elements.clone()));

	let on_source_change = move |ev: web_sys::Event| {
		let file = event_target_value(&ev);
		info!("schema-graph: switching to source {}", file);
		viewer.update(|v| v.set_source(&file));
	};

	let on_select = move |node: NodeElement| {
		info!("schema-graph: selected {}", node.id());
		viewer.update(|v| v.select(&node));
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Schema Graph Viewer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app" style="display: flex; flex-direction: column; width: 100%; height: 100vh;">
			<select
				class="source-picker"
				prop:value=move || viewer.with(|v| v.source.clone())
				on:change=on_source_change
			>
				{sources
					.into_iter()
					.map(|s| view! { <option value=s.file.clone()>{s.label()}</option> })
					.collect_view()}
			</select>
			<div class="parent" style="display: flex; flex: 1; min-height: 0;">
				<span class="properties" style="min-width: 14rem; padding: 0.5rem;">
					"Properties For: "
					{move || viewer.with(|v| v.selected_label().to_string())}
					<ul>
						{move || {
							viewer
								.with(|v| v.properties.clone())
								.into_iter()
								.map(|p| view! { <li>{p}</li> })
								.collect_view()
						}}
					</ul>
				</span>
				<div class="graph" style="flex: 1; min-width: 0;">
					<SchemaGraphCanvas elements=elements on_select=on_select layout=layout theme=theme />
				</div>
			</div>
		</div>
	}
}
