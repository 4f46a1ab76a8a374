//! Viewer configuration read from the host page.
//!
//! The page may embed `<script type="application/json" id="viewer-config">`
//! holding a [`ViewerConfig`]. Every field has a default, so a missing or
//! partial element still yields a usable configuration.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::schema_graph::{LayoutKind, ThemeName};
use crate::loader::GraphSource;

/// DOM id of the configuration script element.
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

/// Runtime configuration of the viewer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
	/// Datasets offered in the source picker. The first one is shown at start.
	pub sources: Vec<GraphSource>,
	/// URL prefix the `<file>.json` documents are served under.
	pub data_prefix: String,
	/// Delay between polls of the active source.
	pub poll_interval_ms: u32,
	/// Layout run when the elements change.
	pub layout: LayoutKind,
	/// Color theme of the canvas.
	pub theme: ThemeName,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			sources: vec![GraphSource::default()],
			data_prefix: "/data".to_string(),
			poll_interval_ms: 2000,
			layout: LayoutKind::default(),
			theme: ThemeName::default(),
		}
	}
}

impl ViewerConfig {
	/// Parse a JSON configuration, repairing values the viewer cannot run with.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		let mut config: ViewerConfig = serde_json::from_str(text)?;
		if config.sources.is_empty() {
			config.sources = vec![GraphSource::default()];
		}
		if config.poll_interval_ms == 0 {
			config.poll_interval_ms = Self::default().poll_interval_ms;
		}
		Ok(config)
	}

	/// Source shown when the viewer starts.
	pub fn initial_source(&self) -> &GraphSource {
		// `from_json` and `default` both guarantee at least one source.
		&self.sources[0]
	}

	/// Configured source with this file stem.
	pub fn source(&self, file: &str) -> Option<&GraphSource> {
		self.sources.iter().find(|s| s.file == file)
	}
}

/// Load the configuration from the DOM, falling back to defaults.
pub fn load_config() -> ViewerConfig {
	let Some(text) = config_text() else {
		return ViewerConfig::default();
	};
	match ViewerConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"schema-graph: loaded config with {} source(s)",
				config.sources.len()
			);
			config
		}
		Err(e) => {
			warn!("schema-graph: failed to parse viewer config: {}", e);
			ViewerConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::loader::Adapter;

	#[test]
	fn empty_object_gives_defaults() {
		let config = ViewerConfig::from_json("{}").unwrap();
		assert_eq!(config, ViewerConfig::default());
		assert_eq!(config.initial_source().resource_path(&config.data_prefix), "/data/graph.json");
		assert_eq!(config.layout, LayoutKind::Hierarchical);
	}

	#[test]
	fn partial_config_overrides_fields() {
		let config = ViewerConfig::from_json(
			r#"{
				"sources": [{ "file": "bmeg" }, { "file": "aced", "adapter": "gen3" }],
				"poll_interval_ms": 5000,
				"layout": "force",
				"theme": "dark"
			}"#,
		)
		.unwrap();
		assert_eq!(config.sources.len(), 2);
		assert_eq!(config.initial_source().file, "bmeg");
		assert_eq!(config.source("aced").map(|s| s.adapter), Some(Adapter::Gen3));
		assert!(config.source("missing").is_none());
		assert_eq!(config.poll_interval_ms, 5000);
		assert_eq!(config.layout, LayoutKind::Force);
		assert_eq!(config.theme, ThemeName::Dark);
		assert_eq!(config.data_prefix, "/data");
	}

	#[test]
	fn unusable_values_are_repaired() {
		let config = ViewerConfig::from_json(r#"{ "sources": [], "poll_interval_ms": 0 }"#).unwrap();
		assert_eq!(config.sources, vec![GraphSource::default()]);
		assert_eq!(config.poll_interval_ms, 2000);
	}

	#[test]
	fn unknown_adapter_is_rejected() {
		assert!(ViewerConfig::from_json(r#"{ "sources": [{ "file": "g", "adapter": "csv" }] }"#).is_err());
	}
}
