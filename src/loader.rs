//! Fetching and normalizing graph documents.
//!
//! A document is a JSON object (keys are ignored) or array whose values are
//! node records `{ id, properties }` or edge records `{ source, target }`,
//! optionally wrapped as `{ "data": { ... } }`. Records are classified once,
//! here, into [`RawRecord`]; anything that is neither shape is dropped.
//! Any record with an `id` field is a node, whatever the field holds.

use std::fmt;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestCache, RequestInit, Response};

use crate::components::schema_graph::{EdgeElement, Element, NodeElement};

/// Normalization rule applied to a fetched document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adapter {
	/// Gen3-style schema graph: `data`-wrapped node and edge records.
	#[default]
	Gen3,
}

impl fmt::Display for Adapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Adapter::Gen3 => f.write_str("gen3"),
		}
	}
}

/// A fetchable graph dataset and the rule used to normalize it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSource {
	/// File stem under the data prefix, e.g. `graph` for `/data/graph.json`.
	pub file: String,
	/// Normalization rule, `gen3` when omitted.
	#[serde(default)]
	pub adapter: Adapter,
}

impl GraphSource {
	/// Source for `file` normalized with `adapter`.
	pub fn new(file: impl Into<String>, adapter: Adapter) -> Self {
		Self {
			file: file.into(),
			adapter,
		}
	}

	/// `<prefix>/<file>.json`, tolerating a trailing slash on the prefix.
	pub fn resource_path(&self, prefix: &str) -> String {
		format!("{}/{}.json", prefix.trim_end_matches('/'), self.file)
	}

	/// Text shown in the source picker.
	pub fn label(&self) -> String {
		format!("{} - {}", self.file, self.adapter)
	}
}

impl Default for GraphSource {
	fn default() -> Self {
		Self::new("graph", Adapter::Gen3)
	}
}

/// Errors raised while fetching or decoding a graph document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// Not running in a browser window.
	#[error("no browser window available")]
	NoWindow,
	/// The request itself failed (network, CORS, aborted).
	#[error("fetch failed: {0}")]
	Fetch(String),
	/// The server answered with a non-2xx status.
	#[error("GET {path} returned HTTP {status}")]
	Status {
		/// Requested path.
		path: String,
		/// HTTP status code.
		status: u16,
	},
	/// The body could not be read as text.
	#[error("response body was not text")]
	NotText,
	/// The body was not valid JSON.
	#[error("invalid JSON: {0}")]
	Parse(#[from] serde_json::Error),
}

impl LoadError {
	fn js(err: JsValue) -> Self {
		LoadError::Fetch(err.as_string().unwrap_or_else(|| format!("{err:?}")))
	}
}

/// A record classified at the loading boundary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
	/// Anything with an `id`, whatever else it carries.
	Node {
		/// The `id` field; non-string ids are kept as their JSON text.
		#[serde(deserialize_with = "id_text")]
		id: String,
		/// Property entries; a single value counts as a one-entry list.
		#[serde(default, deserialize_with = "property_list")]
		properties: Vec<Value>,
	},
	/// A `source`/`target` pair without an `id`.
	Edge {
		/// Source node id.
		source: String,
		/// Target node id.
		target: String,
	},
}

fn id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(match Value::deserialize(deserializer)? {
		Value::String(s) => s,
		other => other.to_string(),
	})
}

fn property_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
	Ok(match Value::deserialize(deserializer)? {
		Value::Array(items) => items,
		Value::Null => Vec::new(),
		other => vec![other],
	})
}

/// Records are accepted either inside a `data` envelope or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
	Wrapped { data: RawRecord },
	Bare(RawRecord),
}

impl RawRecord {
	/// Classify a single JSON value, `None` if it matches neither shape.
	pub fn classify(value: &Value) -> Option<Self> {
		match Envelope::deserialize(value) {
			Ok(Envelope::Wrapped { data }) | Ok(Envelope::Bare(data)) => Some(data),
			Err(_) => None,
		}
	}

	fn into_element(self) -> Element {
		match self {
			RawRecord::Node { id, properties } => {
				let properties = properties.into_iter().map(property_text).collect();
				NodeElement::new(id, properties).into()
			}
			RawRecord::Edge { source, target } => EdgeElement::new(source, target).into(),
		}
	}
}

/// Property entries are normally strings; anything else is shown as JSON.
fn property_text(value: Value) -> String {
	match value {
		Value::String(s) => s,
		other => other.to_string(),
	}
}

/// Values of a document in iteration order: object values or array items.
fn document_values(document: &Value) -> Vec<&Value> {
	match document {
		Value::Object(map) => map.values().collect(),
		Value::Array(items) => items.iter().collect(),
		_ => Vec::new(),
	}
}

/// Classify every value of a document, dropping the ones that match neither
/// record shape.
pub fn parse_records(document: &Value) -> Vec<RawRecord> {
	let values = document_values(document);
	let total = values.len();
	let records: Vec<RawRecord> = values.into_iter().filter_map(RawRecord::classify).collect();
	if records.len() < total {
		debug!(
			"schema-graph: dropped {} of {} records matching neither node nor edge shape",
			total - records.len(),
			total
		);
	}
	records
}

/// Turn a document into `[...nodes, ...edges]`, each group in document order.
pub fn normalize(adapter: Adapter, document: &Value) -> Vec<Element> {
	match adapter {
		Adapter::Gen3 => {
			let (nodes, edges): (Vec<RawRecord>, Vec<RawRecord>) = parse_records(document)
				.into_iter()
				.partition(|r| matches!(r, RawRecord::Node { .. }));
			nodes
				.into_iter()
				.chain(edges)
				.map(RawRecord::into_element)
				.collect()
		}
	}
}

/// GET a JSON document, bypassing the HTTP cache so polling sees edits.
pub async fn fetch_payload(path: &str) -> Result<Value, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;
	let init = RequestInit::new();
	init.set_cache(RequestCache::NoStore);

	let response = JsFuture::from(window.fetch_with_str_and_init(path, &init))
		.await
		.map_err(LoadError::js)?;
	let response: Response = response.dyn_into().map_err(LoadError::js)?;
	if !response.ok() {
		return Err(LoadError::Status {
			path: path.to_string(),
			status: response.status(),
		});
	}

	let text = JsFuture::from(response.text().map_err(LoadError::js)?)
		.await
		.map_err(LoadError::js)?;
	let text = text.as_string().ok_or(LoadError::NotText)?;
	Ok(serde_json::from_str(&text)?)
}
