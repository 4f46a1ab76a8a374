//! UI state of the viewer and the rules for replacing it.
//!
//! Fetches are tagged with a [`Request`] when issued. A response is applied
//! only if it belongs to the active source and nothing newer has been applied
//! yet. Even then the elements are replaced only when the payload differs from
//! the last one seen, so an unchanged file never triggers a relayout.

use serde_json::Value;

use crate::components::schema_graph::{Element, NodeElement};
use crate::loader::{self, Adapter};

/// Panel text shown before any node has been tapped.
pub const NO_SELECTION: &str = "[Select A Node]";

/// Ticket for one in-flight fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
	/// Issue number, increasing per fetch.
	pub seq: u64,
	/// Source the fetch was issued for.
	pub file: String,
}

/// Result of offering a fetched payload to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadOutcome {
	/// A newer response was already applied, or the source changed meanwhile.
	Stale,
	/// Same payload as last time; nothing changed.
	Unchanged,
	/// Elements were replaced.
	Replaced {
		/// Node count of the new elements.
		nodes: usize,
		/// Edge count of the new elements.
		edges: usize,
	},
}

/// Everything the viewer renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
	/// File stem of the active source.
	pub source: String,
	/// Id of the last tapped node.
	pub selected: Option<String>,
	/// Properties of the last tapped node.
	pub properties: Vec<String>,
	/// Elements currently shown, nodes first.
	pub elements: Vec<Element>,
	/// Poll counter, bumped by the interval timer.
	pub tick: u64,
	last_payload: Option<String>,
	issued: u64,
	applied: u64,
}

impl ViewerState {
	/// Empty state showing `source`.
	pub fn new(source: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			..Self::default()
		}
	}

	/// Switch to another source. The last payload is forgotten so the first
	/// response for the new source is always shown.
	pub fn set_source(&mut self, file: &str) {
		if self.source == file {
			return;
		}
		self.source = file.to_string();
		self.last_payload = None;
	}

	/// Advance the poll counter; the fetch effect reacts to it.
	pub fn poll(&mut self) {
		self.tick = self.tick.wrapping_add(1);
	}

	/// Issue a ticket for a fetch of the active source.
	pub fn begin_request(&mut self) -> Request {
		self.issued += 1;
		Request {
			seq: self.issued,
			file: self.source.clone(),
		}
	}

	/// Offer a fetched document to the state.
	pub fn apply_payload(&mut self, request: &Request, adapter: Adapter, payload: &Value) -> PayloadOutcome {
		if request.file != self.source || request.seq <= self.applied {
			return PayloadOutcome::Stale;
		}
		self.applied = request.seq;

		let canonical = payload.to_string();
		if self.last_payload.as_deref() == Some(canonical.as_str()) {
			return PayloadOutcome::Unchanged;
		}

		self.elements = loader::normalize(adapter, payload);
		self.last_payload = Some(canonical);
		let nodes = self.elements.iter().filter(|e| e.as_node().is_some()).count();
		PayloadOutcome::Replaced {
			nodes,
			edges: self.elements.len() - nodes,
		}
	}

	/// Record a tapped node and its properties for the side panel.
	pub fn select(&mut self, node: &NodeElement) {
		self.selected = Some(node.data.id.clone());
		self.properties = node.data.properties.clone();
	}

	/// Panel heading: the selected id or a placeholder.
	pub fn selected_label(&self) -> &str {
		self.selected.as_deref().unwrap_or(NO_SELECTION)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn payload() -> Value {
		json!({
			"a": { "data": { "id": "n1", "properties": ["x=1"] } },
			"b": { "data": { "id": "n2" } },
			"c": { "data": { "source": "n1", "target": "n2" } }
		})
	}

	#[test]
	fn first_payload_replaces_elements() {
		let mut state = ViewerState::new("graph");
		let req = state.begin_request();
		assert_eq!(
			state.apply_payload(&req, Adapter::Gen3, &payload()),
			PayloadOutcome::Replaced { nodes: 2, edges: 1 }
		);
		assert_eq!(state.elements.len(), 3);
	}

	#[test]
	fn same_payload_twice_leaves_state_untouched() {
		let mut state = ViewerState::new("graph");
		let first = state.begin_request();
		state.apply_payload(&first, Adapter::Gen3, &payload());
		let before = state.clone();

		let second = state.begin_request();
		assert_eq!(
			state.apply_payload(&second, Adapter::Gen3, &payload()),
			PayloadOutcome::Unchanged
		);
		assert_eq!(state.elements, before.elements);
		assert_eq!(state.last_payload, before.last_payload);
	}

	#[test]
	fn changed_payload_replaces_elements() {
		let mut state = ViewerState::new("graph");
		let first = state.begin_request();
		state.apply_payload(&first, Adapter::Gen3, &payload());

		let second = state.begin_request();
		let changed = json!([{ "data": { "id": "solo" } }]);
		assert_eq!(
			state.apply_payload(&second, Adapter::Gen3, &changed),
			PayloadOutcome::Replaced { nodes: 1, edges: 0 }
		);
		assert_eq!(state.elements[0].as_node().unwrap().id(), "solo");
	}

	#[test]
	fn out_of_order_response_is_discarded() {
		let mut state = ViewerState::new("graph");
		let slow = state.begin_request();
		let fast = state.begin_request();

		state.apply_payload(&fast, Adapter::Gen3, &payload());
		let stale = json!([{ "data": { "id": "old" } }]);
		assert_eq!(state.apply_payload(&slow, Adapter::Gen3, &stale), PayloadOutcome::Stale);
		assert_eq!(state.elements.len(), 3);
	}

	#[test]
	fn response_for_previous_source_is_discarded() {
		let mut state = ViewerState::new("graph");
		let req = state.begin_request();
		state.set_source("other");
		assert_eq!(state.apply_payload(&req, Adapter::Gen3, &payload()), PayloadOutcome::Stale);
		assert!(state.elements.is_empty());
	}

	#[test]
	fn switching_source_forgets_last_payload() {
		let mut state = ViewerState::new("graph");
		let req = state.begin_request();
		state.apply_payload(&req, Adapter::Gen3, &payload());

		state.set_source("mirror");
		let req = state.begin_request();
		assert!(matches!(
			state.apply_payload(&req, Adapter::Gen3, &payload()),
			PayloadOutcome::Replaced { .. }
		));
	}

	#[test]
	fn selection_fills_panel() {
		let mut state = ViewerState::new("graph");
		assert_eq!(state.selected_label(), NO_SELECTION);
		state.select(&NodeElement::new("Patient", vec!["gender".into(), "birthDate".into()]));
		assert_eq!(state.selected_label(), "Patient");
		assert_eq!(state.properties, vec!["gender".to_string(), "birthDate".into()]);
	}

	#[test]
	fn poll_counter_advances() {
		let mut state = ViewerState::new("graph");
		state.poll();
		state.poll();
		assert_eq!(state.tick, 2);
	}
}
