//! Schema graph visualization component.
//!
//! Renders nodes and directed edges on an HTML canvas with:
//! - Automatic hierarchical layout, rerun whenever the elements change
//! - Click-to-select with highlighting of the direct neighborhood
//! - Pan, zoom and node dragging
//!
//! # Example
//!
//! ```ignore
//! use schema_graph_viewer::components::schema_graph::{
//!     EdgeElement, Element, NodeElement, SchemaGraphCanvas,
//! };
//!
//! let elements: Vec<Element> = vec![
//!     NodeElement::new("Patient", vec!["gender".into()]).into(),
//!     NodeElement::new("Observation", vec![]).into(),
//!     EdgeElement::new("Observation", "Patient").into(),
//! ];
//!
//! view! {
//!     <SchemaGraphCanvas
//!         elements=Signal::derive(move || elements.clone())
//!         on_select=move |node: NodeElement| log::info!("{}", node.id())
//!     />
//! }
//! ```

mod component;
pub mod layout;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::SchemaGraphCanvas;
pub use layout::LayoutKind;
pub use state::{GraphState, Tap};
pub use theme::{Theme, ThemeName};
pub use types::{EdgeElement, EdgeFields, Element, NodeElement, NodeFields};
