//! UI components.

pub mod schema_graph;
