pub mod dependency_graph;
pub mod dependency_id;

pub use dependency_graph::{DependencyGraph, GraphEntry};
pub use dependency_id::DependencyId;
