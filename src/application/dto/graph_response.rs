use crate::graph_generation::domain::DependencyGraph;
use std::path::PathBuf;

/// GraphResponse - result of the graph building use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// Visited descriptors and their declared dependencies
    pub graph: DependencyGraph,
    /// Descriptors that were not well-formed XML and contributed no dependencies
    pub unparsable_descriptors: Vec<PathBuf>,
    /// Dependency entries dropped because a coordinate was missing
    pub skipped_dependencies: usize,
}

impl GraphResponse {
    pub fn new(
        graph: DependencyGraph,
        unparsable_descriptors: Vec<PathBuf>,
        skipped_dependencies: usize,
    ) -> Self {
        Self {
            graph,
            unparsable_descriptors,
            skipped_dependencies,
        }
    }
}
