use crate::graph_generation::domain::DependencyGraph;
use crate::shared::Result;

/// DiagramFormatter port for rendering a dependency graph as text
pub trait DiagramFormatter {
    /// Renders the whole graph as a single document
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, graph: &DependencyGraph) -> Result<String>;
}
